//! Payment schedules consumed by products.
//!
//! A schedule is an ordered list of accrual periods, each with a fixing time,
//! a payment time, the period start and end, and the accrual fraction used
//! to scale the coupon.  Products only read schedules through the
//! [`Schedule`] trait; [`RegularSchedule`] and [`ScheduleFromPeriods`] are
//! the two concrete layouts.

use crate::time_discretization::TimeDiscretization;
use sc_core::errors::{Error, Result};
use sc_core::Time;

/// One accrual period of a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulePeriod {
    /// Time at which the floating rate is fixed.
    pub fixing: Time,
    /// Time at which the coupon is paid.
    pub payment: Time,
    /// Accrual start.
    pub period_start: Time,
    /// Accrual end.
    pub period_end: Time,
    /// Accrual (day-count) fraction of the period.
    pub period_length: Time,
}

impl SchedulePeriod {
    /// A period fixing at `start`, paying at `end`, with accrual `end - start`.
    pub fn from_interval(start: Time, end: Time) -> Self {
        Self {
            fixing: start,
            payment: end,
            period_start: start,
            period_end: end,
            period_length: end - start,
        }
    }
}

/// Read-only view on an ordered list of accrual periods.
///
/// Index arguments must be `< number_of_periods()`.
pub trait Schedule: std::fmt::Debug + Send + Sync {
    /// Number of accrual periods.
    fn number_of_periods(&self) -> usize;

    /// Period `index`.
    fn period(&self, index: usize) -> &SchedulePeriod;

    /// Fixing time of period `index`.
    fn fixing(&self, index: usize) -> Time {
        self.period(index).fixing
    }

    /// Payment time of period `index`.
    fn payment(&self, index: usize) -> Time {
        self.period(index).payment
    }

    /// Accrual start of period `index`.
    fn period_start(&self, index: usize) -> Time {
        self.period(index).period_start
    }

    /// Accrual end of period `index`.
    fn period_end(&self, index: usize) -> Time {
        self.period(index).period_end
    }

    /// Accrual fraction of period `index`.
    fn period_length(&self, index: usize) -> Time {
        self.period(index).period_length
    }
}

/// Schedule with one period per interval of a [`TimeDiscretization`].
///
/// Period `i` fixes and starts at `t[i]`, ends and pays at `t[i+1]`, and
/// accrues `t[i+1] - t[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularSchedule {
    discretization: TimeDiscretization,
    periods: Vec<SchedulePeriod>,
}

impl RegularSchedule {
    /// Build the schedule from a tenor grid.
    ///
    /// # Errors
    /// Returns an error if the grid has fewer than two times.
    pub fn new(discretization: TimeDiscretization) -> Result<Self> {
        sc_core::ensure!(
            discretization.number_of_times() >= 2,
            "a regular schedule needs at least two grid times"
        );
        let periods = discretization
            .as_slice()
            .windows(2)
            .map(|w| SchedulePeriod::from_interval(w[0], w[1]))
            .collect();
        Ok(Self {
            discretization,
            periods,
        })
    }

    /// The underlying tenor grid.
    pub fn discretization(&self) -> &TimeDiscretization {
        &self.discretization
    }
}

impl Schedule for RegularSchedule {
    fn number_of_periods(&self) -> usize {
        self.periods.len()
    }

    fn period(&self, index: usize) -> &SchedulePeriod {
        &self.periods[index]
    }
}

/// Schedule given as an explicit list of periods.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleFromPeriods {
    periods: Vec<SchedulePeriod>,
}

impl ScheduleFromPeriods {
    /// Build a schedule from explicit periods.
    ///
    /// # Errors
    /// Returns an error if a period ends before it starts or has a negative
    /// accrual fraction.
    pub fn new(periods: Vec<SchedulePeriod>) -> Result<Self> {
        for (i, p) in periods.iter().enumerate() {
            if p.period_end < p.period_start || p.period_length < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "period {i} is inverted: start {}, end {}, length {}",
                    p.period_start, p.period_end, p.period_length
                )));
            }
        }
        Ok(Self { periods })
    }

    /// All periods in order.
    pub fn periods(&self) -> &[SchedulePeriod] {
        &self.periods
    }
}

impl Schedule for ScheduleFromPeriods {
    fn number_of_periods(&self) -> usize {
        self.periods.len()
    }

    fn period(&self, index: usize) -> &SchedulePeriod {
        &self.periods[index]
    }
}
