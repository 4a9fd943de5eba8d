//! `Calendar` trait and the two calendars needed for payment-date rolling.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::tenor::Tenor;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use sc_core::errors::{Error, Result};
use sc_core::Time;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_business_day(date)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: NaiveDate, convention: BusinessDayConvention) -> Result<NaiveDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => roll(self, date, true),
            BusinessDayConvention::Preceding => roll(self, date, false),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(self, date, true)?;
                if adjusted.month() != date.month() {
                    roll(self, date, false)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(self, date, false)?;
                if adjusted.month() != date.month() {
                    roll(self, date, true)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Advance `date` by `tenor` and adjust the result.
    fn advance(
        &self,
        date: NaiveDate,
        tenor: Tenor,
        convention: BusinessDayConvention,
    ) -> Result<NaiveDate> {
        self.adjust(tenor.add_to(date)?, convention)
    }
}

fn roll<C: Calendar + ?Sized>(calendar: &C, mut date: NaiveDate, forward: bool) -> Result<NaiveDate> {
    while calendar.is_holiday(date) {
        let next = if forward {
            date.checked_add_days(Days::new(1))
        } else {
            date.checked_sub_days(Days::new(1))
        };
        date = next.ok_or_else(|| {
            Error::Date(format!("no business day found around {date} in {}", calendar.name()))
        })?;
    }
    Ok(date)
}

/// Year fraction between two dates on an Actual/365 (Fixed) basis.
pub fn year_fraction_act365(start: NaiveDate, end: NaiveDate) -> Time {
    (end - start).num_days() as Time / 365.0
}

/// A calendar whose only holidays are Saturdays and Sundays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "weekends only"
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// A calendar in which every day is a business day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "null"
    }

    fn is_business_day(&self, _date: NaiveDate) -> bool {
        true
    }
}
