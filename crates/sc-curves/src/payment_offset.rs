//! Payment-offset rules of forward curves.
//!
//! A forward fixing at time `t` pays at `t + offset(t)`.  The offset is
//! either a fixed year fraction or derived from a tenor code rolled on a
//! business-day calendar.

use chrono::{Days, NaiveDate};
use sc_core::errors::{Error, Result};
use sc_core::Time;
use sc_time::{year_fraction_act365, BusinessDayConvention, Calendar, Tenor, WeekendsOnly};
use std::sync::Arc;

/// Tenor code rolled on a calendar, e.g. `"6M"` following on weekends.
#[derive(Debug, Clone)]
pub struct PaymentOffsetCode {
    tenor: Tenor,
    reference_date: NaiveDate,
    calendar: Arc<dyn Calendar>,
    convention: BusinessDayConvention,
}

impl PaymentOffsetCode {
    /// A code rolled on the weekend-only calendar with the following
    /// convention.
    pub fn new(tenor: Tenor, reference_date: NaiveDate) -> Self {
        Self {
            tenor,
            reference_date,
            calendar: Arc::new(WeekendsOnly),
            convention: BusinessDayConvention::Following,
        }
    }

    /// Parse the tenor from a code such as `"3M"`.
    pub fn parse(code: &str, reference_date: NaiveDate) -> Result<Self> {
        Ok(Self::new(code.parse()?, reference_date))
    }

    /// Roll payment dates on `calendar`.
    pub fn with_calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Adjust payment dates with `convention`.
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The tenor.
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Date corresponding to time zero.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Offset in years between the fixing at `fixing_time` and its payment.
    ///
    /// The fixing date is `reference + round(365 t)` days; the payment date
    /// is the fixing date advanced by the tenor and adjusted on the calendar.
    pub fn offset(&self, fixing_time: Time) -> Result<Time> {
        let days = (fixing_time * 365.0).round();
        if !days.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "fixing time {fixing_time} cannot be mapped to a date"
            )));
        }
        let shift = Days::new(days.abs() as u64);
        let fixing_date = if days >= 0.0 {
            self.reference_date.checked_add_days(shift)
        } else {
            self.reference_date.checked_sub_days(shift)
        }
        .ok_or_else(|| {
            Error::Date(format!(
                "fixing time {fixing_time} from {} is out of range",
                self.reference_date
            ))
        })?;
        let payment_date = self
            .calendar
            .advance(fixing_date, self.tenor, self.convention)?;
        Ok(year_fraction_act365(self.reference_date, payment_date)
            - year_fraction_act365(self.reference_date, fixing_date))
    }
}

/// Payment-offset rule of a forward curve.
#[derive(Debug, Clone)]
pub enum PaymentOffset {
    /// The same year fraction at every fixing.
    Fixed(Time),
    /// A tenor rolled on a calendar.
    Code(PaymentOffsetCode),
}

impl PaymentOffset {
    /// Offset for a fixing at `fixing_time`.
    pub fn offset(&self, fixing_time: Time) -> Result<Time> {
        match self {
            PaymentOffset::Fixed(p) => Ok(*p),
            PaymentOffset::Code(code) => code.offset(fixing_time),
        }
    }
}

impl From<Time> for PaymentOffset {
    fn from(offset: Time) -> Self {
        PaymentOffset::Fixed(offset)
    }
}

impl From<PaymentOffsetCode> for PaymentOffset {
    fn from(code: PaymentOffsetCode) -> Self {
        PaymentOffset::Code(code)
    }
}
