//! `Tenor` — a time span such as `3M` or `1Y`, used by payment-offset codes.

use chrono::{Days, Months, NaiveDate};
use sc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Weeks of seven days.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl TimeUnit {
    fn code(self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }
}

/// A span made up of a length and a [`TimeUnit`].
///
/// Parsed from codes of the form `<n><unit>` with unit one of `D`, `W`, `M`,
/// `Y` (case-insensitive), e.g. `"6M"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Number of units.
    pub length: u32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Tenor {
    /// Create a new tenor.
    pub fn new(length: u32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Add this tenor to `date`.  Month arithmetic clamps to the last day of
    /// the target month (31 Jan + 1M = 28/29 Feb).
    pub fn add_to(&self, date: NaiveDate) -> Result<NaiveDate> {
        let shifted = match self.unit {
            TimeUnit::Days => date.checked_add_days(Days::new(u64::from(self.length))),
            TimeUnit::Weeks => date.checked_add_days(Days::new(7 * u64::from(self.length))),
            TimeUnit::Months => date.checked_add_months(Months::new(self.length)),
            TimeUnit::Years => self
                .length
                .checked_mul(12)
                .and_then(|m| date.checked_add_months(Months::new(m))),
        };
        shifted.ok_or_else(|| Error::Date(format!("{date} + {self} is out of range")))
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

impl FromStr for Tenor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        let invalid = || Error::InvalidArgument(format!("invalid tenor code '{s}'"));
        let unit_char = code.chars().last().ok_or_else(invalid)?;
        let unit = match unit_char.to_ascii_uppercase() {
            'D' => TimeUnit::Days,
            'W' => TimeUnit::Weeks,
            'M' => TimeUnit::Months,
            'Y' => TimeUnit::Years,
            _ => return Err(invalid()),
        };
        let length = code[..code.len() - unit_char.len_utf8()]
            .parse::<u32>()
            .map_err(|_| invalid())?;
        Ok(Tenor::new(length, unit))
    }
}
