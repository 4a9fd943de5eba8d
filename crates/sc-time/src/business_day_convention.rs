//! Business-day convention used when rolling payment dates.

use sc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "FOLLOWING",
            BusinessDayConvention::ModifiedFollowing => "MODIFIED_FOLLOWING",
            BusinessDayConvention::Preceding => "PRECEDING",
            BusinessDayConvention::ModifiedPreceding => "MODIFIED_PRECEDING",
            BusinessDayConvention::Unadjusted => "UNADJUSTED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "FOLLOWING" => Ok(BusinessDayConvention::Following),
            "MODIFIED_FOLLOWING" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" => Ok(BusinessDayConvention::Preceding),
            "MODIFIED_PRECEDING" => Ok(BusinessDayConvention::ModifiedPreceding),
            "UNADJUSTED" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(Error::InvalidArgument(format!(
                "unknown business day convention '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names() {
        for c in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Unadjusted,
        ] {
            assert_eq!(c.to_string().parse::<BusinessDayConvention>(), Ok(c));
        }
        assert_eq!(
            "modified following".parse::<BusinessDayConvention>(),
            Ok(BusinessDayConvention::ModifiedFollowing)
        );
        assert!("nearest".parse::<BusinessDayConvention>().is_err());
    }
}
