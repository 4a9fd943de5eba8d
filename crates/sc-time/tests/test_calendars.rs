//! Integration tests for calendars, business-day adjustment and tenors.

use chrono::NaiveDate;
use sc_time::{BusinessDayConvention, Calendar, NullCalendar, Tenor, WeekendsOnly};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekends_are_holidays() {
    let cal = WeekendsOnly;
    assert!(cal.is_business_day(date(2024, 5, 31))); // Friday
    assert!(cal.is_holiday(date(2024, 6, 1))); // Saturday
    assert!(cal.is_holiday(date(2024, 6, 2))); // Sunday
    assert!(cal.is_business_day(date(2024, 6, 3)));
}

#[test]
fn following_and_preceding() {
    let cal = WeekendsOnly;
    let saturday = date(2024, 6, 1);
    assert_eq!(
        cal.adjust(saturday, BusinessDayConvention::Following).unwrap(),
        date(2024, 6, 3)
    );
    assert_eq!(
        cal.adjust(saturday, BusinessDayConvention::Preceding).unwrap(),
        date(2024, 5, 31)
    );
    assert_eq!(
        cal.adjust(saturday, BusinessDayConvention::Unadjusted).unwrap(),
        saturday
    );
}

#[test]
fn modified_conventions_stay_in_month() {
    let cal = WeekendsOnly;
    // Saturday 30 Nov 2024: following would leave the month.
    let d = date(2024, 11, 30);
    assert_eq!(
        cal.adjust(d, BusinessDayConvention::ModifiedFollowing).unwrap(),
        date(2024, 11, 29)
    );
    // Sunday 1 Sep 2024: preceding would leave the month.
    let d = date(2024, 9, 1);
    assert_eq!(
        cal.adjust(d, BusinessDayConvention::ModifiedPreceding).unwrap(),
        date(2024, 9, 2)
    );
}

#[test]
fn null_calendar_never_adjusts() {
    let cal = NullCalendar;
    let d = date(2024, 6, 1);
    for c in [
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
    ] {
        assert_eq!(cal.adjust(d, c).unwrap(), d);
    }
}

#[test]
fn advance_by_tenor_code() {
    let cal = WeekendsOnly;
    let tenor: Tenor = "3M".parse().unwrap();
    // 1 Mar 2025 + 3M = Sunday 1 Jun 2025 → Monday 2 Jun 2025.
    assert_eq!(
        cal.advance(date(2025, 3, 1), tenor, BusinessDayConvention::Following)
            .unwrap(),
        date(2025, 6, 2)
    );
}
