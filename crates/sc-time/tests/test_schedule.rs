//! Integration tests for `RegularSchedule` and `ScheduleFromPeriods`.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sc_time::{RegularSchedule, Schedule, ScheduleFromPeriods, SchedulePeriod, TimeDiscretization};

#[test]
fn regular_schedule_periods_follow_the_grid() {
    let grid = TimeDiscretization::uniform(0.0, 4, 0.5).unwrap();
    let s = RegularSchedule::new(grid).unwrap();
    assert_eq!(s.number_of_periods(), 4);
    for i in 0..4 {
        let start = 0.5 * i as f64;
        assert_abs_diff_eq!(s.fixing(i), start);
        assert_abs_diff_eq!(s.period_start(i), start);
        assert_abs_diff_eq!(s.payment(i), start + 0.5);
        assert_abs_diff_eq!(s.period_end(i), start + 0.5);
        assert_abs_diff_eq!(s.period_length(i), 0.5);
    }
}

#[test]
fn regular_schedule_needs_two_times() {
    let grid = TimeDiscretization::new(vec![1.0]).unwrap();
    assert!(RegularSchedule::new(grid).is_err());
}

#[test]
fn explicit_periods_keep_their_accrual() {
    let p = SchedulePeriod {
        fixing: 0.98,
        payment: 1.27,
        period_start: 1.0,
        period_end: 1.25,
        period_length: 0.2556,
    };
    let s = ScheduleFromPeriods::new(vec![p]).unwrap();
    assert_eq!(s.number_of_periods(), 1);
    assert_abs_diff_eq!(s.fixing(0), 0.98);
    assert_abs_diff_eq!(s.payment(0), 1.27);
    assert_abs_diff_eq!(s.period_length(0), 0.2556);
}

#[test]
fn inverted_period_is_rejected() {
    let p = SchedulePeriod::from_interval(2.0, 1.0);
    assert!(ScheduleFromPeriods::new(vec![p]).is_err());
}

proptest! {
    #[test]
    fn accruals_sum_to_grid_length(steps in 1usize..40, dt in 0.01f64..2.0) {
        let grid = TimeDiscretization::uniform(0.0, steps, dt).unwrap();
        let s = RegularSchedule::new(grid.clone()).unwrap();
        let total: f64 = (0..s.number_of_periods()).map(|i| s.period_length(i)).sum();
        prop_assert!((total - grid.last()).abs() < 1e-9);
    }
}
