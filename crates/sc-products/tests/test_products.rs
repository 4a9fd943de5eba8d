//! Valuation of swaps, annuities and FRAs against analytic models.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use sc_core::{Error, RandomValue};
use sc_curves::{
    AnalyticModel, CurveConfig, DiscountCurve, DiscountCurveInterpolation, ForwardCurveConfig,
    ForwardCurveInterpolation,
};
use sc_math::PathVector;
use sc_products::{
    forward_swap_rate, swap_annuity_from_forward_curve, AnalyticProduct, ForwardRateAgreement,
    Swap, SwapAnnuity,
};
use sc_time::{RegularSchedule, Schedule, ScheduleFromPeriods, SchedulePeriod, TimeDiscretization};
use std::sync::Arc;

fn regular(end: f64, step: f64) -> Arc<dyn Schedule> {
    let steps = (end / step).round() as usize;
    Arc::new(RegularSchedule::new(TimeDiscretization::uniform(0.0, steps, step).unwrap()).unwrap())
}

fn discount_curve() -> DiscountCurveInterpolation<f64> {
    DiscountCurveInterpolation::from_zero_rates(
        "discount",
        None,
        &[0.0, 1.0, 2.0, 5.0, 10.0],
        &[0.02, 0.022, 0.025, 0.03, 0.032],
        None,
        CurveConfig::default(),
    )
    .unwrap()
}

fn forward_curve<V: RandomValue>(name: &str, times: &[f64], forwards: &[V], discount: Option<&str>) -> ForwardCurveInterpolation<V> {
    ForwardCurveInterpolation::from_forwards(
        name,
        None,
        0.5,
        ForwardCurveConfig::default(),
        discount.map(str::to_string),
        None,
        times,
        forwards,
    )
    .unwrap()
}

fn market() -> AnalyticModel<f64> {
    let forwards = forward_curve(
        "forward",
        &[0.0, 1.0, 3.0, 5.0],
        &[0.03, 0.032, 0.035, 0.036],
        Some("discount"),
    );
    AnalyticModel::new()
        .add_curve("discount", Arc::new(discount_curve()))
        .add_curve("forward", Arc::new(forwards))
}

fn flat_market(forward: f64) -> AnalyticModel<f64> {
    let forwards = forward_curve("forward", &[0.0], &[forward], Some("discount"));
    AnalyticModel::new()
        .add_curve("discount", Arc::new(discount_curve()))
        .add_curve("forward", Arc::new(forwards))
}

#[test]
fn annuity_is_the_discounted_sum_of_accruals() {
    let model = market();
    let schedule = regular(5.0, 1.0);
    let annuity = SwapAnnuity::new(schedule, "discount");

    let dc = discount_curve();
    let df = |t: f64| dc.discount_factor(None, t).unwrap();
    let expected = (2..=5).map(|k| df(k as f64)).sum::<f64>() / df(1.5);
    assert_relative_eq!(annuity.value(1.5, &model).unwrap(), expected, max_relative = 1e-14);

    let at_origin = (1..=5).map(|k| df(k as f64)).sum::<f64>();
    assert_relative_eq!(annuity.value_at_origin(&model).unwrap(), at_origin, max_relative = 1e-14);
}

#[test]
fn swap_at_the_par_rate_is_worth_nothing() {
    let model = market();
    let fix = regular(5.0, 1.0);
    let float = regular(5.0, 0.5);
    let rate: f64 = forward_swap_rate(fix.as_ref(), float.as_ref(), "forward", &model).unwrap();
    assert!(rate > 0.03 && rate < 0.036, "par rate {rate} outside the forward range");

    let swap = Swap::from_schedules(fix.clone(), None, rate, float.clone(), Some("forward".into()), 0.0, "discount");
    assert_abs_diff_eq!(swap.value_at_origin(&model).unwrap(), 0.0, epsilon = 1e-10);

    let off_market = Swap::from_schedules(fix, None, rate + 0.01, float, Some("forward".into()), 0.0, "discount");
    let annuity = SwapAnnuity::new(regular(5.0, 1.0), "discount").value_at_origin(&model).unwrap();
    assert_abs_diff_eq!(off_market.value_at_origin(&model).unwrap(), 0.01 * annuity, epsilon = 1e-10);
}

#[test]
fn swap_rate_without_a_discount_curve_compounds_the_forwards() {
    let model = AnalyticModel::new().add_curve("standalone", Arc::new(forward_curve("standalone", &[0.0], &[0.04], None)));
    let fix = regular(3.0, 1.0);
    let float = regular(3.0, 0.5);

    let rate: f64 = forward_swap_rate(fix.as_ref(), float.as_ref(), "standalone", &model).unwrap();
    let df = |k: i32| 1.02_f64.powi(-2 * k);
    let annuity = df(1) + df(2) + df(3);
    assert_relative_eq!(rate, (1.0 - df(3)) / annuity, max_relative = 1e-12);
    assert_eq!(model.len(), 1);

    let from_forward: f64 = swap_annuity_from_forward_curve(fix.as_ref(), "standalone", &model).unwrap();
    assert_relative_eq!(from_forward, annuity, max_relative = 1e-12);
}

#[test]
fn fra_scenario() {
    let model = flat_market(0.04);
    let schedule: Arc<dyn Schedule> =
        Arc::new(ScheduleFromPeriods::new(vec![SchedulePeriod::from_interval(1.0, 1.25)]).unwrap());
    let payer = ForwardRateAgreement::new(schedule.clone(), 0.03, "forward", "discount", true).unwrap();
    let receiver = ForwardRateAgreement::new(schedule, 0.03, "forward", "discount", false).unwrap();

    let df1 = discount_curve().discount_factor(None, 1.0).unwrap();
    let expected = (0.04 - 0.03) / (1.0 + 0.04 * 0.25) * df1 * 0.25;
    assert_abs_diff_eq!(payer.value_at_origin(&model).unwrap(), expected, epsilon = 1e-14);
    assert_abs_diff_eq!(receiver.value_at_origin(&model).unwrap(), -expected, epsilon = 1e-14);
    assert_abs_diff_eq!(payer.rate(&model).unwrap(), 0.04, epsilon = 1e-15);

    // Fixed: nothing left to settle.
    assert_eq!(payer.value(1.0, &model).unwrap(), 0.0);
}

#[test]
fn fra_needs_exactly_one_period() {
    let result = ForwardRateAgreement::new(regular(1.0, 0.5), 0.03, "forward", "discount", true);
    assert!(matches!(result, Err(Error::Precondition(_))));
}

#[test]
fn swap_rate_needs_a_fixed_period() {
    let model = market();
    let empty = ScheduleFromPeriods::new(vec![]).unwrap();
    let result: Result<f64, _> = forward_swap_rate(&empty, regular(2.0, 0.5).as_ref(), "forward", &model);
    assert!(matches!(result, Err(Error::Precondition(_))));
}

#[test]
fn missing_curves_fail_fast() {
    let model = market();
    let err = AnalyticProduct::<f64>::value_at_origin(&SwapAnnuity::new(regular(2.0, 1.0), "ois"), &model).unwrap_err();
    assert_eq!(
        err,
        Error::CurveNotFound {
            name: "ois".into(),
            capability: "discount curve"
        }
    );

    let model = model.add_curve("euribor", Arc::new(forward_curve("euribor", &[0.0], &[0.03], Some("ois"))));
    let err = forward_swap_rate(regular(2.0, 1.0).as_ref(), regular(2.0, 0.5).as_ref(), "euribor", &model).unwrap_err();
    assert_eq!(
        err,
        Error::CurveNotFound {
            name: "ois".into(),
            capability: "discount curve"
        }
    );

    let err = forward_swap_rate(regular(2.0, 1.0).as_ref(), regular(2.0, 0.5).as_ref(), "libor", &model).unwrap_err();
    assert!(matches!(err, Error::CurveNotFound { capability: "forward curve", .. }));
}

#[test]
fn swap_rate_is_computed_per_path() {
    let levels = [0.01, 0.03, 0.05];
    let forwards = PathVector::from_vec(levels.to_vec());
    let model = AnalyticModel::new().add_curve("fwd", Arc::new(forward_curve("fwd", &[0.0], &[forwards], None)));
    let fix = regular(4.0, 1.0);
    let float = regular(4.0, 0.5);

    let rates = forward_swap_rate(fix.as_ref(), float.as_ref(), "fwd", &model).unwrap();
    assert_eq!(rates.size(), levels.len());
    for (p, &level) in levels.iter().enumerate() {
        let scalar = AnalyticModel::new().add_curve("fwd", Arc::new(forward_curve("fwd", &[0.0], &[level], None)));
        let expected: f64 = forward_swap_rate(fix.as_ref(), float.as_ref(), "fwd", &scalar).unwrap();
        assert_relative_eq!(rates.path(p), expected, max_relative = 1e-12);
    }
}

proptest! {
    #[test]
    fn par_swaps_are_worth_nothing_for_any_flat_forward(forward in 0.0f64..0.1, years in 1usize..8) {
        let model = flat_market(forward);
        let fix = regular(years as f64, 1.0);
        let float = regular(years as f64, 0.5);
        let rate: f64 = forward_swap_rate(fix.as_ref(), float.as_ref(), "forward", &model).unwrap();
        let swap = Swap::from_schedules(float, Some("forward".into()), 0.0, fix, None, rate, "discount");
        let value: f64 = swap.value_at_origin(&model).unwrap();
        prop_assert!(value.abs() < 1e-10, "par swap worth {}", value);
    }
}
