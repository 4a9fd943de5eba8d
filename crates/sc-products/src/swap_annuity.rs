//! Swap annuities: the value of receiving the accrual fraction on each
//! payment date.

use crate::analytic_product::AnalyticProduct;
use sc_core::{errors::Result, RandomValue, Time};
use sc_curves::{AnalyticModel, DiscountCurve, DiscountCurveFromForwardCurve};
use sc_time::Schedule;
use std::sync::Arc;

/// `Σ df(payment_i) · accrual_i / df(evaluation_time)` over the periods
/// paying after `evaluation_time`.
pub fn swap_annuity<V: RandomValue>(
    evaluation_time: Time,
    schedule: &dyn Schedule,
    discount_curve: &dyn DiscountCurve<V>,
    model: Option<&AnalyticModel<V>>,
) -> Result<V> {
    let mut value = V::from_real(0.0);
    for i in 0..schedule.number_of_periods() {
        let payment = schedule.payment(i);
        if payment > evaluation_time {
            value = value + discount_curve.discount_factor(model, payment)? * schedule.period_length(i);
        }
    }
    Ok(value / discount_curve.discount_factor(model, evaluation_time)?)
}

/// Annuity at time zero, discounting with the forward curve
/// `forward_curve_name` compounded into a discount curve.
pub fn swap_annuity_from_forward_curve<V: RandomValue>(
    schedule: &dyn Schedule,
    forward_curve_name: &str,
    model: &AnalyticModel<V>,
) -> Result<V> {
    model.require_forward_curve(forward_curve_name)?;
    let discount_curve = DiscountCurveFromForwardCurve::<V>::from_forward_curve_name(forward_curve_name);
    swap_annuity(0.0, schedule, &discount_curve, Some(model))
}

/// The annuity of a schedule as a product.
#[derive(Debug, Clone)]
pub struct SwapAnnuity {
    schedule: Arc<dyn Schedule>,
    discount_curve_name: String,
}

impl SwapAnnuity {
    /// Annuity of `schedule`, discounted on `discount_curve_name`.
    pub fn new(schedule: Arc<dyn Schedule>, discount_curve_name: impl Into<String>) -> Self {
        Self {
            schedule,
            discount_curve_name: discount_curve_name.into(),
        }
    }
}

impl<V: RandomValue> AnalyticProduct<V> for SwapAnnuity {
    fn value(&self, evaluation_time: Time, model: &AnalyticModel<V>) -> Result<V> {
        let discount_curve = model.require_discount_curve(&self.discount_curve_name)?;
        swap_annuity(evaluation_time, self.schedule.as_ref(), discount_curve, Some(model))
    }
}
