//! Two-leg swaps and the par swap rate.

use crate::analytic_product::AnalyticProduct;
use crate::swap_annuity::swap_annuity;
use crate::swap_leg::SwapLeg;
use sc_core::{errors::Result, RandomValue, Spread, Time};
use sc_curves::{AnalyticModel, Curve, DiscountCurveFromForwardCurve};
use sc_time::Schedule;
use std::sync::Arc;

/// A swap receiving one leg and paying the other.
#[derive(Debug, Clone)]
pub struct Swap {
    receiver_leg: SwapLeg,
    payer_leg: SwapLeg,
}

impl Swap {
    /// Swap of two legs.
    pub fn new(receiver_leg: SwapLeg, payer_leg: SwapLeg) -> Self {
        Self {
            receiver_leg,
            payer_leg,
        }
    }

    /// Swap of two legs discounted on the same curve, both exchanging
    /// notionals.  A `None` forward curve name makes the leg fixed at its
    /// spread.
    pub fn from_schedules(
        receiver_schedule: Arc<dyn Schedule>,
        receiver_forward_curve_name: Option<String>,
        receiver_spread: Spread,
        payer_schedule: Arc<dyn Schedule>,
        payer_forward_curve_name: Option<String>,
        payer_spread: Spread,
        discount_curve_name: &str,
    ) -> Self {
        Self::new(
            SwapLeg::new(
                receiver_schedule,
                receiver_forward_curve_name,
                receiver_spread,
                discount_curve_name,
                true,
            ),
            SwapLeg::new(
                payer_schedule,
                payer_forward_curve_name,
                payer_spread,
                discount_curve_name,
                true,
            ),
        )
    }

    /// The received leg.
    pub fn receiver_leg(&self) -> &SwapLeg {
        &self.receiver_leg
    }

    /// The paid leg.
    pub fn payer_leg(&self) -> &SwapLeg {
        &self.payer_leg
    }
}

impl<V: RandomValue> AnalyticProduct<V> for Swap {
    fn value(&self, evaluation_time: Time, model: &AnalyticModel<V>) -> Result<V> {
        let receive = self.receiver_leg.value(evaluation_time, model)?;
        let pay = self.payer_leg.value(evaluation_time, model)?;
        Ok(receive - pay)
    }
}

/// The fixed rate that gives a swap of `fix_schedule` against the floating
/// leg of `float_schedule` on `forward_curve_name` a value of zero.
///
/// Valuation is at the first fixing of the fixed schedule.  Payments are
/// discounted on the forward curve's discount curve; if the forward curve
/// names none, on the forward curve compounded into a discount curve.
///
/// # Errors
/// `Precondition` if the fixed schedule has no periods; `CurveNotFound` if
/// the forward curve, or the discount curve it names, is missing from
/// `model`.
pub fn forward_swap_rate<V: RandomValue>(
    fix_schedule: &dyn Schedule,
    float_schedule: &dyn Schedule,
    forward_curve_name: &str,
    model: &AnalyticModel<V>,
) -> Result<V> {
    sc_core::ensure!(
        fix_schedule.number_of_periods() > 0,
        "forward swap rate on '{forward_curve_name}' needs a fixed schedule with at least one period"
    );
    let evaluation_time = fix_schedule.fixing(0);
    let forward_curve = model.require_forward_curve(forward_curve_name)?;

    let (model, discount_curve_name) = match forward_curve.discount_curve_name() {
        Some(name) => (model.clone(), name.to_string()),
        None => {
            let derived = DiscountCurveFromForwardCurve::<V>::from_forward_curve_name(forward_curve_name);
            let name = derived.name().to_string();
            tracing::debug!(
                forward_curve = forward_curve_name,
                discount_curve = %name,
                "discounting swap rate on derived curve"
            );
            (model.add_curve(name.clone(), Arc::new(derived)), name)
        }
    };
    let forward_curve = model.require_forward_curve(forward_curve_name)?;
    let discount_curve = model.require_discount_curve(&discount_curve_name)?;

    let mut float_leg = V::from_real(0.0);
    for i in 0..float_schedule.number_of_periods() {
        let payment = float_schedule.payment(i);
        if payment > evaluation_time {
            let forward = forward_curve.forward(Some(&model), float_schedule.fixing(i))?;
            float_leg = float_leg
                + forward * discount_curve.discount_factor(Some(&model), payment)? * float_schedule.period_length(i);
        }
    }
    float_leg = float_leg / discount_curve.discount_factor(Some(&model), evaluation_time)?;

    let annuity = swap_annuity(evaluation_time, fix_schedule, discount_curve, Some(&model))?;
    Ok(float_leg / annuity)
}
