//! A leg of fixed or floating coupons.

use crate::analytic_product::AnalyticProduct;
use sc_core::{errors::Result, RandomValue, Real, Spread, Time};
use sc_curves::AnalyticModel;
use sc_time::Schedule;
use std::sync::Arc;

/// A swap leg paying `spread + forward` on each period of a schedule.
///
/// Without a forward curve the leg is a fixed leg paying `spread`.  With
/// notional exchange, a unit notional is received at each period end and
/// paid at each period start.
#[derive(Debug, Clone)]
pub struct SwapLeg {
    schedule: Arc<dyn Schedule>,
    forward_curve_name: Option<String>,
    spread: Spread,
    discount_curve_name: String,
    notional_exchange: bool,
}

impl SwapLeg {
    /// Create a leg.
    pub fn new(
        schedule: Arc<dyn Schedule>,
        forward_curve_name: Option<String>,
        spread: Spread,
        discount_curve_name: impl Into<String>,
        notional_exchange: bool,
    ) -> Self {
        Self {
            schedule,
            forward_curve_name,
            spread,
            discount_curve_name: discount_curve_name.into(),
            notional_exchange,
        }
    }

    /// The accrual schedule.
    pub fn schedule(&self) -> &dyn Schedule {
        self.schedule.as_ref()
    }

    /// Name of the forward curve, if the leg floats.
    pub fn forward_curve_name(&self) -> Option<&str> {
        self.forward_curve_name.as_deref()
    }

    /// Fixed rate, or spread over the forward.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Name of the discount curve.
    pub fn discount_curve_name(&self) -> &str {
        &self.discount_curve_name
    }

    /// Whether notionals are exchanged.
    pub fn has_notional_exchange(&self) -> bool {
        self.notional_exchange
    }
}

impl<V: RandomValue> AnalyticProduct<V> for SwapLeg {
    fn value(&self, evaluation_time: Time, model: &AnalyticModel<V>) -> Result<V> {
        let discount_curve = model.require_discount_curve(&self.discount_curve_name)?;
        let forward_curve = self
            .forward_curve_name
            .as_deref()
            .map(|name| model.require_forward_curve(name))
            .transpose()?;
        let df = |t: Time| -> Result<V> {
            if t > evaluation_time {
                discount_curve.discount_factor(Some(model), t)
            } else {
                Ok(V::from_real(0.0))
            }
        };

        let mut value = V::from_real(0.0);
        for i in 0..self.schedule.number_of_periods() {
            let fixing = self.schedule.fixing(i);
            let payment = self.schedule.payment(i);
            let accrual: Real = self.schedule.period_length(i);

            if payment > evaluation_time {
                let mut rate = V::from_real(self.spread);
                if let Some(forward_curve) = forward_curve {
                    rate = rate + forward_curve.forward_for_period(Some(model), fixing, payment - fixing)?;
                }
                value = value + rate * df(payment)? * accrual;
            }
            if self.notional_exchange {
                value = value + df(self.schedule.period_end(i))? - df(self.schedule.period_start(i))?;
            }
        }
        Ok(value / discount_curve.discount_factor(Some(model), evaluation_time)?)
    }
}
