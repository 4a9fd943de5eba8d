//! Forward rate agreements.

use crate::analytic_product::AnalyticProduct;
use sc_core::{errors::Result, RandomValue, Spread, Time};
use sc_curves::AnalyticModel;
use sc_time::Schedule;
use std::sync::Arc;

/// A forward rate agreement on the single period of a schedule.
///
/// The settlement `(forward - spread) · accrual / (1 + forward · accrual)`
/// is paid at the fixing time.  The value is not normalized by the
/// discount factor at the evaluation time.
#[derive(Debug, Clone)]
pub struct ForwardRateAgreement {
    schedule: Arc<dyn Schedule>,
    spread: Spread,
    forward_curve_name: String,
    discount_curve_name: String,
    is_payer: bool,
}

impl ForwardRateAgreement {
    /// Create an FRA.  A payer receives the forward and pays the spread.
    ///
    /// # Errors
    /// `Precondition` unless `schedule` has exactly one period.
    pub fn new(
        schedule: Arc<dyn Schedule>,
        spread: Spread,
        forward_curve_name: impl Into<String>,
        discount_curve_name: impl Into<String>,
        is_payer: bool,
    ) -> Result<Self> {
        sc_core::ensure!(
            schedule.number_of_periods() == 1,
            "a forward rate agreement needs a schedule with exactly one period, got {}",
            schedule.number_of_periods()
        );
        Ok(Self {
            schedule,
            spread,
            forward_curve_name: forward_curve_name.into(),
            discount_curve_name: discount_curve_name.into(),
            is_payer,
        })
    }

    /// The agreed rate.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// `true` for a payer FRA.
    pub fn is_payer(&self) -> bool {
        self.is_payer
    }

    /// The forward at the fixing time of the period.
    pub fn rate<V: RandomValue>(&self, model: &AnalyticModel<V>) -> Result<V> {
        model
            .require_forward_curve(&self.forward_curve_name)?
            .forward(Some(model), self.schedule.fixing(0))
    }
}

impl<V: RandomValue> AnalyticProduct<V> for ForwardRateAgreement {
    fn value(&self, evaluation_time: Time, model: &AnalyticModel<V>) -> Result<V> {
        let forward_curve = model.require_forward_curve(&self.forward_curve_name)?;
        let discount_curve = model.require_discount_curve(&self.discount_curve_name)?;

        let fixing = self.schedule.fixing(0);
        let payment = self.schedule.payment(0);
        let accrual = self.schedule.period_length(0);

        let forward = forward_curve.forward_for_period(Some(model), fixing, payment - fixing)?;
        let discount_factor = if fixing > evaluation_time {
            discount_curve.discount_factor(Some(model), fixing)?
        } else {
            V::from_real(0.0)
        };
        let sign = if self.is_payer { 1.0 } else { -1.0 };
        let settlement = (forward.clone() - self.spread) / (forward * accrual + 1.0);
        Ok(settlement * discount_factor * (accrual * sign))
    }
}
