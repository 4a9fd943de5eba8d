//! `ForwardCurveFromDiscountCurve` — simple forwards implied by a discount
//! curve registered in the model.

use crate::analytic_model::AnalyticModel;
use crate::curve::{Curve, ForwardCurve};
use chrono::NaiveDate;
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Real, Time};

/// Forward curve `f(t) = (df(t) / df(t + p) - 1) / (p · scaling)`.
#[derive(Debug, Clone)]
pub struct ForwardCurveFromDiscountCurve {
    name: String,
    reference_date: Option<NaiveDate>,
    discount_curve_name: String,
    payment_offset: Time,
    day_count_scaling: Real,
}

impl ForwardCurveFromDiscountCurve {
    /// Forwards over periods of `payment_offset` implied by the discount
    /// curve `discount_curve_name`.
    ///
    /// # Errors
    /// `InvalidArgument` unless `payment_offset` is strictly positive.
    pub fn new(
        discount_curve_name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        payment_offset: Time,
    ) -> Result<Self> {
        let discount_curve_name = discount_curve_name.into();
        if !(payment_offset > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "forward curve on '{discount_curve_name}' needs a positive payment offset, got {payment_offset}"
            )));
        }
        Ok(Self {
            name: format!("ForwardCurveFromDiscountCurve({discount_curve_name},{payment_offset})"),
            reference_date,
            discount_curve_name,
            payment_offset,
            day_count_scaling: 1.0,
        })
    }

    /// Register the curve under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Scale the accrual period in the denominator.
    pub fn with_day_count_scaling(mut self, day_count_scaling: Real) -> Self {
        self.day_count_scaling = day_count_scaling;
        self
    }
}

impl<V: RandomValue> Curve<V> for ForwardCurveFromDiscountCurve {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    fn value_at(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.forward(model, time)
    }

    fn as_forward_curve(&self) -> Option<&dyn ForwardCurve<V>> {
        Some(self)
    }
}

impl<V: RandomValue> ForwardCurve<V> for ForwardCurveFromDiscountCurve {
    fn forward(&self, model: Option<&AnalyticModel<V>>, fixing_time: Time) -> Result<V> {
        let model = model.ok_or_else(|| Error::MissingModel {
            curve: self.name.clone(),
            reason: format!("discount curve '{}' is looked up in the model", self.discount_curve_name),
        })?;
        let dc = model.require_discount_curve(&self.discount_curve_name)?;
        let ratio = dc.discount_factor(Some(model), fixing_time)?
            / dc.discount_factor(Some(model), fixing_time + self.payment_offset)?;
        Ok((ratio - 1.0) / (self.payment_offset * self.day_count_scaling))
    }

    fn payment_offset(&self, _fixing_time: Time) -> Result<Time> {
        Ok(self.payment_offset)
    }

    fn discount_curve_name(&self) -> Option<&str> {
        Some(&self.discount_curve_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CurveConfig, ExtrapolationMethod, InterpolationEntity, InterpolationMethod};
    use crate::discount_curve_interpolation::DiscountCurveInterpolation;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn model() -> AnalyticModel<f64> {
        let dc = DiscountCurveInterpolation::from_discount_factors(
            "discount",
            None,
            &[0.0, 1.0, 2.0, 4.0, 5.0],
            &[1.0, 0.95, 0.90, 0.85, 0.80],
            None,
            CurveConfig::new(
                InterpolationMethod::Linear,
                ExtrapolationMethod::Constant,
                InterpolationEntity::LogOfValue,
            ),
        )
        .unwrap();
        AnalyticModel::new().add_curve("discount", Arc::new(dc))
    }

    #[test]
    fn forward_is_the_simple_rate_between_discount_factors() {
        let model = model();
        let fc = ForwardCurveFromDiscountCurve::new("discount", None, 0.5).unwrap();
        let df = |t: f64| {
            model
                .get_discount_curve("discount")
                .unwrap()
                .discount_factor(Some(&model), t)
                .unwrap()
        };
        let expected = (df(1.0) / df(1.5) - 1.0) / 0.5;
        assert_abs_diff_eq!(fc.forward(Some(&model), 1.0).unwrap(), expected, epsilon = 1e-10);
        assert_eq!(ForwardCurve::<f64>::discount_curve_name(&fc), Some("discount"));
    }

    #[test]
    fn needs_a_model() {
        let fc = ForwardCurveFromDiscountCurve::new("discount", None, 0.5).unwrap();
        assert!(matches!(
            ForwardCurve::<f64>::forward(&fc, None, 1.0),
            Err(Error::MissingModel { .. })
        ));
        assert!(ForwardCurveFromDiscountCurve::new("discount", None, 0.0).is_err());
    }
}
