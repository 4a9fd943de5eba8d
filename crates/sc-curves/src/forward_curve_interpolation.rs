//! `ForwardCurveInterpolation` — a forward curve backed by stored points.
//!
//! The forward interpolation entity decides what is stored for a forward
//! `f` fixing at `t1` and paying at `t2 = t1 + offset`:
//!
//! | entity                       | key  | stored value                    |
//! |------------------------------|------|---------------------------------|
//! | FORWARD                      | `t1` | `f`                             |
//! | FORWARD_TIMES_DISCOUNTFACTOR | `t1` | `f · df(t2)`                    |
//! | ZERO                         | `t2` | `ln(1 + f · offset) / offset`   |
//! | DISCOUNTFACTOR               | `t2` | `v(t1) / (1 + f · offset)`      |
//!
//! and [`ForwardCurve::forward`] applies the inverse map on read.  Only
//! FORWARD_TIMES_DISCOUNTFACTOR consults another curve (the discount curve,
//! looked up by name in the model); the other entities read the curve's own
//! points and work without a model.

use crate::analytic_model::AnalyticModel;
use crate::config::{ForwardCurveConfig, InterpolationEntityForward};
use crate::curve::{check_lengths, Curve, ForwardCurve};
use crate::curve_interpolation::CurveInterpolation;
use crate::payment_offset::PaymentOffset;
use chrono::NaiveDate;
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Time};
use std::sync::Arc;

/// A forward curve with stored points.
#[derive(Debug, Clone)]
pub struct ForwardCurveInterpolation<V: RandomValue> {
    curve: CurveInterpolation<V>,
    forward_entity: InterpolationEntityForward,
    payment_offset: PaymentOffset,
    discount_curve_name: Option<String>,
}

impl<V: RandomValue> ForwardCurveInterpolation<V> {
    /// An empty forward curve.  With the DISCOUNTFACTOR entity the point
    /// `(0, 1)` is seeded.
    pub fn new(
        name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        payment_offset: impl Into<PaymentOffset>,
        config: ForwardCurveConfig,
        discount_curve_name: Option<String>,
    ) -> Result<Self> {
        let mut curve = CurveInterpolation::new(name, reference_date, config.curve);
        if config.forward_entity == InterpolationEntityForward::Discountfactor {
            curve.add_point(0.0, V::from_real(1.0), false)?;
        }
        Ok(Self {
            curve,
            forward_entity: config.forward_entity,
            payment_offset: payment_offset.into(),
            discount_curve_name,
        })
    }

    /// Build a forward curve from forwards at the given fixing times.
    /// Points at positive times are calibratable.
    #[allow(clippy::too_many_arguments)]
    pub fn from_forwards(
        name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        payment_offset: impl Into<PaymentOffset>,
        config: ForwardCurveConfig,
        discount_curve_name: Option<String>,
        model: Option<&AnalyticModel<V>>,
        times: &[Time],
        forwards: &[V],
    ) -> Result<Self> {
        let mut curve = Self::new(name, reference_date, payment_offset, config, discount_curve_name)?;
        check_lengths(curve.name(), "forwards", times.len(), forwards.len())?;
        for (&t, f) in times.iter().zip(forwards) {
            curve.add_forward(model, t, f.clone(), t > 0.0)?;
        }
        tracing::debug!(
            curve = %curve.name(),
            points = curve.curve.number_of_points(),
            entity = %curve.forward_entity,
            "forward curve built from forwards"
        );
        Ok(curve)
    }

    /// Build a FORWARD curve from discount factors.
    ///
    /// The forward at `t_i` is `(df_i / df_{i+1} - 1) / (t_{i+1} - t_i)`;
    /// if the first time is positive, a forward `(1 / df_0 - 1) / t_0` is
    /// added at time zero.  The curve is linear in value with constant
    /// extrapolation.
    pub fn from_discount_factors(
        name: impl Into<String>,
        times: &[Time],
        discount_factors: &[V],
        payment_offset: Time,
    ) -> Result<Self> {
        let mut curve = Self::new(
            name,
            None,
            payment_offset,
            ForwardCurveConfig::default(),
            None,
        )?;
        check_lengths(curve.name(), "discount factors", times.len(), discount_factors.len())?;
        if times.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "forward curve '{}' needs at least one discount factor",
                curve.name()
            )));
        }

        if times[0] > 0.0 {
            let forward = (V::from_real(1.0) / discount_factors[0].clone() - 1.0) / times[0];
            curve.add_forward(None, 0.0, forward, false)?;
        }
        for i in 0..times.len() - 1 {
            let dt = times[i + 1] - times[i];
            let forward =
                (discount_factors[i].clone() / discount_factors[i + 1].clone() - 1.0) / dt;
            curve.add_forward(None, times[i], forward, times[i] > 0.0)?;
        }
        tracing::debug!(
            curve = %curve.name(),
            points = curve.curve.number_of_points(),
            "forward curve built from discount factors"
        );
        Ok(curve)
    }

    /// Store a forward fixing at `fixing_time`.
    ///
    /// # Errors
    /// `InvalidPaymentOffset` for a non-positive offset; with the
    /// FORWARD_TIMES_DISCOUNTFACTOR entity, the errors of the discount curve
    /// lookup.
    pub fn add_forward(
        &mut self,
        model: Option<&AnalyticModel<V>>,
        fixing_time: Time,
        forward: V,
        is_calibratable: bool,
    ) -> Result<()> {
        let offset = self.checked_payment_offset(fixing_time)?;
        let payment_time = fixing_time + offset;
        match self.forward_entity {
            InterpolationEntityForward::Forward => {
                self.curve.add_point(fixing_time, forward, is_calibratable)
            }
            InterpolationEntityForward::ForwardTimesDiscountfactor => {
                let df = self.discount_factor(model, payment_time)?;
                self.curve.add_point(fixing_time, forward * df, is_calibratable)
            }
            InterpolationEntityForward::Zero => {
                let zero = (forward * offset + 1.0).ln() / offset;
                self.curve.add_point(payment_time, zero, is_calibratable)
            }
            InterpolationEntityForward::Discountfactor => {
                let df = self.curve.value(fixing_time)? / (forward * offset + 1.0);
                self.curve.add_point(payment_time, df, is_calibratable)
            }
        }
    }

    /// The interpolation entity for forwards.
    pub fn forward_entity(&self) -> InterpolationEntityForward {
        self.forward_entity
    }

    /// The payment-offset rule.
    pub fn payment_offset_rule(&self) -> &PaymentOffset {
        &self.payment_offset
    }

    /// The underlying curve of stored points.
    pub fn curve(&self) -> &CurveInterpolation<V> {
        &self.curve
    }

    fn discount_factor(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        let name = self
            .discount_curve_name
            .as_deref()
            .ok_or_else(|| Error::InvalidCurveState {
                curve: self.curve.name().to_string(),
                reason: format!("{} requires a discount curve name", self.forward_entity),
            })?;
        let model = model.ok_or_else(|| Error::MissingModel {
            curve: self.curve.name().to_string(),
            reason: format!("discount curve '{name}' is looked up in the model"),
        })?;
        model
            .require_discount_curve(name)?
            .discount_factor(Some(model), time)
    }
}

impl<V: RandomValue> Curve<V> for ForwardCurveInterpolation<V> {
    fn name(&self) -> &str {
        self.curve.name()
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.curve.reference_date()
    }

    fn value_at(&self, _model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.curve.value(time)
    }

    fn as_forward_curve(&self) -> Option<&dyn ForwardCurve<V>> {
        Some(self)
    }

    fn parameters(&self) -> Vec<V> {
        self.curve.parameters()
    }

    fn clone_for_parameters(&self, parameters: &[V]) -> Result<Arc<dyn Curve<V>>> {
        Ok(Arc::new(Self {
            curve: self.curve.with_parameters(parameters)?,
            forward_entity: self.forward_entity,
            payment_offset: self.payment_offset.clone(),
            discount_curve_name: self.discount_curve_name.clone(),
        }))
    }
}

impl<V: RandomValue> ForwardCurve<V> for ForwardCurveInterpolation<V> {
    fn forward(&self, model: Option<&AnalyticModel<V>>, fixing_time: Time) -> Result<V> {
        match self.forward_entity {
            InterpolationEntityForward::Forward => self.curve.value(fixing_time),
            InterpolationEntityForward::ForwardTimesDiscountfactor => {
                let offset = self.checked_payment_offset(fixing_time)?;
                Ok(self.curve.value(fixing_time)?
                    / self.discount_factor(model, fixing_time + offset)?)
            }
            InterpolationEntityForward::Zero => {
                let offset = self.checked_payment_offset(fixing_time)?;
                let t2 = fixing_time + offset;
                let exponent = self.curve.value(t2)? * t2 - self.curve.value(fixing_time)? * fixing_time;
                Ok((exponent.exp() - 1.0) / offset)
            }
            InterpolationEntityForward::Discountfactor => {
                let offset = self.checked_payment_offset(fixing_time)?;
                let ratio = self.curve.value(fixing_time)? / self.curve.value(fixing_time + offset)?;
                Ok((ratio - 1.0) / offset)
            }
        }
    }

    fn payment_offset(&self, fixing_time: Time) -> Result<Time> {
        self.payment_offset.offset(fixing_time)
    }

    fn discount_curve_name(&self) -> Option<&str> {
        self.discount_curve_name.as_deref()
    }
}
