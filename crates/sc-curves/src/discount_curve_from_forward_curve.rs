//! Discount curves derived from forward curves by compounding.
//!
//! ```text
//! df := 1, t := 0
//! while t < maturity:
//!     p  := payment_offset(t)                  (must be > 0)
//!     df := df / (1 + forward(t) · min(p, maturity - t) · scaling)
//!     t  := t + p
//! ```
//!
//! The derived curve stores no points; every query recomputes.  Its forward
//! curve is either owned or looked up by name in the model at query time.

use crate::analytic_model::AnalyticModel;
use crate::curve::{Curve, DiscountCurve, ForwardCurve};
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Real, Time};
use std::sync::Arc;

/// Discount factor for `maturity` implied by compounding the forwards of
/// `forward_curve` period by period.  The last period is cut at `maturity`.
///
/// # Errors
/// `InvalidArgument` if `maturity` is not finite; the errors of the forward
/// curve.
pub fn discount_factor_from_forward_curve<V: RandomValue>(
    forward_curve: &dyn ForwardCurve<V>,
    model: Option<&AnalyticModel<V>>,
    maturity: Time,
    time_scaling: Real,
) -> Result<V> {
    if !maturity.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "discount factor from forward curve '{}': maturity {maturity} is not finite",
            forward_curve.name()
        )));
    }
    let mut df = V::from_real(1.0);
    let mut time = 0.0;
    while time < maturity {
        let offset = forward_curve.checked_payment_offset(time)?;
        let step = offset.min(maturity - time) * time_scaling;
        let forward = forward_curve.forward(model, time)?;
        tracing::trace!(
            curve = forward_curve.name(),
            time,
            step,
            forward = forward.mean(),
            "compounding step"
        );
        df = df / (forward * step + 1.0);
        time += offset;
    }
    Ok(df)
}

/// Where a derived discount curve gets its forwards from.
#[derive(Debug, Clone)]
pub enum ForwardCurveSource<V: RandomValue> {
    /// A forward curve owned by the discount curve.
    Owned(Arc<dyn ForwardCurve<V>>),
    /// A forward curve registered in the model under this name.
    Named(String),
}

impl<V: RandomValue> ForwardCurveSource<V> {
    fn forward_curve_name(&self) -> &str {
        match self {
            ForwardCurveSource::Owned(curve) => curve.name(),
            ForwardCurveSource::Named(name) => name,
        }
    }
}

/// A discount curve implied by a forward curve.
#[derive(Debug, Clone)]
pub struct DiscountCurveFromForwardCurve<V: RandomValue> {
    name: String,
    source: ForwardCurveSource<V>,
    time_scaling: Real,
}

impl<V: RandomValue> DiscountCurveFromForwardCurve<V> {
    /// Discount curve compounding the forwards of `forward_curve`.
    pub fn from_forward_curve(forward_curve: Arc<dyn ForwardCurve<V>>) -> Self {
        Self::from_source(ForwardCurveSource::Owned(forward_curve))
    }

    /// Discount curve compounding the forwards of the forward curve
    /// registered as `forward_curve_name`.
    pub fn from_forward_curve_name(forward_curve_name: impl Into<String>) -> Self {
        Self::from_source(ForwardCurveSource::Named(forward_curve_name.into()))
    }

    fn from_source(source: ForwardCurveSource<V>) -> Self {
        Self {
            name: Self::name_for(source.forward_curve_name()),
            source,
            time_scaling: 1.0,
        }
    }

    /// Name given to the discount curve derived from `forward_curve_name`.
    pub fn name_for(forward_curve_name: &str) -> String {
        format!("DiscountCurveFromForwardCurve({forward_curve_name})")
    }

    /// Scale every compounding period by `time_scaling` (a day-count
    /// correction).
    pub fn with_time_scaling(mut self, time_scaling: Real) -> Self {
        self.time_scaling = time_scaling;
        self
    }

    /// Register the curve under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The forward curve source.
    pub fn source(&self) -> &ForwardCurveSource<V> {
        &self.source
    }
}

impl<V: RandomValue> Curve<V> for DiscountCurveFromForwardCurve<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.discount_factor(model, time)
    }

    fn as_discount_curve(&self) -> Option<&dyn DiscountCurve<V>> {
        Some(self)
    }
}

impl<V: RandomValue> DiscountCurve<V> for DiscountCurveFromForwardCurve<V> {
    fn discount_factor(&self, model: Option<&AnalyticModel<V>>, maturity: Time) -> Result<V> {
        match &self.source {
            ForwardCurveSource::Owned(curve) => {
                discount_factor_from_forward_curve(curve.as_ref(), model, maturity, self.time_scaling)
            }
            ForwardCurveSource::Named(name) => {
                let curve = model
                    .and_then(|m| m.get_forward_curve(name))
                    .ok_or_else(|| Error::CurveNotFound {
                        name: name.clone(),
                        capability: "forward curve",
                    })?;
                discount_factor_from_forward_curve(curve, model, maturity, self.time_scaling)
            }
        }
    }
}
