//! Curve traits and the curve point.
//!
//! Every curve implements [`Curve`]; discount and forward curves add the
//! [`DiscountCurve`] and [`ForwardCurve`] capabilities.  Capabilities are
//! discovered with [`Curve::as_discount_curve`] and
//! [`Curve::as_forward_curve`], so a registry of `Arc<dyn Curve<V>>` can
//! hand out typed views without downcasting.
//!
//! All queries take an optional [`AnalyticModel`]: curves refer to their
//! peers only by name and resolve them through the model passed at query
//! time.

use crate::analytic_model::AnalyticModel;
use chrono::NaiveDate;
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Time};
use std::sync::Arc;

/// Maturity used in place of zero when computing zero rates.
pub const ZERO_RATE_EPSILON: Time = 1e-14;

/// One stored point of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint<V> {
    /// Time offset from the reference date, in years.
    pub time: Time,
    /// Stored value (before the interpolation transform).
    pub value: V,
    /// Whether the point is exposed as a calibration parameter.
    pub is_calibratable: bool,
}

impl<V> CurvePoint<V> {
    /// A new point.
    pub fn new(time: Time, value: V, is_calibratable: bool) -> Self {
        Self {
            time,
            value,
            is_calibratable,
        }
    }
}

/// A named function of time with values in `V`.
pub trait Curve<V: RandomValue>: std::fmt::Debug + Send + Sync {
    /// Name under which the curve is registered in a model.
    fn name(&self) -> &str;

    /// Date corresponding to time zero, if known.
    fn reference_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Curve value at `time`.
    fn value_at(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V>;

    /// This curve viewed as a discount curve, if it is one.
    fn as_discount_curve(&self) -> Option<&dyn DiscountCurve<V>> {
        None
    }

    /// This curve viewed as a forward curve, if it is one.
    fn as_forward_curve(&self) -> Option<&dyn ForwardCurve<V>> {
        None
    }

    /// Values of the calibratable points, in time order.
    fn parameters(&self) -> Vec<V> {
        Vec::new()
    }

    /// A copy of this curve with the calibratable values replaced.
    ///
    /// # Errors
    /// `InvalidArgument` if `parameters` has the wrong length, `Unsupported`
    /// for curves without stored points.
    fn clone_for_parameters(&self, _parameters: &[V]) -> Result<Arc<dyn Curve<V>>> {
        Err(Error::Unsupported(format!(
            "curve '{}' cannot be cloned for new parameters",
            self.name()
        )))
    }
}

/// A curve of discount factors.
pub trait DiscountCurve<V: RandomValue>: Curve<V> {
    /// Discount factor for `maturity`.
    fn discount_factor(&self, model: Option<&AnalyticModel<V>>, maturity: Time) -> Result<V>;

    /// Continuously compounded zero rate `-ln(df) / maturity`.
    ///
    /// A zero maturity is replaced by [`ZERO_RATE_EPSILON`].
    fn zero_rate(&self, model: Option<&AnalyticModel<V>>, maturity: Time) -> Result<V> {
        let t = if maturity == 0.0 {
            ZERO_RATE_EPSILON
        } else {
            maturity
        };
        Ok(-self.discount_factor(model, t)?.ln() / t)
    }

    /// Zero rates for several maturities.
    fn zero_rates(&self, model: Option<&AnalyticModel<V>>, maturities: &[Time]) -> Result<Vec<V>> {
        maturities
            .iter()
            .map(|&t| self.zero_rate(model, t))
            .collect()
    }
}

/// A curve of forward rates over a payment period.
pub trait ForwardCurve<V: RandomValue>: Curve<V> {
    /// Forward rate fixing at `fixing_time`.
    fn forward(&self, model: Option<&AnalyticModel<V>>, fixing_time: Time) -> Result<V>;

    /// Forward rate fixing at `fixing_time` for a period of length
    /// `payment_offset`.  Curves with a fixed period ignore the offset.
    fn forward_for_period(
        &self,
        model: Option<&AnalyticModel<V>>,
        fixing_time: Time,
        _payment_offset: Time,
    ) -> Result<V> {
        self.forward(model, fixing_time)
    }

    /// Length of the forward period starting at `fixing_time`.
    fn payment_offset(&self, fixing_time: Time) -> Result<Time>;

    /// Name of the curve used to discount payments on this forward, if any.
    fn discount_curve_name(&self) -> Option<&str>;

    /// Payment offset at `fixing_time`.
    ///
    /// # Errors
    /// `InvalidPaymentOffset` unless the offset is strictly positive.
    fn checked_payment_offset(&self, fixing_time: Time) -> Result<Time> {
        let offset = self.payment_offset(fixing_time)?;
        if offset > 0.0 {
            Ok(offset)
        } else {
            Err(Error::InvalidPaymentOffset {
                curve: self.name().to_string(),
                fixing_time,
                offset,
            })
        }
    }
}

/// Check that the calibratable flags, if given, match the number of points.
pub(crate) fn calibratable_flags(
    curve: &str,
    times: &[Time],
    flags: Option<&[bool]>,
) -> Result<Vec<bool>> {
    match flags {
        Some(f) if f.len() != times.len() => Err(Error::InvalidArgument(format!(
            "curve '{curve}': {} calibratable flags for {} points",
            f.len(),
            times.len()
        ))),
        Some(f) => Ok(f.to_vec()),
        None => Ok(times.iter().map(|&t| t > 0.0).collect()),
    }
}

/// Fail unless two input slices have the same length.
pub(crate) fn check_lengths(curve: &str, what: &str, times: usize, values: usize) -> Result<()> {
    if times == values {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "curve '{curve}': {times} times but {values} {what}"
        )))
    }
}
