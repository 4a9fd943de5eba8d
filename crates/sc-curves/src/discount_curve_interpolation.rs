//! `DiscountCurveInterpolation` — a discount curve of stored discount
//! factors, with factories from discount factors, zero rates, and forward
//! rates over a tenor grid.

use crate::analytic_model::AnalyticModel;
use crate::config::CurveConfig;
use crate::curve::{calibratable_flags, check_lengths, Curve, DiscountCurve};
use crate::curve_interpolation::CurveInterpolation;
use chrono::NaiveDate;
use sc_core::errors::Result;
use sc_core::{RandomValue, Time};
use sc_time::TimeDiscretization;
use std::sync::Arc;

/// A discount curve with stored points.
#[derive(Debug, Clone)]
pub struct DiscountCurveInterpolation<V: RandomValue> {
    curve: CurveInterpolation<V>,
}

impl<V: RandomValue> DiscountCurveInterpolation<V> {
    /// An empty discount curve.
    pub fn new(name: impl Into<String>, reference_date: Option<NaiveDate>, config: CurveConfig) -> Self {
        Self {
            curve: CurveInterpolation::new(name, reference_date, config),
        }
    }

    /// Store a discount factor.
    pub fn add_discount_factor(&mut self, maturity: Time, discount_factor: V, is_calibratable: bool) -> Result<()> {
        self.curve.add_point(maturity, discount_factor, is_calibratable)
    }

    /// Curve of the given discount factors.
    ///
    /// Without explicit flags, points at positive times are calibratable.
    pub fn from_discount_factors(
        name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        times: &[Time],
        discount_factors: &[V],
        is_calibratable: Option<&[bool]>,
        config: CurveConfig,
    ) -> Result<Self> {
        let mut curve = Self::new(name, reference_date, config);
        check_lengths(curve.name(), "discount factors", times.len(), discount_factors.len())?;
        let flags = calibratable_flags(curve.name(), times, is_calibratable)?;
        for ((&t, df), calibratable) in times.iter().zip(discount_factors).zip(flags) {
            curve.add_discount_factor(t, df.clone(), calibratable)?;
        }
        tracing::debug!(
            curve = %curve.name(),
            points = times.len(),
            config = %config,
            "discount curve built from discount factors"
        );
        Ok(curve)
    }

    /// Curve of continuously compounded zero rates, `df = exp(-z t)`.
    pub fn from_zero_rates(
        name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        times: &[Time],
        zero_rates: &[V],
        is_calibratable: Option<&[bool]>,
        config: CurveConfig,
    ) -> Result<Self> {
        let name = name.into();
        check_lengths(&name, "zero rates", times.len(), zero_rates.len())?;
        let dfs: Vec<V> = times
            .iter()
            .zip(zero_rates)
            .map(|(&t, z)| (z.clone() * -t).exp())
            .collect();
        Self::from_discount_factors(name, reference_date, times, &dfs, is_calibratable, config)
    }

    /// Curve of annually compounded zero rates, `df = (1 + z)^(-t)`.
    pub fn from_annualized_zero_rates(
        name: impl Into<String>,
        reference_date: Option<NaiveDate>,
        times: &[Time],
        zero_rates: &[V],
        is_calibratable: Option<&[bool]>,
        config: CurveConfig,
    ) -> Result<Self> {
        let name = name.into();
        check_lengths(&name, "zero rates", times.len(), zero_rates.len())?;
        let dfs: Vec<V> = times
            .iter()
            .zip(zero_rates)
            .map(|(&t, z)| ((z.clone() + 1.0).ln() * -t).exp())
            .collect();
        Self::from_discount_factors(name, reference_date, times, &dfs, is_calibratable, config)
    }

    /// Curve of the discount factors implied by simple forward rates over
    /// the periods of `tenor`.
    ///
    /// The anchor `(0, 1)` is stored, then `df_{i+1} = df_i / (1 + f_i Δt_i)`
    /// at each `t_{i+1}`.  Interpolation uses the default configuration.
    pub fn from_forward_rates(
        name: impl Into<String>,
        tenor: &TimeDiscretization,
        forward_rates: &[V],
    ) -> Result<Self> {
        let mut curve = Self::new(name, None, CurveConfig::default());
        check_lengths(
            curve.name(),
            "forward rates",
            tenor.number_of_time_steps(),
            forward_rates.len(),
        )?;
        curve.add_discount_factor(0.0, V::from_real(1.0), false)?;
        let mut df = V::from_real(1.0);
        for (i, forward) in forward_rates.iter().enumerate() {
            df = df / (forward.clone() * tenor.time_step(i)? + 1.0);
            let t = tenor.time(i + 1)?;
            curve.add_discount_factor(t, df.clone(), t > 0.0)?;
        }
        tracing::debug!(
            curve = %curve.name(),
            points = curve.curve.number_of_points(),
            "discount curve built from forward rates"
        );
        Ok(curve)
    }

    /// The underlying curve of stored points.
    pub fn curve(&self) -> &CurveInterpolation<V> {
        &self.curve
    }
}

impl<V: RandomValue> Curve<V> for DiscountCurveInterpolation<V> {
    fn name(&self) -> &str {
        self.curve.name()
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.curve.reference_date()
    }

    fn value_at(&self, _model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.curve.value(time)
    }

    fn as_discount_curve(&self) -> Option<&dyn DiscountCurve<V>> {
        Some(self)
    }

    fn parameters(&self) -> Vec<V> {
        self.curve.parameters()
    }

    fn clone_for_parameters(&self, parameters: &[V]) -> Result<Arc<dyn Curve<V>>> {
        Ok(Arc::new(Self {
            curve: self.curve.with_parameters(parameters)?,
        }))
    }
}

impl<V: RandomValue> DiscountCurve<V> for DiscountCurveInterpolation<V> {
    fn discount_factor(&self, _model: Option<&AnalyticModel<V>>, maturity: Time) -> Result<V> {
        self.curve.value(maturity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExtrapolationMethod, InterpolationEntity, InterpolationMethod};
    use crate::curve::ZERO_RATE_EPSILON;
    use approx::assert_abs_diff_eq;
    use sc_core::Error;

    #[test]
    fn zero_rates_round_trip() {
        let times = [0.5, 1.0, 3.0];
        let zeros = [0.01, 0.015, 0.02];
        let c = DiscountCurveInterpolation::from_zero_rates("z", None, &times, &zeros, None, CurveConfig::default())
            .unwrap();
        for (&t, &z) in times.iter().zip(&zeros) {
            assert_abs_diff_eq!(c.zero_rate(None, t).unwrap(), z, epsilon = 1e-14);
        }
        let rates = c.zero_rates(None, &[0.5, 2.0]).unwrap();
        assert_abs_diff_eq!(rates[1], 0.0175, epsilon = 1e-14);
    }

    #[test]
    fn annualized_zero_rates() {
        let c = DiscountCurveInterpolation::from_annualized_zero_rates(
            "z",
            None,
            &[2.0],
            &[0.05],
            None,
            CurveConfig::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(c.discount_factor(None, 2.0).unwrap(), 1.0 / 1.05_f64.powi(2), epsilon = 1e-15);
    }

    #[test]
    fn zero_rate_at_time_zero_uses_the_limit() {
        let c = DiscountCurveInterpolation::from_zero_rates(
            "z",
            None,
            &[1.0, 2.0],
            &[0.03, 0.03],
            None,
            CurveConfig::default(),
        )
        .unwrap();
        let at_zero = c.zero_rate(None, 0.0).unwrap();
        assert!(at_zero.is_finite());
        assert_eq!(at_zero, c.zero_rate(None, ZERO_RATE_EPSILON).unwrap());
    }

    #[test]
    fn forward_rates_compound_into_discount_factors() {
        let tenor = TimeDiscretization::new(vec![0.0, 0.5, 1.5]).unwrap();
        let c = DiscountCurveInterpolation::from_forward_rates("f", &tenor, &[0.02, 0.04]).unwrap();
        let df1 = 1.0 / (1.0 + 0.02 * 0.5);
        assert_abs_diff_eq!(c.discount_factor(None, 0.0).unwrap(), 1.0);
        assert_abs_diff_eq!(c.discount_factor(None, 0.5).unwrap(), df1, epsilon = 1e-15);
        assert_abs_diff_eq!(c.discount_factor(None, 1.5).unwrap(), df1 / 1.04, epsilon = 1e-15);
        assert_eq!(c.parameters().len(), 2);
        assert!(DiscountCurveInterpolation::<f64>::from_forward_rates("f", &tenor, &[0.02]).is_err());
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let config = CurveConfig::new(
            InterpolationMethod::Linear,
            ExtrapolationMethod::Constant,
            InterpolationEntity::LogOfValue,
        );
        assert!(matches!(
            DiscountCurveInterpolation::from_discount_factors("d", None, &[1.0, 2.0], &[0.9], None, config),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            DiscountCurveInterpolation::from_discount_factors("d", None, &[1.0], &[0.9], Some(&[true, false]), config),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn clone_for_parameters_moves_only_calibratable_points() {
        let c = DiscountCurveInterpolation::from_discount_factors(
            "d",
            None,
            &[0.0, 1.0, 2.0],
            &[1.0, 0.97, 0.94],
            None,
            CurveConfig::default(),
        )
        .unwrap();
        assert_eq!(c.parameters(), vec![0.97, 0.94]);
        let moved = c.clone_for_parameters(&[0.96, 0.92]).unwrap();
        assert_eq!(moved.name(), "d");
        let dc = moved.as_discount_curve().unwrap();
        assert_abs_diff_eq!(dc.discount_factor(None, 2.0).unwrap(), 0.92, epsilon = 1e-15);
        assert_abs_diff_eq!(dc.discount_factor(None, 0.0).unwrap(), 1.0);
    }
}
