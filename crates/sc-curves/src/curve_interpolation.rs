//! `CurveInterpolation` — the interpolation/extrapolation engine shared by
//! all curves with stored points.
//!
//! Stored values are mapped through the interpolation entity `φ`
//! (identity, `ln v`, or `ln v / t`), interpolated or extrapolated in that
//! space, and mapped back with `φ⁻¹` at the query time.
//!
//! Linear and piecewise-constant schemes work directly on random values.  The
//! spline family works path by path: one scalar spline per path is built from
//! the knots on first use and cached until the next [`add_point`].
//!
//! [`add_point`]: CurveInterpolation::add_point

use crate::analytic_model::AnalyticModel;
use crate::config::{CurveConfig, ExtrapolationMethod, InterpolationEntity, InterpolationMethod};
use crate::curve::{Curve, CurvePoint};
use chrono::NaiveDate;
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Real, Time};
use sc_math::{AkimaSpline, CubicSpline, HarmonicSpline, Interpolation1D};
use std::sync::{Arc, OnceLock};

type PathSplines = Vec<Box<dyn Interpolation1D>>;

/// A named curve of stored points with configurable interpolation.
#[derive(Debug)]
pub struct CurveInterpolation<V: RandomValue> {
    name: String,
    reference_date: Option<NaiveDate>,
    config: CurveConfig,
    points: Vec<CurvePoint<V>>,
    splines: OnceLock<Result<PathSplines>>,
}

impl<V: RandomValue> Clone for CurveInterpolation<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            reference_date: self.reference_date,
            config: self.config,
            points: self.points.clone(),
            splines: OnceLock::new(),
        }
    }
}

impl<V: RandomValue> CurveInterpolation<V> {
    /// An empty curve.
    pub fn new(name: impl Into<String>, reference_date: Option<NaiveDate>, config: CurveConfig) -> Self {
        Self {
            name: name.into(),
            reference_date,
            config,
            points: Vec::new(),
            splines: OnceLock::new(),
        }
    }

    /// Curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference date, if any.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// Interpolation configuration.
    pub fn config(&self) -> CurveConfig {
        self.config
    }

    /// Stored points, sorted by time.
    pub fn points(&self) -> &[CurvePoint<V>] {
        &self.points
    }

    /// Times of the stored points.
    pub fn times(&self) -> Vec<Time> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Number of stored points.
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Insert a point, replacing any point stored at the same time.
    ///
    /// # Errors
    /// `InvalidArgument` if `time` is not finite, or if the curve
    /// interpolates `ln(v)/t` and a point at time zero is not `1`.
    pub fn add_point(&mut self, time: Time, value: V, is_calibratable: bool) -> Result<()> {
        if !time.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "curve '{}': point time {time} is not finite",
                self.name
            )));
        }
        if time == 0.0
            && self.config.interpolation_entity == InterpolationEntity::LogOfValuePerTime
            && !(0..value.size()).all(|p| (value.path(p) - 1.0).abs() < 1e-12)
        {
            return Err(Error::InvalidArgument(format!(
                "curve '{}' interpolates ln(value)/time: the point at time 0 must be 1, got {value:?}",
                self.name
            )));
        }

        let point = CurvePoint::new(time, value, is_calibratable);
        match self.points.binary_search_by(|p| p.time.total_cmp(&time)) {
            Ok(i) => self.points[i] = point,
            Err(i) => self.points.insert(i, point),
        }
        self.splines.take();
        Ok(())
    }

    /// Values of the calibratable points, in time order.
    pub fn parameters(&self) -> Vec<V> {
        self.points
            .iter()
            .filter(|p| p.is_calibratable)
            .map(|p| p.value.clone())
            .collect()
    }

    /// A copy of this curve with the calibratable values replaced, in time
    /// order.
    pub fn with_parameters(&self, parameters: &[V]) -> Result<Self> {
        let expected = self.points.iter().filter(|p| p.is_calibratable).count();
        if parameters.len() != expected {
            return Err(Error::InvalidArgument(format!(
                "curve '{}' has {expected} calibratable points, got {} parameters",
                self.name,
                parameters.len()
            )));
        }
        let mut curve = self.clone();
        let mut values = parameters.iter();
        for point in curve.points.iter_mut().filter(|p| p.is_calibratable) {
            if let Some(v) = values.next() {
                point.value = v.clone();
            }
        }
        Ok(curve)
    }

    /// Interpolated value at `time`.
    ///
    /// # Errors
    /// `InvalidArgument` if `time` is not finite; `InvalidCurveState` if the
    /// curve has no points.
    pub fn value(&self, time: Time) -> Result<V> {
        if !time.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "curve '{}': query time {time} is not finite",
                self.name
            )));
        }
        match self.points.len() {
            0 => {
                return Err(Error::InvalidCurveState {
                    curve: self.name.clone(),
                    reason: "the curve has no points".into(),
                })
            }
            1 => return Ok(self.points[0].value.clone()),
            _ => {}
        }
        let per_time = self.config.interpolation_entity == InterpolationEntity::LogOfValuePerTime;
        if per_time && time == 0.0 {
            return Ok(V::from_real(1.0));
        }

        let knots: Vec<&CurvePoint<V>> = self
            .points
            .iter()
            .filter(|p| !(per_time && p.time == 0.0))
            .collect();
        let n = knots.len();
        if n == 1 {
            return Ok(self.inverse_transform(self.transform(knots[0]), time));
        }

        let x = if time < knots[0].time {
            self.extrapolate(knots[0], knots[1], time)
        } else if time > knots[n - 1].time {
            self.extrapolate(knots[n - 1], knots[n - 2], time)
        } else {
            self.interpolate(&knots, time)?
        };
        Ok(self.inverse_transform(x, time))
    }

    fn transform(&self, point: &CurvePoint<V>) -> V {
        match self.config.interpolation_entity {
            InterpolationEntity::Value => point.value.clone(),
            InterpolationEntity::LogOfValue => point.value.ln(),
            InterpolationEntity::LogOfValuePerTime => point.value.ln() / point.time,
        }
    }

    fn inverse_transform(&self, x: V, time: Time) -> V {
        match self.config.interpolation_entity {
            InterpolationEntity::Value => x,
            InterpolationEntity::LogOfValue => x.exp(),
            InterpolationEntity::LogOfValuePerTime => (x * time).exp(),
        }
    }

    /// Extrapolate beyond `boundary`, using `inner` (its neighbour) for the
    /// slope of the boundary segment.
    fn extrapolate(&self, boundary: &CurvePoint<V>, inner: &CurvePoint<V>, time: Time) -> V {
        let at_boundary = self.transform(boundary);
        match self.config.extrapolation_method {
            ExtrapolationMethod::Constant => at_boundary,
            ExtrapolationMethod::Linear => {
                let slope = (at_boundary.clone() - self.transform(inner)) / (boundary.time - inner.time);
                at_boundary + slope * (time - boundary.time)
            }
        }
    }

    /// Interpolate inside `[knots[0].time, knots[n-1].time]`.
    fn interpolate(&self, knots: &[&CurvePoint<V>], time: Time) -> Result<V> {
        let n = knots.len();
        let idx = knots.partition_point(|k| k.time <= time);
        if idx >= n {
            return Ok(self.transform(knots[n - 1]));
        }
        let (lo, hi) = (knots[idx - 1], knots[idx]);
        if lo.time == time {
            return Ok(self.transform(lo));
        }

        match self.config.interpolation_method {
            InterpolationMethod::PiecewiseConstantLeftpoint => Ok(self.transform(lo)),
            InterpolationMethod::PiecewiseConstantRightpoint => Ok(self.transform(hi)),
            method if method.is_spline() && n > 2 => self.spline_value(knots, time),
            _ => {
                let w = (time - lo.time) / (hi.time - lo.time);
                Ok(self.transform(lo) * (1.0 - w) + self.transform(hi) * w)
            }
        }
    }

    fn spline_value(&self, knots: &[&CurvePoint<V>], time: Time) -> Result<V> {
        let splines = self
            .splines
            .get_or_init(|| self.build_splines(knots))
            .as_ref()
            .map_err(Clone::clone)?;
        Ok(V::from_paths(splines.iter().map(|s| s.operator(time)).collect()))
    }

    fn build_splines(&self, knots: &[&CurvePoint<V>]) -> Result<PathSplines> {
        let xs: Vec<Real> = knots.iter().map(|k| k.time).collect();
        let transformed: Vec<V> = knots.iter().map(|k| self.transform(k)).collect();
        let paths = transformed.iter().map(RandomValue::size).max().unwrap_or(1);
        (0..paths)
            .map(|p| {
                let ys: Vec<Real> = transformed.iter().map(|v| v.path(p)).collect();
                self.build_spline(&xs, &ys)
            })
            .collect()
    }

    fn build_spline(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(match self.config.interpolation_method {
            InterpolationMethod::CubicSpline => Box::new(CubicSpline::new(xs, ys)?),
            InterpolationMethod::Akima => Box::new(AkimaSpline::new(xs, ys, false)?),
            InterpolationMethod::AkimaContinuous => Box::new(AkimaSpline::new(xs, ys, true)?),
            InterpolationMethod::HarmonicSpline => Box::new(HarmonicSpline::new(xs, ys, false)?),
            InterpolationMethod::HarmonicSplineWithMonotonicFiltering => {
                Box::new(HarmonicSpline::new(xs, ys, true)?)
            }
            other => {
                return Err(Error::Runtime(format!(
                    "{other} is not a spline interpolation method"
                )))
            }
        })
    }
}

impl<V: RandomValue> Curve<V> for CurveInterpolation<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    fn value_at(&self, _model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.value(time)
    }

    fn parameters(&self) -> Vec<V> {
        CurveInterpolation::parameters(self)
    }

    fn clone_for_parameters(&self, parameters: &[V]) -> Result<Arc<dyn Curve<V>>> {
        Ok(Arc::new(self.with_parameters(parameters)?))
    }
}
