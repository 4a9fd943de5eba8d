//! Curves backed by an external rate simulation.
//!
//! A [`RateSimulation`] answers "what is the simulated rate over
//! `[start, end]` as seen at the observation time".  At a valuation time
//! `t0` the simulated forwards over the remaining periods of the tenor grid
//! are collected into a FORWARD curve (linear in value, constant
//! extrapolation) whose time axis starts at `t0`:
//!
//! * if the first grid time at or after `t0` lies strictly after it, the
//!   stub rate over `[t0, grid[first]]` is stored at time zero;
//! * the rate over `[grid[i], grid[i+1]]` is stored at `grid[i] - t0`.
//!
//! The forward curve is built eagerly or, for the lazy constructors, on the
//! first query under a mutex.  A failed build is returned to the caller and
//! retried by the next query.

use crate::analytic_model::AnalyticModel;
use crate::config::ForwardCurveConfig;
use crate::curve::{Curve, DiscountCurve, ForwardCurve};
use crate::discount_curve_from_forward_curve::discount_factor_from_forward_curve;
use crate::discount_curve_interpolation::DiscountCurveInterpolation;
use crate::forward_curve_interpolation::ForwardCurveInterpolation;
use sc_core::errors::{Error, Result};
use sc_core::{RandomValue, Real, Time};
use sc_time::TimeDiscretization;
use std::sync::{Arc, Mutex, PoisonError};

/// Rate queries answered by a stochastic simulation.
pub trait RateSimulation<V: RandomValue>: std::fmt::Debug + Send + Sync {
    /// Simulated simple rate over `[period_start, period_end]` as seen at
    /// `observation_time`.
    fn simulated_rate(&self, observation_time: Time, period_start: Time, period_end: Time) -> Result<V>;

    /// Tenor grid of the simulated rates.
    fn tenor_grid(&self) -> &TimeDiscretization;

    /// Number of tenor grid points.
    fn number_of_grid_points(&self) -> usize {
        self.tenor_grid().number_of_times()
    }
}

/// The part of the tenor grid that lies at or after a valuation time.
#[derive(Debug, Clone, Copy)]
struct RemainingGrid {
    first: usize,
    periods: usize,
    first_time: Time,
    period_length: Time,
}

impl RemainingGrid {
    fn locate<V: RandomValue>(simulation: &dyn RateSimulation<V>, valuation_time: Time) -> Result<Self> {
        let grid = simulation.tenor_grid();
        let periods = simulation.number_of_grid_points().saturating_sub(1);
        let first = grid
            .index_nearest_greater_or_equal(valuation_time)
            .filter(|&i| i < periods)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "no simulated period starts at or after valuation time {valuation_time} (grid ends at {})",
                    grid.last()
                ))
            })?;
        Ok(Self {
            first,
            periods,
            first_time: grid.time(first)?,
            period_length: grid.time_step(first)?,
        })
    }

    fn has_stub(&self, valuation_time: Time) -> bool {
        self.first_time > valuation_time
    }
}

/// Simulated forwards at `valuation_time`: times on the shifted axis, the
/// rates, and the period length used as payment offset.
fn simulated_forwards<V: RandomValue>(
    simulation: &dyn RateSimulation<V>,
    valuation_time: Time,
) -> Result<(Vec<Time>, Vec<V>, RemainingGrid)> {
    let remaining = RemainingGrid::locate(simulation, valuation_time)?;
    let grid = simulation.tenor_grid();
    let mut times = Vec::with_capacity(remaining.periods - remaining.first + 1);
    let mut forwards = Vec::with_capacity(times.capacity());
    if remaining.has_stub(valuation_time) {
        times.push(0.0);
        forwards.push(simulation.simulated_rate(valuation_time, valuation_time, remaining.first_time)?);
    }
    for i in remaining.first..remaining.periods {
        let (start, end) = (grid.time(i)?, grid.time(i + 1)?);
        times.push(start - valuation_time);
        forwards.push(simulation.simulated_rate(valuation_time, start, end)?);
    }
    Ok((times, forwards, remaining))
}

/// Guarded-once materialization of the simulated forward curve.
#[derive(Debug)]
struct SimulatedForwardCurve<V: RandomValue> {
    name: String,
    simulation: Arc<dyn RateSimulation<V>>,
    valuation_time: Time,
    remaining: RemainingGrid,
    cache: Mutex<Option<Arc<ForwardCurveInterpolation<V>>>>,
}

impl<V: RandomValue> SimulatedForwardCurve<V> {
    fn lazy(name: String, simulation: Arc<dyn RateSimulation<V>>, valuation_time: Time) -> Result<Self> {
        let remaining = RemainingGrid::locate(simulation.as_ref(), valuation_time)?;
        Ok(Self {
            name,
            simulation,
            valuation_time,
            remaining,
            cache: Mutex::new(None),
        })
    }

    fn eager(name: String, simulation: Arc<dyn RateSimulation<V>>, valuation_time: Time) -> Result<Self> {
        let this = Self::lazy(name, simulation, valuation_time)?;
        this.get()?;
        Ok(this)
    }

    fn get(&self) -> Result<Arc<ForwardCurveInterpolation<V>>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(curve) = cache.as_ref() {
            return Ok(Arc::clone(curve));
        }
        match self.build() {
            Ok(curve) => {
                tracing::info!(
                    curve = %self.name,
                    valuation_time = self.valuation_time,
                    forwards = curve.curve().number_of_points(),
                    "materialized forward curve from simulation"
                );
                let curve = Arc::new(curve);
                *cache = Some(Arc::clone(&curve));
                Ok(curve)
            }
            Err(error) => {
                tracing::warn!(
                    curve = %self.name,
                    valuation_time = self.valuation_time,
                    %error,
                    "failed to materialize forward curve from simulation"
                );
                Err(error)
            }
        }
    }

    fn build(&self) -> Result<ForwardCurveInterpolation<V>> {
        let (times, forwards, remaining) = simulated_forwards(self.simulation.as_ref(), self.valuation_time)?;
        ForwardCurveInterpolation::from_forwards(
            format!("{}.forwards", self.name),
            None,
            remaining.period_length,
            ForwardCurveConfig::default(),
            None,
            None,
            &times,
            &forwards,
        )
    }
}

/// A discount curve compounding the simulated forwards at a valuation time.
#[derive(Debug)]
pub struct DiscountCurveFromSimulation<V: RandomValue> {
    forwards: SimulatedForwardCurve<V>,
    time_scaling: Real,
}

impl<V: RandomValue> DiscountCurveFromSimulation<V> {
    /// Query the simulation now.
    ///
    /// # Errors
    /// `InvalidArgument` if no period starts at or after `valuation_time`;
    /// any error of the simulation.
    pub fn new_eager(
        name: impl Into<String>,
        simulation: Arc<dyn RateSimulation<V>>,
        valuation_time: Time,
        time_scaling: Real,
    ) -> Result<Self> {
        Ok(Self {
            forwards: SimulatedForwardCurve::eager(name.into(), simulation, valuation_time)?,
            time_scaling,
        })
    }

    /// Query the simulation on first use.
    ///
    /// # Errors
    /// `InvalidArgument` if no period starts at or after `valuation_time`.
    pub fn new_lazy(
        name: impl Into<String>,
        simulation: Arc<dyn RateSimulation<V>>,
        valuation_time: Time,
        time_scaling: Real,
    ) -> Result<Self> {
        Ok(Self {
            forwards: SimulatedForwardCurve::lazy(name.into(), simulation, valuation_time)?,
            time_scaling,
        })
    }

    /// Valuation time of the simulated forwards.
    pub fn valuation_time(&self) -> Time {
        self.forwards.valuation_time
    }

    /// The materialized forward curve.
    pub fn forward_curve(&self) -> Result<Arc<ForwardCurveInterpolation<V>>> {
        self.forwards.get()
    }
}

impl<V: RandomValue> Curve<V> for DiscountCurveFromSimulation<V> {
    fn name(&self) -> &str {
        &self.forwards.name
    }

    fn value_at(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.discount_factor(model, time)
    }

    fn as_discount_curve(&self) -> Option<&dyn DiscountCurve<V>> {
        Some(self)
    }
}

impl<V: RandomValue> DiscountCurve<V> for DiscountCurveFromSimulation<V> {
    fn discount_factor(&self, _model: Option<&AnalyticModel<V>>, maturity: Time) -> Result<V> {
        let forward_curve = self.forwards.get()?;
        discount_factor_from_forward_curve(forward_curve.as_ref(), None, maturity, self.time_scaling)
    }
}

/// A forward curve reading the simulated forwards at a valuation time.
#[derive(Debug)]
pub struct ForwardCurveFromSimulation<V: RandomValue> {
    forwards: SimulatedForwardCurve<V>,
}

impl<V: RandomValue> ForwardCurveFromSimulation<V> {
    /// Query the simulation now.
    pub fn new_eager(
        name: impl Into<String>,
        simulation: Arc<dyn RateSimulation<V>>,
        valuation_time: Time,
    ) -> Result<Self> {
        Ok(Self {
            forwards: SimulatedForwardCurve::eager(name.into(), simulation, valuation_time)?,
        })
    }

    /// Query the simulation on first use.
    pub fn new_lazy(
        name: impl Into<String>,
        simulation: Arc<dyn RateSimulation<V>>,
        valuation_time: Time,
    ) -> Result<Self> {
        Ok(Self {
            forwards: SimulatedForwardCurve::lazy(name.into(), simulation, valuation_time)?,
        })
    }

    /// The materialized forward curve.
    pub fn forward_curve(&self) -> Result<Arc<ForwardCurveInterpolation<V>>> {
        self.forwards.get()
    }
}

impl<V: RandomValue> Curve<V> for ForwardCurveFromSimulation<V> {
    fn name(&self) -> &str {
        &self.forwards.name
    }

    fn value_at(&self, model: Option<&AnalyticModel<V>>, time: Time) -> Result<V> {
        self.forward(model, time)
    }

    fn as_forward_curve(&self) -> Option<&dyn ForwardCurve<V>> {
        Some(self)
    }
}

impl<V: RandomValue> ForwardCurve<V> for ForwardCurveFromSimulation<V> {
    fn forward(&self, _model: Option<&AnalyticModel<V>>, fixing_time: Time) -> Result<V> {
        self.forwards.get()?.forward(None, fixing_time)
    }

    fn payment_offset(&self, _fixing_time: Time) -> Result<Time> {
        Ok(self.forwards.remaining.period_length)
    }

    fn discount_curve_name(&self) -> Option<&str> {
        None
    }
}

/// Zero rates at `maturities` (measured from `valuation_time`) implied by
/// the simulated forwards.
///
/// The forwards are compounded on the shifted tenor grid
/// `[0, grid[first] - t0, …, grid[n] - t0]`, where the leading zero only
/// appears if `grid[first]` lies after `t0`.
pub fn zero_rates_from_simulation<V: RandomValue>(
    simulation: &dyn RateSimulation<V>,
    valuation_time: Time,
    maturities: &[Time],
) -> Result<Vec<V>> {
    let (_, forwards, remaining) = simulated_forwards(simulation, valuation_time)?;
    let grid = simulation.tenor_grid();
    let mut times = Vec::with_capacity(forwards.len() + 1);
    if remaining.has_stub(valuation_time) {
        times.push(0.0);
    }
    for i in remaining.first..=remaining.periods {
        times.push(grid.time(i)? - valuation_time);
    }
    let tenor = TimeDiscretization::new(times)?;
    DiscountCurveInterpolation::from_forward_rates("simulated zero rates", &tenor, &forwards)?
        .zero_rates(None, maturities)
}
