//! `TimeDiscretization` — a strictly increasing grid of times.
//!
//! Used as the tenor grid of a rate simulation and as the input of regular
//! schedules and forward-rate discount factory functions.

use sc_core::errors::{Error, Result};
use sc_core::Time;

/// A strictly increasing, non-empty sequence of times.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDiscretization {
    times: Vec<Time>,
}

impl TimeDiscretization {
    /// Build a discretization from explicit times.
    ///
    /// # Errors
    /// Returns an error if `times` is empty, contains a non-finite value or
    /// is not strictly increasing.
    pub fn new(times: Vec<Time>) -> Result<Self> {
        sc_core::ensure!(!times.is_empty(), "time discretization must not be empty");
        sc_core::ensure!(
            times.iter().all(|t| t.is_finite()),
            "time discretization contains a non-finite time"
        );
        if let Some(w) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidArgument(format!(
                "times must be strictly increasing, found {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { times })
    }

    /// `steps + 1` equidistant times `initial, initial + dt, …`.
    pub fn uniform(initial: Time, steps: usize, dt: Time) -> Result<Self> {
        sc_core::ensure!(dt > 0.0, "time step must be positive, got {dt}");
        Self::new((0..=steps).map(|i| initial + i as Time * dt).collect())
    }

    /// Number of grid times.
    pub fn number_of_times(&self) -> usize {
        self.times.len()
    }

    /// Number of intervals between consecutive grid times.
    pub fn number_of_time_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Grid time at `index`.
    pub fn time(&self, index: usize) -> Result<Time> {
        self.times.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            size: self.times.len(),
        })
    }

    /// Length of interval `index`, i.e. `t[index+1] - t[index]`.
    pub fn time_step(&self, index: usize) -> Result<Time> {
        Ok(self.time(index + 1)? - self.time(index)?)
    }

    /// All grid times.
    pub fn as_slice(&self) -> &[Time] {
        &self.times
    }

    /// First grid time.
    pub fn first(&self) -> Time {
        self.times[0]
    }

    /// Last grid time.
    pub fn last(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// Index of the first grid time `>= time`, or `None` if every grid time
    /// is earlier.
    pub fn index_nearest_greater_or_equal(&self, time: Time) -> Option<usize> {
        let idx = self.times.partition_point(|&t| t < time);
        (idx < self.times.len()).then_some(idx)
    }

    /// Index of the grid time exactly equal to `time`.
    pub fn index_of(&self, time: Time) -> Option<usize> {
        self.times.iter().position(|&t| t == time)
    }
}
