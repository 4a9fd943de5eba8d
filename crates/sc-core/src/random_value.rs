//! The numeric value abstraction shared by curves and products.
//!
//! Curve values and pricing results are *random values*: one number per
//! simulated path.  [`RandomValue`] captures the arithmetic the curve layer
//! needs (elementwise operators, `exp`, `ln`, `powf`) together with the
//! scalar reductions used by callers (`mean`, `variance`).  A plain `f64` is
//! the degenerate one-path value, so the same curve code serves classic
//! deterministic curves and Monte-Carlo path vectors.

use crate::Real;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A number that may carry one value per simulated path.
///
/// Binary operators broadcast a deterministic operand (`size() == 1`)
/// against a stochastic one.
pub trait RandomValue:
    Clone
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<Real, Output = Self>
    + Sub<Real, Output = Self>
    + Mul<Real, Output = Self>
    + Div<Real, Output = Self>
{
    /// A deterministic value equal to `value` on every path.
    fn from_real(value: Real) -> Self;

    /// Build a value from one realisation per path.
    ///
    /// A single-element vector yields a deterministic value.
    fn from_paths(values: Vec<Real>) -> Self;

    /// Number of paths; `1` for a deterministic value.
    fn size(&self) -> usize;

    /// Realisation on path `index`.  Deterministic values return the same
    /// number for every index.
    fn path(&self, index: usize) -> Real;

    /// Apply `f` to every realisation.
    fn apply<F: Fn(Real) -> Real>(&self, f: F) -> Self;

    /// Expectation over paths.
    fn mean(&self) -> Real;

    /// Population variance over paths (zero for a deterministic value).
    fn variance(&self) -> Real;

    /// `true` if the value is the same on every path.
    fn is_deterministic(&self) -> bool {
        self.size() == 1
    }

    /// Elementwise `e^x`.
    fn exp(&self) -> Self {
        self.apply(Real::exp)
    }

    /// Elementwise natural logarithm.
    fn ln(&self) -> Self {
        self.apply(Real::ln)
    }

    /// Elementwise `x^exponent`.
    fn powf(&self, exponent: Real) -> Self {
        self.apply(|x| x.powf(exponent))
    }
}

impl RandomValue for Real {
    fn from_real(value: Real) -> Self {
        value
    }

    /// Collapses several realisations to their average; a scalar cannot
    /// hold more than one path.
    fn from_paths(values: Vec<Real>) -> Self {
        match values.len() {
            0 => 0.0,
            1 => values[0],
            n => values.iter().sum::<Real>() / n as Real,
        }
    }

    fn size(&self) -> usize {
        1
    }

    fn path(&self, _index: usize) -> Real {
        *self
    }

    fn apply<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        f(*self)
    }

    fn mean(&self) -> Real {
        *self
    }

    fn variance(&self) -> Real {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn discount<V: RandomValue>(forward: V, period: Real) -> V {
        V::from_real(1.0) / (forward * period + 1.0)
    }

    #[test]
    fn scalar_is_a_one_path_value() {
        let x: Real = 0.25;
        assert_eq!(x.size(), 1);
        assert!(x.is_deterministic());
        assert_eq!(x.path(17), 0.25);
        assert_eq!(RandomValue::variance(&x), 0.0);
    }

    #[test]
    fn generic_code_runs_on_scalars() {
        let df = discount(0.04_f64, 0.5);
        assert_abs_diff_eq!(df, 1.0 / 1.02, epsilon = 1e-15);
    }

    #[test]
    fn default_transcendental_functions() {
        let x: Real = 2.0;
        assert_abs_diff_eq!(RandomValue::exp(&x), 2.0_f64.exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(RandomValue::ln(&x), 2.0_f64.ln(), epsilon = 1e-15);
        assert_abs_diff_eq!(RandomValue::powf(&x, -1.5), 2.0_f64.powf(-1.5), epsilon = 1e-15);
    }

    #[test]
    fn from_paths_averages_for_scalars() {
        assert_eq!(<Real as RandomValue>::from_paths(vec![1.0, 3.0]), 2.0);
        assert_eq!(<Real as RandomValue>::from_paths(vec![5.0]), 5.0);
    }
}
