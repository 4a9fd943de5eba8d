//! # sc-math
//!
//! Numerical building blocks for stochastic-curves: the [`PathVector`]
//! random value (over nalgebra, with statrs moments) and the scalar spline
//! interpolators used by the spline family of curve interpolation methods.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D spline interpolation schemes.
pub mod interpolations;

/// Vector-valued numbers with one realisation per simulated path.
pub mod path_vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{AkimaSpline, CubicSpline, HarmonicSpline, Interpolation1D};
pub use path_vector::PathVector;
