//! # stochastic-curves
//!
//! Discount and forward curves whose values are random values, the
//! compounding duality between them, curves backed by a rate simulation,
//! and the swaps and FRAs valued on top of them.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `sc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use stochastic_curves::curves::{AnalyticModel, CurveConfig, DiscountCurve, DiscountCurveInterpolation};
//!
//! let curve = DiscountCurveInterpolation::from_zero_rates(
//!     "eur",
//!     None,
//!     &[1.0, 2.0],
//!     &[0.02, 0.02],
//!     None,
//!     CurveConfig::default(),
//! )?;
//! let model = AnalyticModel::<f64>::new().add_curve("eur", Arc::new(curve));
//! let df = model.require_discount_curve("eur")?.discount_factor(Some(&model), 1.5)?;
//! assert!((df - (-0.03f64).exp()).abs() < 1e-12);
//! # Ok::<(), stochastic_curves::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the random value abstraction, and error definitions.
pub use sc_core as core;

/// Time grids, schedules, tenors, and calendars.
pub use sc_time as time;

/// Path vectors and spline interpolation.
pub use sc_math as math;

/// Curves, simulation-backed curves, and the analytic model.
pub use sc_curves as curves;

/// Swaps, annuities, and forward rate agreements.
pub use sc_products as products;
