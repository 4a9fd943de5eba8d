//! # sc-curves
//!
//! Interest-rate curves whose values are random values: discount curves,
//! forward curves, the compounding duality between them, curves backed by a
//! rate simulation, and the [`AnalyticModel`] registry that ties curves
//! together by name.
//!
//! All curves are generic over [`RandomValue`](sc_core::RandomValue); use
//! `f64` for classic deterministic curves and
//! [`PathVector`](sc_math::PathVector) for Monte-Carlo curves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The curve registry.
pub mod analytic_model;

/// Interpolation configuration enums.
pub mod config;

/// Curve traits and curve points.
pub mod curve;

/// The interpolation/extrapolation engine.
pub mod curve_interpolation;

/// Discount curves derived from forward curves.
pub mod discount_curve_from_forward_curve;

/// Discount curves with stored points.
pub mod discount_curve_interpolation;

/// Forward curves implied by discount curves.
pub mod forward_curve_from_discount_curve;

/// Forward curves with stored points.
pub mod forward_curve_interpolation;

/// Payment-offset rules.
pub mod payment_offset;

/// Curves backed by a rate simulation.
pub mod simulation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use analytic_model::AnalyticModel;
pub use config::{
    CurveConfig, ExtrapolationMethod, ForwardCurveConfig, InterpolationEntity,
    InterpolationEntityForward, InterpolationMethod,
};
pub use curve::{Curve, CurvePoint, DiscountCurve, ForwardCurve, ZERO_RATE_EPSILON};
pub use curve_interpolation::CurveInterpolation;
pub use discount_curve_from_forward_curve::{
    discount_factor_from_forward_curve, DiscountCurveFromForwardCurve, ForwardCurveSource,
};
pub use discount_curve_interpolation::DiscountCurveInterpolation;
pub use forward_curve_from_discount_curve::ForwardCurveFromDiscountCurve;
pub use forward_curve_interpolation::ForwardCurveInterpolation;
pub use payment_offset::{PaymentOffset, PaymentOffsetCode};
pub use simulation::{
    zero_rates_from_simulation, DiscountCurveFromSimulation, ForwardCurveFromSimulation,
    RateSimulation,
};
