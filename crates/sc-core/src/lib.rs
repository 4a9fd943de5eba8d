//! # sc-core
//!
//! Core types, traits, and error definitions for stochastic-curves.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: type aliases, the error type with its
//! `ensure!` / `fail!` macros, and the [`RandomValue`] abstraction over
//! deterministic and path-vector numbers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// The [`RandomValue`] trait and its scalar implementation.
pub mod random_value;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A time measurement in years, relative to a curve's reference date.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use random_value::RandomValue;
