//! Error types for stochastic-curves.
//!
//! Every fallible operation in the workspace returns [`Result`] over the
//! single [`Error`] enum below.  Configuration problems (a missing curve, a
//! non-positive payment offset, an empty curve) and computation failures
//! propagated from an external simulation share this type, so callers can
//! use `?` across crate boundaries.  The `ensure!` and `fail!` macros are the
//! short forms used for preconditions and ad-hoc runtime failures.

use thiserror::Error;

/// The top-level error type used throughout stochastic-curves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A curve cannot answer a query in its current state (e.g. it has no
    /// points).
    #[error("invalid state of curve '{curve}': {reason}")]
    InvalidCurveState {
        /// Name of the offending curve.
        curve: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A named curve is absent from the model, or present without the
    /// requested capability.
    #[error("no {capability} named '{name}' found in the model")]
    CurveNotFound {
        /// Name that was looked up.
        name: String,
        /// Capability that was requested (`"curve"`, `"discount curve"`,
        /// `"forward curve"`).
        capability: &'static str,
    },

    /// An operation needs an analytic model to resolve curves by name, but
    /// none was supplied.
    #[error("curve '{curve}' requires a model: {reason}")]
    MissingModel {
        /// Name of the curve that needs the model.
        curve: String,
        /// Why the model is needed.
        reason: String,
    },

    /// A forward curve reported a payment offset that is not strictly
    /// positive.
    #[error("non-positive payment offset {offset} at fixing time {fixing_time} on curve '{curve}'")]
    InvalidPaymentOffset {
        /// Name of the forward curve.
        curve: String,
        /// Fixing time at which the offset was requested.
        fixing_time: f64,
        /// The offending offset.
        offset: f64,
    },

    /// Failure reported by an external simulation.
    #[error("simulation error: {0}")]
    Simulation(String),

    /// The operation is not supported by this object.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout stochastic-curves.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use sc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sc_core::{fail, errors::Error};
/// fn always_err() -> sc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
