//! `AnalyticProduct` — a product with a closed-form value under a model.

use sc_core::{errors::Result, RandomValue, Time};
use sc_curves::AnalyticModel;

/// A product whose value is computed from the curves of an
/// [`AnalyticModel`].
///
/// Values are random values: with path-vector curves the result carries one
/// value per path.  Calibration uses product values as its objectives.
pub trait AnalyticProduct<V: RandomValue>: std::fmt::Debug + Send + Sync {
    /// Value at `evaluation_time`, in units of the discount factor at that
    /// time unless the product states otherwise.
    ///
    /// # Errors
    /// `CurveNotFound` if a curve the product references is missing from
    /// `model`; any error raised by the curves.
    fn value(&self, evaluation_time: Time, model: &AnalyticModel<V>) -> Result<V>;

    /// Value at time zero.
    fn value_at_origin(&self, model: &AnalyticModel<V>) -> Result<V> {
        self.value(0.0, model)
    }
}
