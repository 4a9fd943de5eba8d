//! `AnalyticModel` — an immutable registry of named curves.
//!
//! Curves and products never hold references to their peers; they look them
//! up here by name at query time.  Adding curves returns a new model that
//! shares every untouched entry with the receiver, so a model handed to a
//! pricing call never changes underneath it.

use crate::curve::{Curve, DiscountCurve, ForwardCurve};
use sc_core::errors::{Error, Result};
use sc_core::RandomValue;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A name → curve registry with copy-on-write updates.
///
/// # Example
///
/// ```
/// use sc_curves::{AnalyticModel, CurveConfig, DiscountCurveInterpolation};
/// use std::sync::Arc;
///
/// let dc = DiscountCurveInterpolation::from_zero_rates(
///     "EUR", None, &[1.0, 5.0], &[0.02, 0.025], None, CurveConfig::default(),
/// ).unwrap();
/// let empty: AnalyticModel<f64> = AnalyticModel::new();
/// let model = empty.add_curve("EUR", Arc::new(dc));
/// assert!(empty.get_curve("EUR").is_none());
/// assert!(model.get_discount_curve("EUR").is_some());
/// assert!(model.get_forward_curve("EUR").is_none());
/// ```
#[derive(Debug)]
pub struct AnalyticModel<V: RandomValue> {
    curves: Arc<BTreeMap<String, Arc<dyn Curve<V>>>>,
}

impl<V: RandomValue> Clone for AnalyticModel<V> {
    fn clone(&self) -> Self {
        Self {
            curves: Arc::clone(&self.curves),
        }
    }
}

impl<V: RandomValue> Default for AnalyticModel<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: RandomValue> AnalyticModel<V> {
    /// An empty model.
    pub fn new() -> Self {
        Self {
            curves: Arc::new(BTreeMap::new()),
        }
    }

    /// A model holding `curves`, keyed by their own names.
    pub fn from_curves(curves: impl IntoIterator<Item = Arc<dyn Curve<V>>>) -> Self {
        Self::new().add_curves(curves)
    }

    /// The curve registered as `name`.
    pub fn get_curve(&self, name: &str) -> Option<&Arc<dyn Curve<V>>> {
        self.curves.get(name)
    }

    /// The curve registered as `name`, if it is a discount curve.
    pub fn get_discount_curve(&self, name: &str) -> Option<&dyn DiscountCurve<V>> {
        self.curves.get(name).and_then(|c| c.as_discount_curve())
    }

    /// The curve registered as `name`, if it is a forward curve.
    pub fn get_forward_curve(&self, name: &str) -> Option<&dyn ForwardCurve<V>> {
        self.curves.get(name).and_then(|c| c.as_forward_curve())
    }

    /// Like [`get_discount_curve`](Self::get_discount_curve), failing with
    /// `CurveNotFound` instead of returning `None`.
    pub fn require_discount_curve(&self, name: &str) -> Result<&dyn DiscountCurve<V>> {
        self.get_discount_curve(name)
            .ok_or_else(|| Error::CurveNotFound {
                name: name.to_string(),
                capability: "discount curve",
            })
    }

    /// Like [`get_forward_curve`](Self::get_forward_curve), failing with
    /// `CurveNotFound` instead of returning `None`.
    pub fn require_forward_curve(&self, name: &str) -> Result<&dyn ForwardCurve<V>> {
        self.get_forward_curve(name)
            .ok_or_else(|| Error::CurveNotFound {
                name: name.to_string(),
                capability: "forward curve",
            })
    }

    /// A new model with `curve` registered as `name`, replacing any curve of
    /// that name.  The receiver is unchanged.
    #[must_use]
    pub fn add_curve(&self, name: impl Into<String>, curve: Arc<dyn Curve<V>>) -> Self {
        let name = name.into();
        let mut curves = Arc::clone(&self.curves);
        Arc::make_mut(&mut curves).insert(name.clone(), curve);
        tracing::debug!(curve = %name, curves = curves.len(), "curve added to model");
        Self { curves }
    }

    /// A new model with every curve of `curves` registered under its own
    /// name.  Later curves win on a name collision.
    #[must_use]
    pub fn add_curves(&self, curves: impl IntoIterator<Item = Arc<dyn Curve<V>>>) -> Self {
        let mut map = Arc::clone(&self.curves);
        let inner = Arc::make_mut(&mut map);
        let before = inner.len();
        for curve in curves {
            inner.insert(curve.name().to_string(), curve);
        }
        tracing::debug!(added = inner.len() - before, curves = inner.len(), "curves added to model");
        Self { curves: map }
    }

    /// A new model in which each named curve is replaced by a copy with new
    /// calibration parameters.
    ///
    /// # Errors
    /// `CurveNotFound` for an unknown name; the errors of
    /// [`Curve::clone_for_parameters`].
    pub fn clone_for_parameters<S: AsRef<str>>(&self, parameters: &[(S, Vec<V>)]) -> Result<Self> {
        let mut curves = Arc::clone(&self.curves);
        for (name, values) in parameters {
            let name = name.as_ref();
            let curve = self.get_curve(name).ok_or_else(|| Error::CurveNotFound {
                name: name.to_string(),
                capability: "curve",
            })?;
            let cloned = curve.clone_for_parameters(values)?;
            Arc::make_mut(&mut curves).insert(name.to_string(), cloned);
        }
        Ok(Self { curves })
    }

    /// Registered names, in order.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// `true` if no curve is registered.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl<V: RandomValue> fmt::Display for AnalyticModel<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnalyticModel [")?;
        for (i, name) in self.curve_names().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "]")
    }
}
