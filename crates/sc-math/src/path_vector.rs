//! `PathVector` — one real number per Monte-Carlo path.
//!
//! A thin newtype around `nalgebra::DVector<f64>` implementing
//! [`RandomValue`].  A vector of length one is a deterministic value and
//! broadcasts against vectors of any length, so a curve seeded with
//! deterministic points can be combined with simulated forwards without
//! special-casing.

use nalgebra::DVector;
use sc_core::{RandomValue, Real};
use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector-valued number representing a quantity across simulated paths.
///
/// Binary operators panic if both operands are stochastic with different
/// path counts, in the same way `nalgebra` panics on a dimension mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct PathVector(DVector<Real>);

impl PathVector {
    /// A deterministic value.
    pub fn deterministic(value: Real) -> Self {
        Self(DVector::from_element(1, value))
    }

    /// A stochastic value from one realisation per path.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn from_vec(values: Vec<Real>) -> Self {
        assert!(!values.is_empty(), "a path vector needs at least one path");
        Self(DVector::from_vec(values))
    }

    /// A value with `n` paths whose realisation on path `i` is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> Real>(n: usize, f: F) -> Self {
        Self::from_vec((0..n).map(f).collect())
    }

    /// Realisations as a slice (length one when deterministic).
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Smallest realisation.
    pub fn min(&self) -> Real {
        Statistics::min(self.0.iter())
    }

    /// Largest realisation.
    pub fn max(&self) -> Real {
        Statistics::max(self.0.iter())
    }

    /// Empirical quantile of the realisations, `q` in `[0, 1]`.
    pub fn quantile(&self, q: Real) -> Real {
        let mut data = Data::new(self.0.as_slice().to_vec());
        data.quantile(q)
    }

    fn zip_with<F: Fn(Real, Real) -> Real>(&self, other: &Self, f: F) -> Self {
        let (n, m) = (self.0.len(), other.0.len());
        if n == 1 {
            let x = self.0[0];
            Self(other.0.map(|y| f(x, y)))
        } else if m == 1 {
            let y = other.0[0];
            Self(self.0.map(|x| f(x, y)))
        } else {
            assert_eq!(n, m, "path vectors have different numbers of paths");
            Self(self.0.zip_map(&other.0, f))
        }
    }
}

impl RandomValue for PathVector {
    fn from_real(value: Real) -> Self {
        Self::deterministic(value)
    }

    fn from_paths(values: Vec<Real>) -> Self {
        Self::from_vec(values)
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn path(&self, index: usize) -> Real {
        if self.0.len() == 1 {
            self.0[0]
        } else {
            self.0[index]
        }
    }

    fn apply<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    fn mean(&self) -> Real {
        self.0.iter().mean()
    }

    fn variance(&self) -> Real {
        if self.0.len() == 1 {
            return 0.0;
        }
        self.0.iter().population_variance()
    }
}

// ── From conversions ──────────────────────────────────────────────────────────

impl From<Real> for PathVector {
    fn from(value: Real) -> Self {
        Self::deterministic(value)
    }
}

impl From<Vec<Real>> for PathVector {
    fn from(values: Vec<Real>) -> Self {
        Self::from_vec(values)
    }
}

impl From<DVector<Real>> for PathVector {
    fn from(v: DVector<Real>) -> Self {
        assert!(!v.is_empty(), "a path vector needs at least one path");
        Self(v)
    }
}

// ── Element-wise arithmetic ───────────────────────────────────────────────────

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for PathVector {
            type Output = PathVector;
            fn $method(self, rhs: PathVector) -> PathVector {
                self.zip_with(&rhs, |x, y| x $op y)
            }
        }

        impl<'a> $trait<&'a PathVector> for &'a PathVector {
            type Output = PathVector;
            fn $method(self, rhs: &'a PathVector) -> PathVector {
                self.zip_with(rhs, |x, y| x $op y)
            }
        }

        impl $trait<Real> for PathVector {
            type Output = PathVector;
            fn $method(self, rhs: Real) -> PathVector {
                PathVector(self.0.map(|x| x $op rhs))
            }
        }

        impl $trait<Real> for &PathVector {
            type Output = PathVector;
            fn $method(self, rhs: Real) -> PathVector {
                PathVector(self.0.map(|x| x $op rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);
impl_binary_op!(Div, div, /);

impl Neg for PathVector {
    type Output = PathVector;
    fn neg(self) -> PathVector {
        PathVector(-self.0)
    }
}

impl Neg for &PathVector {
    type Output = PathVector;
    fn neg(self) -> PathVector {
        PathVector(-&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn deterministic_broadcasts() {
        let x = PathVector::from_vec(vec![1.0, 2.0, 3.0]);
        let one = PathVector::deterministic(1.0);
        assert_eq!((one.clone() + x.clone()).as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!((x.clone() / PathVector::deterministic(2.0)).as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!((&one - &x).as_slice(), &[0.0, -1.0, -2.0]);
        assert_eq!(x.path(2), 3.0);
        assert_eq!(one.path(2), 1.0);
    }

    #[test]
    fn scalar_operands() {
        let x = PathVector::from_vec(vec![1.0, 2.0]);
        assert_eq!((x.clone() * 3.0 + 1.0).as_slice(), &[4.0, 7.0]);
        assert_eq!((-x).as_slice(), &[-1.0, -2.0]);
    }

    #[test]
    fn moments() {
        let x = PathVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(x.mean(), 2.5, epsilon = 1e-15);
        assert_abs_diff_eq!(RandomValue::variance(&x), 1.25, epsilon = 1e-15);
        assert_abs_diff_eq!(x.min(), 1.0);
        assert_abs_diff_eq!(x.max(), 4.0);
        assert_eq!(RandomValue::variance(&PathVector::deterministic(3.0)), 0.0);
        assert!(PathVector::deterministic(3.0).is_deterministic());
    }

    #[test]
    fn transcendental_functions_act_per_path() {
        let x = PathVector::from_vec(vec![1.0, 4.0]);
        let y = RandomValue::ln(&RandomValue::exp(&x));
        assert_abs_diff_eq!(y.path(0), 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(y.path(1), 4.0, epsilon = 1e-14);
        assert_eq!(RandomValue::powf(&x, 0.5).as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn median_of_paths() {
        let x = PathVector::from_fn(5, |i| i as f64);
        assert_abs_diff_eq!(x.quantile(0.5), 2.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "different numbers of paths")]
    fn mismatched_paths_panic() {
        let _ = PathVector::from_vec(vec![1.0, 2.0]) + PathVector::from_vec(vec![1.0, 2.0, 3.0]);
    }
}
