//! Scalar 1D interpolation used by the spline family of curve interpolation
//! methods.
//!
//! Every scheme here is a piecewise cubic Hermite polynomial; the schemes
//! differ only in how the knot slopes are chosen:
//!
//! - [`CubicSpline`] — natural cubic spline (C², zero curvature at the ends).
//! - [`AkimaSpline`] — Akima's locally weighted slopes, optionally with the
//!   modified weights that make the slopes continuous in the data.
//! - [`HarmonicSpline`] — Fritsch–Butland weighted harmonic mean of the
//!   adjacent secants, optionally with monotonic filtering at the ends.

use sc_core::{errors::Result, Real};

/// Akima spline interpolation.
pub mod akima;

/// Natural and harmonic cubic splines.
pub mod cubic;

pub use akima::AkimaSpline;
pub use cubic::{CubicSpline, HarmonicSpline};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Binary search: find `i` such that `xs[i] <= x < xs[i+1]`, clamped.
pub(crate) fn locate(xs: &[Real], x: Real) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    xs.partition_point(|&xi| xi <= x) - 1
}

/// Validate knot abscissae and ordinates shared by all schemes.
pub(crate) fn check_knots(xs: &[Real], ys: &[Real], min_points: usize, scheme: &str) -> Result<()> {
    sc_core::ensure!(
        xs.len() >= min_points,
        "{scheme} requires at least {min_points} points, got {}",
        xs.len()
    );
    sc_core::ensure!(xs.len() == ys.len(), "xs and ys must have the same length");
    sc_core::ensure!(
        xs.windows(2).all(|w| w[1] > w[0]),
        "{scheme} abscissae must be strictly increasing"
    );
    Ok(())
}

/// Secant slopes and interval widths of the data.
pub(crate) fn secants(xs: &[Real], ys: &[Real]) -> (Vec<Real>, Vec<Real>) {
    let dx: Vec<Real> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let s = ys
        .windows(2)
        .zip(&dx)
        .map(|(w, h)| (w[1] - w[0]) / h)
        .collect();
    (s, dx)
}

/// Piecewise cubic in Hermite form:
///
///   `f(x) = y_i + dx*(a_i + dx*(b_i + dx*c_i))`, with `dx = x - x_i`,
///
/// determined by the knot values and the knot slopes `ts`.
#[derive(Debug, Clone)]
pub(crate) struct HermiteCubic {
    xs: Vec<Real>,
    ys: Vec<Real>,
    a: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
}

impl HermiteCubic {
    pub(crate) fn new(xs: Vec<Real>, ys: Vec<Real>, ts: &[Real]) -> Self {
        let n = xs.len();
        let mut a = Vec::with_capacity(n - 1);
        let mut b = Vec::with_capacity(n - 1);
        let mut c = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let dx = xs[i + 1] - xs[i];
            let s = (ys[i + 1] - ys[i]) / dx;
            a.push(ts[i]);
            b.push((3.0 * s - ts[i + 1] - 2.0 * ts[i]) / dx);
            c.push((ts[i + 1] + ts[i] - 2.0 * s) / (dx * dx));
        }
        Self { xs, ys, a, b, c }
    }

    pub(crate) fn x_min(&self) -> Real {
        self.xs[0]
    }

    pub(crate) fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    pub(crate) fn value(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = x - self.xs[i];
        self.ys[i] + dx * (self.a[i] + dx * (self.b[i] + dx * self.c[i]))
    }
}
