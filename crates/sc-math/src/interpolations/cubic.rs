//! Natural cubic spline and Fritsch–Butland harmonic spline.

use sc_core::{errors::Result, Real};

use super::{check_knots, secants, HermiteCubic, Interpolation1D};

// ── Natural cubic spline ──────────────────────────────────────────────────────

/// Natural cubic spline: C² everywhere, zero second derivative at both ends.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    inner: HermiteCubic,
}

impl CubicSpline {
    /// Build a natural cubic spline through at least three points.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_knots(xs, ys, 3, "cubic spline")?;
        let n = xs.len();
        let (s, dx) = secants(xs, ys);

        // Second derivatives m[1..n-1] from the tridiagonal system
        //   dx[i-1] m[i-1] + 2 (dx[i-1] + dx[i]) m[i] + dx[i] m[i+1] = 6 (s[i] - s[i-1]),
        // m[0] = m[n-1] = 0, solved by forward elimination / back substitution.
        let mut m = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut rhs = vec![0.0; n];
        for i in 1..n - 1 {
            diag[i] = 2.0 * (dx[i - 1] + dx[i]);
            rhs[i] = 6.0 * (s[i] - s[i - 1]);
        }
        for i in 2..n - 1 {
            let w = dx[i - 1] / diag[i - 1];
            diag[i] -= w * dx[i - 1];
            rhs[i] -= w * rhs[i - 1];
        }
        for i in (1..n - 1).rev() {
            m[i] = (rhs[i] - dx[i] * m[i + 1]) / diag[i];
        }

        let mut ts = Vec::with_capacity(n);
        for i in 0..n - 1 {
            ts.push(s[i] - dx[i] * (2.0 * m[i] + m[i + 1]) / 6.0);
        }
        ts.push(s[n - 2] + dx[n - 2] * (m[n - 2] + 2.0 * m[n - 1]) / 6.0);

        Ok(Self {
            inner: HermiteCubic::new(xs.to_vec(), ys.to_vec(), &ts),
        })
    }
}

impl Interpolation1D for CubicSpline {
    fn operator(&self, x: Real) -> Real {
        self.inner.value(x)
    }

    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }
}

// ── Harmonic spline ───────────────────────────────────────────────────────────

/// Fritsch–Butland harmonic spline (local, shape-preserving).
///
/// Interior slopes are the weighted harmonic mean of the adjacent secants,
/// or zero where the data has a local extremum.  End slopes use the
/// three-point one-sided formula; with monotonic filtering they are clipped
/// so that the end segments cannot overshoot.
#[derive(Debug, Clone)]
pub struct HarmonicSpline {
    inner: HermiteCubic,
}

impl HarmonicSpline {
    /// Build a harmonic spline through at least three points.
    pub fn new(xs: &[Real], ys: &[Real], monotonic_filtering: bool) -> Result<Self> {
        check_knots(xs, ys, 3, "harmonic spline")?;
        let n = xs.len();
        let (s, dx) = secants(xs, ys);

        let mut ts = vec![0.0; n];
        for i in 1..n - 1 {
            if s[i - 1] * s[i] > 0.0 {
                ts[i] = 3.0 * (dx[i - 1] + dx[i])
                    / ((2.0 * dx[i] + dx[i - 1]) / s[i - 1] + (dx[i] + 2.0 * dx[i - 1]) / s[i]);
            }
        }

        ts[0] = ((2.0 * dx[0] + dx[1]) * s[0] - dx[0] * s[1]) / (dx[0] + dx[1]);
        ts[n - 1] = ((2.0 * dx[n - 2] + dx[n - 3]) * s[n - 2] - dx[n - 2] * s[n - 3])
            / (dx[n - 2] + dx[n - 3]);

        if monotonic_filtering {
            ts[0] = filter_end_slope(ts[0], s[0], s[1]);
            ts[n - 1] = filter_end_slope(ts[n - 1], s[n - 2], s[n - 3]);
        }

        Ok(Self {
            inner: HermiteCubic::new(xs.to_vec(), ys.to_vec(), &ts),
        })
    }
}

/// Clip an end slope `t` against the adjacent secant `s` and the next one
/// `s_next`: zero if `t` points against `s`, at most `3|s|` if the data turns.
fn filter_end_slope(t: Real, s: Real, s_next: Real) -> Real {
    if t * s <= 0.0 {
        0.0
    } else if s * s_next <= 0.0 && t.abs() > 3.0 * s.abs() {
        3.0 * s
    } else {
        t
    }
}

impl Interpolation1D for HarmonicSpline {
    fn operator(&self, x: Real) -> Real {
        self.inner.value(x)
    }

    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }
}
