//! Akima spline interpolation.
//!
//! Akima splines avoid the overshooting of natural cubic splines by using a
//! weighted average of neighbouring secants as the tangent at each knot.  The
//! classic weights make the tangent jump when neighbouring secants become
//! equal; the *continuous* variant adds the `|m_{i+1} + m_i| / 2` term to each
//! weight so that the tangents depend continuously on the data.

use sc_core::{errors::Result, Real};

use super::{check_knots, secants, HermiteCubic, Interpolation1D};

/// Akima spline interpolation.
#[derive(Debug, Clone)]
pub struct AkimaSpline {
    inner: HermiteCubic,
}

impl AkimaSpline {
    /// Build an Akima spline through at least two points.
    ///
    /// With fewer than three points the phantom end secants coincide with the
    /// single secant and the spline is the straight line.
    pub fn new(xs: &[Real], ys: &[Real], continuous: bool) -> Result<Self> {
        check_knots(xs, ys, 2, "Akima spline")?;
        let n = xs.len();
        let (m, _) = secants(xs, ys);
        let nm = m.len();

        // Phantom secants two positions beyond each end, extrapolated linearly.
        let (m_neg2, m_neg1, m_np1, m_np2) = if nm >= 2 {
            (
                3.0 * m[0] - 2.0 * m[1],
                2.0 * m[0] - m[1],
                2.0 * m[nm - 1] - m[nm - 2],
                3.0 * m[nm - 1] - 2.0 * m[nm - 2],
            )
        } else {
            (m[0], m[0], m[0], m[0])
        };

        let mut me = Vec::with_capacity(nm + 4);
        me.push(m_neg2);
        me.push(m_neg1);
        me.extend_from_slice(&m);
        me.push(m_np1);
        me.push(m_np2);

        let weight = |a: Real, b: Real| {
            if continuous {
                (a - b).abs() + 0.5 * (a + b).abs()
            } else {
                (a - b).abs()
            }
        };

        let mut ts = Vec::with_capacity(n);
        for i in 0..n {
            let idx = i + 2;
            let w1 = weight(me[idx + 1], me[idx]);
            let w2 = weight(me[idx - 1], me[idx - 2]);
            if w1 + w2 < 1e-30 {
                ts.push(0.5 * (me[idx - 1] + me[idx]));
            } else {
                ts.push((w1 * me[idx - 1] + w2 * me[idx]) / (w1 + w2));
            }
        }

        Ok(Self {
            inner: HermiteCubic::new(xs.to_vec(), ys.to_vec(), &ts),
        })
    }
}

impl Interpolation1D for AkimaSpline {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn akima_exact_on_nodes() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0, 1.0, 0.5, 2.0, 1.5, 3.0];
        for continuous in [false, true] {
            let s = AkimaSpline::new(&xs, &ys, continuous).unwrap();
            for (&x, &y) in xs.iter().zip(ys.iter()) {
                let v = s.operator(x);
                assert!((v - y).abs() < 1e-12, "at x={x}: expected {y}, got {v}");
            }
        }
    }

    #[test]
    fn akima_reproduces_linear() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        for continuous in [false, true] {
            let s = AkimaSpline::new(&xs, &ys, continuous).unwrap();
            let v = s.operator(2.5);
            assert!((v - 1.25).abs() < 1e-10, "expected 1.25, got {v}");
        }
    }

    #[test]
    fn continuous_weights_keep_flat_piece_flat() {
        // Flat, then a straight ramp.  At the corner both weights vanish, so
        // classic Akima averages the secants and undershoots the flat piece.
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 0.0, 0.0, 1.0, 2.0];
        let classic = AkimaSpline::new(&xs, &ys, false).unwrap();
        let smooth = AkimaSpline::new(&xs, &ys, true).unwrap();
        assert!((classic.operator(1.5) + 0.0625).abs() < 1e-12);
        assert!(smooth.operator(1.5).abs() < 1e-12);
        assert!((smooth.operator(3.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn two_points_give_a_line() {
        let s = AkimaSpline::new(&[1.0, 3.0], &[2.0, 6.0], false).unwrap();
        assert!((s.operator(2.0) - 4.0).abs() < 1e-12);
    }
}
