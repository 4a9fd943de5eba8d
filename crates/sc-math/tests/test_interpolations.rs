//! Property tests for the spline interpolators.

use proptest::prelude::*;
use sc_math::{AkimaSpline, CubicSpline, HarmonicSpline, Interpolation1D};

fn knots() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.05f64..2.0, -1.0f64..1.0), 3..12).prop_map(|steps| {
        let mut x = 0.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dx, y) in steps {
            x += dx;
            xs.push(x);
            ys.push(y);
        }
        (xs, ys)
    })
}

fn all_schemes(xs: &[f64], ys: &[f64]) -> Vec<Box<dyn Interpolation1D>> {
    vec![
        Box::new(CubicSpline::new(xs, ys).unwrap()),
        Box::new(AkimaSpline::new(xs, ys, false).unwrap()),
        Box::new(AkimaSpline::new(xs, ys, true).unwrap()),
        Box::new(HarmonicSpline::new(xs, ys, false).unwrap()),
        Box::new(HarmonicSpline::new(xs, ys, true).unwrap()),
    ]
}

proptest! {
    #[test]
    fn every_scheme_interpolates_its_knots((xs, ys) in knots()) {
        for s in all_schemes(&xs, &ys) {
            for (&x, &y) in xs.iter().zip(&ys) {
                prop_assert!((s.operator(x) - y).abs() < 1e-9, "{s:?} misses knot {x}");
            }
            prop_assert!(s.is_in_range(xs[0]));
            prop_assert!(!s.is_in_range(xs[xs.len() - 1] + 1.0));
        }
    }

    #[test]
    fn harmonic_spline_stays_within_monotone_data((xs, ys) in knots()) {
        let mut ys = ys;
        ys.sort_by(|a, b| a.total_cmp(b));
        ys.dedup();
        prop_assume!(ys.len() == xs.len());
        let s = HarmonicSpline::new(&xs, &ys, true).unwrap();
        let (lo, hi) = (xs[0], xs[xs.len() - 1]);
        for i in 0..=200 {
            let x = lo + (hi - lo) * i as f64 / 200.0;
            let v = s.operator(x);
            prop_assert!(v >= ys[0] - 1e-9 && v <= ys[ys.len() - 1] + 1e-9);
        }
    }
}
