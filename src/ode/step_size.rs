//! Starting step size estimation.

use crate::norm::{norm, weighted_rms, NormKind};

/// Distance from `|x|` to the next representable value, the spacing of the
/// floating-point grid at `x`. `spacing(1.0)` is machine epsilon.
pub(crate) fn spacing(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    f64::from_bits(a.to_bits() + 1) - a
}

/// MATLAB ODE-suite starting step.
///
/// Returns `(h0, hmax)` where `hmax` is a tenth of the integration span.
/// The guess is consistent with the first local-error estimate at the cost
/// of a single derivative evaluation:
/// `rh = (|f0| / max(|y0|, threshold)) / (0.8 * rtol^(1/(p+1)))`, and the
/// span-bounded step is cut to `1/rh` whenever it exceeds that scale.
/// `threshold` is `abstol/reltol`.
#[allow(clippy::too_many_arguments)]
pub fn initial_step<F>(
    f: &F,
    t0: f64,
    y0: &[f64],
    params: &[f64],
    t_range: [f64; 2],
    threshold: f64,
    rtol: f64,
    p: usize,
) -> (f64, f64)
where
    F: Fn(f64, &[f64], &[f64]) -> Vec<f64>,
{
    let span = (t_range[1] - t_range[0]).abs();
    let hmax = span / 10.0;

    let d0 = norm(y0, NormKind::Euclidean);
    let f0 = f(t0, y0, params);
    let nf0 = norm(&f0, NormKind::Euclidean);

    let hmin = 16.0 * spacing(t0);
    let mut hh = hmax.min(span);
    let rh = (nf0 / d0.max(threshold)) / (0.8 * rtol.powf(1.0 / (p as f64 + 1.0)));

    if hh * rh > 1.0 {
        hh = 1.0 / rh;
    }

    (hh.max(hmin), hmax)
}

/// Hairer-Wanner starting step (Solving Ordinary Differential Equations I,
/// p. 169).
///
/// Scales `y0` and `f0` componentwise by `atol + rtol * |y0_i|`, forms a
/// first guess `0.01 * d0/d1`, probes one explicit Euler step to estimate
/// the second derivative, and returns `min(100 * h0, h1)`.
#[allow(clippy::too_many_arguments)]
pub fn initial_step_hairer<F>(
    f: &F,
    t0: f64,
    y0: &[f64],
    f0: &[f64],
    params: &[f64],
    p: usize,
    rtol: f64,
    atol: f64,
) -> f64
where
    F: Fn(f64, &[f64], &[f64]) -> Vec<f64>,
{
    let n = y0.len();

    let mut sc = vec![0.0; n];
    for i in 0..n {
        sc[i] = atol + rtol * y0[i].abs();
    }

    let d0 = weighted_rms(y0, &sc);
    let d1 = weighted_rms(f0, &sc);

    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    // Explicit Euler probe to estimate the second derivative.
    let y1: Vec<f64> = y0.iter().zip(f0).map(|(y, v)| y + h0 * v).collect();
    let f1 = f(t0 + h0, &y1, params);

    let df: Vec<f64> = f1.iter().zip(f0).map(|(a, b)| a - b).collect();
    let d2 = weighted_rms(&df, &sc) / h0;

    let h1 = if d1.max(d2) <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(1.0 / (p as f64 + 1.0))
    };

    (100.0 * h0).min(h1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing() {
        assert_eq!(spacing(1.0), f64::EPSILON);
        assert_eq!(spacing(-1.0), f64::EPSILON);
        assert!(spacing(0.0) > 0.0);
        assert!(spacing(1e10) > spacing(1.0));
        assert!(spacing(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_initial_step_bounds() {
        let f = |_t: f64, y: &[f64], _p: &[f64]| vec![-y[0]];
        let (h0, hmax) = initial_step(&f, 0.0, &[1.0], &[], [0.0, 2.0], 1e-3, 1e-3, 4);
        assert_eq!(hmax, 0.2);
        assert!(h0 > 0.0);
        assert!(h0 <= 2.0);
    }

    #[test]
    fn test_initial_step_cuts_fast_dynamics() {
        // A large derivative must shrink the first step below the span bound.
        let slow = |_t: f64, y: &[f64], _p: &[f64]| vec![-y[0]];
        let fast = |_t: f64, y: &[f64], _p: &[f64]| vec![-1e6 * y[0]];
        let (h_slow, _) = initial_step(&slow, 0.0, &[1.0], &[], [0.0, 2.0], 1e-3, 1e-3, 4);
        let (h_fast, _) = initial_step(&fast, 0.0, &[1.0], &[], [0.0, 2.0], 1e-3, 1e-3, 4);
        assert!(h_fast < h_slow);
        assert!(h_fast < 1e-4);
    }

    #[test]
    fn test_initial_step_hairer() {
        let f = |_t: f64, y: &[f64], _p: &[f64]| vec![-y[0]];
        let f0 = f(0.0, &[1.0], &[]);
        let h = initial_step_hairer(&f, 0.0, &[1.0], &f0, &[], 4, 1e-3, 1e-6);
        assert!(h.is_finite());
        assert!(h > 0.0);
        assert!(h < 1.0);
    }

    #[test]
    fn test_rules_agree_in_magnitude_on_smooth_problem() {
        // Both estimators should land within a decade of each other on a
        // well-scaled smooth problem.
        let f = |_t: f64, y: &[f64], _p: &[f64]| vec![-y[0]];
        let (h_suite, _) = initial_step(&f, 0.0, &[1.0], &[], [0.0, 2.0], 1e-3, 1e-3, 4);
        let f0 = f(0.0, &[1.0], &[]);
        let h_hairer = initial_step_hairer(&f, 0.0, &[1.0], &f0, &[], 4, 1e-3, 1e-6);
        assert!(h_hairer / h_suite < 10.0, "{} vs {}", h_hairer, h_suite);
        assert!(h_suite / h_hairer < 10.0, "{} vs {}", h_hairer, h_suite);
    }

    #[test]
    fn test_initial_step_hairer_flat_problem() {
        // Zero initial state and derivative falls back to the small-value
        // guess instead of dividing by zero.
        let f = |_t: f64, _y: &[f64], _p: &[f64]| vec![0.0];
        let f0 = vec![0.0];
        let h = initial_step_hairer(&f, 0.0, &[0.0], &f0, &[], 4, 1e-3, 1e-6);
        assert!(h.is_finite());
        assert!(h > 0.0);
    }
}
