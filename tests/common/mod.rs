//! Shared right-hand-side fixtures for the integration tests.
//!
//! Each function follows the solver's callback contract
//! `f(t, y, params) -> dy/dt`, with a companion returning the standard
//! `(t_range, y_init, params)` setup for that problem.

/// dy/dt = p0 * exp(p1 * t) - p2 * y.
///
/// With the standard setup the closed-form solution is
/// `y(t) = (p0 / (p1 + p2)) * (exp(p1 t) - exp(-p2 t)) + y0 * exp(-p2 t)`.
pub fn forced_exponential(t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    vec![p[0] * (p[1] * t).exp() - p[2] * y[0]]
}

pub fn forced_exponential_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 2.0], vec![2.0], vec![4.0, 0.8, 0.5])
}

/// Exact solution of [`forced_exponential`] for the standard setup.
pub fn forced_exponential_exact(t: f64) -> f64 {
    let (_, y_init, p) = forced_exponential_setup();
    let a = p[0] / (p[1] + p[2]);
    a * (p[1] * t).exp() + (y_init[0] - a) * (-p[2] * t).exp()
}

/// Van der Pol oscillator: y1' = y2, y2' = p0 (1 - y1^2) y2 - y1.
pub fn van_der_pol(_t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    vec![y[1], p[0] * (1.0 - y[0] * y[0]) * y[1] - y[0]]
}

pub fn van_der_pol_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 20.0], vec![2.0, 0.0], vec![1.0])
}

/// Brusselator: y1' = p0 + p1 y2 y1^2 - p2 y1, y2' = p3 y1 - p4 y2 y1^2.
pub fn brusselator(_t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    vec![
        p[0] + p[1] * y[1] * y[0] * y[0] - p[2] * y[0],
        p[3] * y[0] - p[4] * y[1] * y[0] * y[0],
    ]
}

pub fn brusselator_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 20.0], vec![1.5, 3.0], vec![1.0, 1.0, 4.0, 3.0, 1.0])
}

/// Lorenz system.
pub fn lorenz(_t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    vec![
        p[0] * (y[1] - y[0]),
        y[0] * (p[1] - y[2]) - y[1],
        y[0] * y[1] - p[2] * y[2],
    ]
}

pub fn lorenz_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 10.0], vec![0.4, -0.7, 21.0], vec![10.0, 28.0, 8.0 / 3.0])
}

/// Piecewise derivative: constant growth until `t = p0`, then decay at rate
/// `p2`. The jump at the switch makes the embedded estimates disagree on
/// any step straddling it, which forces rejections under tight tolerances.
pub fn step_decay(t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    if t < p[0] {
        vec![p[1]]
    } else {
        vec![-p[2] * y[0]]
    }
}

pub fn step_decay_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 4.0], vec![1.0], vec![2.0, 1.0, 3.0])
}

/// Forced oscillator with Coulomb dry friction, discontinuous in y2.
/// Hairer, Norsett, Wanner (1993), p. 198, Eqs. (6.27) and (6.28).
pub fn coulomb(t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    let friction = if y[1] > 0.0 { 4.0 } else { -4.0 };
    vec![
        p[0] * y[1],
        p[1] * y[1] - p[2] * y[0] + p[3] * (std::f64::consts::PI * t).cos() - friction,
    ]
}

pub fn coulomb_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([0.0, 10.0], vec![3.0, 4.0], vec![1.0, -0.2, 1.0, 2.0])
}

/// Biochemical oscillator with a saturating production term:
/// y1' = (p0 + p1 y1^2) / (1 + y1^2 + p3 y2) - y1, y2' = p5 (p2 y1 + p4 - y2).
pub fn biochemical_oscillator(_t: f64, y: &[f64], p: &[f64]) -> Vec<f64> {
    vec![
        (p[0] + p[1] * y[0] * y[0]) / (1.0 + y[0] * y[0] + p[3] * y[1]) - y[0],
        p[5] * (p[2] * y[0] + p[4] - y[1]),
    ]
}

pub fn biochemical_oscillator_setup() -> ([f64; 2], Vec<f64>, Vec<f64>) {
    ([1.0, 100.0], vec![1.0, 1.0], vec![1.0, 5.0, 4.0, 1.0, 0.0, 0.1])
}
