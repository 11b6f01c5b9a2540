//! Polynomial interpolation over small point sets, and the endpoint
//! refinement pass that lands a trajectory exactly on the requested end
//! time.

use crate::error::{OdeError, OdeResult};
use crate::ode::OdeSolution;

/// Linear interpolation through two points.
pub fn linear(x: &[f64; 2], y: &[f64; 2], xp: f64) -> f64 {
    y[0] + (y[1] - y[0]) * (xp - x[0]) / (x[1] - x[0])
}

/// First-order Lagrange form. Algebraically identical to [`linear`].
pub fn lagrange1(x: &[f64; 2], y: &[f64; 2], xp: f64) -> f64 {
    (xp - x[1]) * y[0] / (x[0] - x[1]) + (xp - x[0]) * y[1] / (x[1] - x[0])
}

/// Quadratic through three points, Newton divided-difference form.
pub fn quadratic(x: &[f64; 3], y: &[f64; 3], xp: f64) -> f64 {
    let b0 = y[0];
    let b1 = (y[1] - y[0]) / (x[1] - x[0]);
    let tmp = (y[2] - y[1]) / (x[2] - x[1]);
    let b2 = (tmp - b1) / (x[2] - x[0]);
    b0 + b1 * (xp - x[0]) + b2 * (xp - x[0]) * (xp - x[1])
}

/// Second-order Lagrange form. Algebraically identical to [`quadratic`].
pub fn lagrange2(x: &[f64; 3], y: &[f64; 3], xp: f64) -> f64 {
    let a0 = (xp - x[1]) * (xp - x[2]) / ((x[0] - x[1]) * (x[0] - x[2]));
    let a1 = (xp - x[0]) * (xp - x[2]) / ((x[1] - x[0]) * (x[1] - x[2]));
    let a2 = (xp - x[0]) * (xp - x[1]) / ((x[2] - x[0]) * (x[2] - x[1]));
    a0 * y[0] + a1 * y[1] + a2 * y[2]
}

/// Rewrite the final trajectory entry so it lands exactly on `t_end`.
///
/// Fits a quadratic through the last three accepted points of each series,
/// componentwise, and evaluates it at `t_end`. The primary and secondary
/// series are refined independently.
///
/// # Errors
///
/// [`OdeError::InsufficientHistory`] when fewer than three points have been
/// accepted.
pub fn refine_endpoint(solution: &mut OdeSolution, t_end: f64) -> OdeResult<()> {
    let len = solution.t.len();
    if len < 3 {
        return Err(OdeError::InsufficientHistory { points: len });
    }

    let ts = [solution.t[len - 3], solution.t[len - 2], solution.t[len - 1]];
    let n = solution.y[len - 1].len();

    let mut y_end = Vec::with_capacity(n);
    let mut yhat_end = Vec::with_capacity(n);
    for i in 0..n {
        let ys = [
            solution.y[len - 3][i],
            solution.y[len - 2][i],
            solution.y[len - 1][i],
        ];
        let yhats = [
            solution.yhat[len - 3][i],
            solution.yhat[len - 2][i],
            solution.yhat[len - 1][i],
        ];
        y_end.push(quadratic(&ts, &ys, t_end));
        yhat_end.push(quadratic(&ts, &yhats, t_end));
    }

    solution.t[len - 1] = t_end;
    solution.y[len - 1] = y_end;
    solution.yhat[len - 1] = yhat_end;
    Ok(())
}
