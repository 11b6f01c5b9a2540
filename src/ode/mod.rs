//! Adaptive integration of initial value problems.
//!
//! The solver steps the system dy/dt = f(t, y, params) from one end of the
//! requested interval to the other with an embedded Runge-Kutta pair. Each
//! step produces two candidate states from one shared stage set; their
//! scaled discrepancy drives an accept/shrink/grow feedback loop on the
//! step size.
//!
//! # Example
//!
//! ```
//! use rkpair::{rk_explicit, OdeOptions};
//!
//! // dy/dt = -y, y(0) = 1. Exact solution: y(t) = exp(-t).
//! let solution = rk_explicit(
//!     |_t, y: &[f64], _p: &[f64]| vec![-y[0]],
//!     [0.0, 5.0],
//!     &[1.0],
//!     &[],
//!     &OdeOptions::default(),
//! )
//! .unwrap();
//!
//! let y_final = solution.y.last().unwrap()[0];
//! assert!((y_final - (-5.0_f64).exp()).abs() < 1e-3);
//! ```

mod controller;
mod stages;
mod step_size;
mod types;

pub use controller::{error_estimate, grow_step, shrink_step};
pub use stages::{advance, stage_derivatives};
pub use step_size::{initial_step, initial_step_hairer};
pub use types::{InitialStep, OdeOptions, OdeSolution, Stats};

use crate::error::{OdeError, OdeResult};
use crate::interpolate::refine_endpoint;
use crate::ode::step_size::spacing;

/// Integrate an initial value problem over `t_range`.
///
/// # Arguments
///
/// * `f` - Right-hand side `f(t, y, params) -> dy/dt`. Must be pure: called
///   repeatedly with identical arguments it must return identical results.
/// * `t_range` - `[t_start, t_end]`. `t_start > t_end` integrates backward.
/// * `y_init` - Initial state, length fixes the problem dimension.
/// * `params` - Parameter vector passed through to `f` untouched.
/// * `options` - Method, tolerances, endpoint refinement, step budget.
///
/// # Errors
///
/// * [`OdeError::ConfigurationError`] when `reltol` is zero, before the
///   right-hand side is ever evaluated.
/// * [`OdeError::ToleranceNotAchievable`] when a step pinned at the minimum
///   admissible size still fails the error test.
/// * [`OdeError::MaxStepsExceeded`] when the step budget runs out.
pub fn rk_explicit<F>(
    f: F,
    t_range: [f64; 2],
    y_init: &[f64],
    params: &[f64],
    options: &OdeOptions,
) -> OdeResult<OdeSolution>
where
    F: Fn(f64, &[f64], &[f64]) -> Vec<f64>,
{
    if options.reltol == 0.0 {
        return Err(OdeError::ConfigurationError {
            message: "relative tolerance cannot be zero".to_string(),
        });
    }

    if y_init.is_empty() {
        return Err(OdeError::ConfigurationError {
            message: "initial condition cannot be empty".to_string(),
        });
    }

    let atol = options.abstol.abs();
    let rtol = options.reltol.abs();
    let threshold = atol / rtol;

    let [t_start, t_end] = t_range;
    let tableau = options.method.tableau();
    let p = tableau.order;
    let tdir = if t_end >= t_start { 1.0 } else { -1.0 };

    let mut t = t_start;
    let mut ya = y_init.to_vec();

    let mut tsol = vec![t];
    let mut ysol = vec![ya.clone()];
    let mut yhatsol = vec![ya.clone()];

    let (mut hh, hmax) = match options.initial_step {
        InitialStep::MatlabSuite => {
            initial_step(&f, t, &ya, params, t_range, threshold, rtol, p)
        }
        InitialStep::Hairer => {
            let f0 = f(t, &ya, params);
            let h0 = initial_step_hairer(&f, t, &ya, &f0, params, p, rtol, atol);
            (h0, (t_end - t_start).abs() / 10.0)
        }
    };
    if let Some(h0) = options.h0 {
        hh = h0.abs();
    }

    let mut total_steps: usize = 1;
    let mut failed_steps: usize = 0;

    // Loop until the accumulated time passes t_end along the direction of
    // integration; the final accepted point overshoots by up to one step.
    while tdir * (t - t_end) <= 0.0 {
        if total_steps + failed_steps >= options.max_steps {
            return Err(OdeError::MaxStepsExceeded {
                steps: options.max_steps,
                t,
            });
        }

        // The step floor tracks the floating-point grid at the current time.
        let hmin = 16.0 * spacing(t);
        hh = hmax.min(hmin.max(hh));
        let mut h = tdir * hh;

        let mut no_failed = true;

        // Attempt/retry cycle: a fresh stage set per attempt, both
        // candidates from the same stages.
        let (err, y, yhat) = loop {
            let k = stage_derivatives(&f, t, &ya, params, h, &tableau);
            let (_, y) = advance(t, &ya, h, &k, &tableau.b);
            let (_, yhat) = advance(t, &ya, h, &k, &tableau.bhat);

            let (err, _sc) = error_estimate(&ya, &y, &yhat, atol, rtol);

            if err > rtol {
                failed_steps += 1;
                if hh <= hmin {
                    return Err(OdeError::ToleranceNotAchievable { t, h: hh });
                }
                no_failed = false;
                hh = shrink_step(hh, hmin, err, p);
                h = tdir * hh;
                continue;
            }
            break (err, y, yhat);
        };

        // A step that needed a retry keeps its shrunken size for the next
        // iteration instead of growing.
        if no_failed {
            hh = grow_step(hh, err, rtol, p);
        }

        total_steps += 1;
        t += h;
        tsol.push(t);
        ysol.push(y.clone());
        yhatsol.push(yhat);
        ya = y;
    }

    let mut solution = OdeSolution {
        t: tsol,
        y: ysol,
        yhat: yhatsol,
        stats: Stats {
            total_steps,
            failed_steps,
            abstol: atol,
            reltol: rtol,
        },
    };

    if options.interp {
        refine_endpoint(&mut solution, t_end)?;
    }

    Ok(solution)
}
