//! Adaptive explicit Runge-Kutta integrators with embedded error
//! estimation.
//!
//! Solves initial value problems dy/dt = f(t, y, params), y(t0) = y0 with
//! one of six embedded pairs, controlling the local error per step and
//! refining the final point onto the requested end time.
//!
//! # Available Methods
//!
//! | Method     | Pair | Stages | Use Case |
//! |------------|------|--------|----------|
//! | `CashKarp` | 4(5) | 6      | General purpose |
//! | `Rkf45`    | 4(5) | 6      | Classic Fehlberg pair |
//! | `Rk45`     | 4(5) | 7      | Dormand-Prince (default, recommended) |
//! | `Rkv56`    | 5(6) | 9      | Moderate accuracy gains |
//! | `Rk78`     | 7(8) | 13     | High accuracy, smooth problems |
//! | `Rkf78`    | 7(8) | 13     | High accuracy, smooth problems |
//!
//! # Usage
//!
//! [`rk_explicit`] is the entry point. The right-hand side takes the time,
//! the state, and a parameter vector, and returns the derivative:
//!
//! ```
//! use rkpair::{rk_explicit, OdeOptions};
//!
//! // Forced exponential: dy/dt = p0 * exp(p1 * t) - p2 * y
//! let solution = rk_explicit(
//!     |t, y: &[f64], p: &[f64]| vec![p[0] * (p[1] * t).exp() - p[2] * y[0]],
//!     [0.0, 2.0],
//!     &[2.0],
//!     &[4.0, 0.8, 0.5],
//!     &OdeOptions::default(),
//! )
//! .unwrap();
//!
//! // The trajectory ends exactly at t = 2 by default.
//! assert!((solution.t.last().unwrap() - 2.0).abs() < 1e-9);
//! ```
//!
//! Integration runs backward when `t_range` is decreasing. Failed step
//! attempts are not errors; they are counted in [`Stats`] and retried with
//! a smaller step.

pub mod error;
pub mod interpolate;
pub mod norm;
pub mod ode;
pub mod tableau;

pub use error::{OdeError, OdeResult};
pub use norm::{norm, weighted_rms, NormKind};
pub use ode::{rk_explicit, InitialStep, OdeOptions, OdeSolution, Stats};
pub use tableau::{Method, Tableau};
