//! Types for the adaptive solver.

use crate::tableau::Method;

/// How the starting step size is estimated when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialStep {
    /// MATLAB ODE-suite rule: one derivative evaluation at the starting
    /// point, bounded by a tenth of the span (default).
    #[default]
    MatlabSuite,
    /// Hairer-Wanner rule: an extra explicit Euler probe to estimate the
    /// second derivative. More function evaluations, sometimes a better
    /// first guess on rapidly varying problems.
    Hairer,
}

/// Options for the adaptive solver.
#[derive(Debug, Clone)]
pub struct OdeOptions {
    /// Embedded pair to step with (default: [`Method::Rk45`]).
    pub method: Method,

    /// Absolute tolerance (default: 1e-6).
    pub abstol: f64,

    /// Relative tolerance (default: 1e-3, must be nonzero).
    pub reltol: f64,

    /// Refine the final trajectory point onto the requested end time
    /// (default: true).
    pub interp: bool,

    /// Initial step size override (default: auto-computed).
    pub h0: Option<f64>,

    /// Starting-step estimation rule, used when `h0` is `None`.
    pub initial_step: InitialStep,

    /// Budget on accepted plus rejected steps (default: 10000).
    pub max_steps: usize,
}

impl Default for OdeOptions {
    fn default() -> Self {
        Self {
            method: Method::default(),
            abstol: 1e-6,
            reltol: 1e-3,
            interp: true,
            h0: None,
            initial_step: InitialStep::default(),
            max_steps: 10_000,
        }
    }
}

impl OdeOptions {
    /// Create options with specified tolerances.
    pub fn with_tolerances(abstol: f64, reltol: f64) -> Self {
        Self {
            abstol,
            reltol,
            ..Default::default()
        }
    }

    /// Create options with specified method.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Set the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the tolerances.
    pub fn tolerances(mut self, abstol: f64, reltol: f64) -> Self {
        self.abstol = abstol;
        self.reltol = reltol;
        self
    }

    /// Enable or disable endpoint refinement.
    pub fn interp(mut self, interp: bool) -> Self {
        self.interp = interp;
        self
    }

    /// Set the initial step size.
    pub fn initial_step_size(mut self, h0: f64) -> Self {
        self.h0 = Some(h0);
        self
    }

    /// Select the starting-step estimation rule.
    pub fn initial_step(mut self, rule: InitialStep) -> Self {
        self.initial_step = rule;
        self
    }

    /// Set the step budget.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}

/// Integration statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Number of accepted steps, counting the initial point.
    pub total_steps: usize,
    /// Number of rejected step attempts.
    pub failed_steps: usize,
    /// Absolute tolerance the run used.
    pub abstol: f64,
    /// Relative tolerance the run used.
    pub reltol: f64,
}

/// The accepted trajectory and its statistics.
///
/// `y[i]` and `yhat[i]` are the two embedded estimates at `t[i]`; `y` is the
/// series advanced with the primary weights. With endpoint refinement
/// enabled the last entry lands exactly on the requested end time, otherwise
/// it overshoots by up to one step.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeSolution {
    /// Time grid, in acceptance order.
    pub t: Vec<f64>,
    /// Primary solution estimates, one row per grid point.
    pub y: Vec<Vec<f64>>,
    /// Secondary (embedded) estimates, one row per grid point.
    pub yhat: Vec<Vec<f64>>,
    /// Step counts and tolerances.
    pub stats: Stats,
}
