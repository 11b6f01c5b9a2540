//! Butcher tableaux for the built-in embedded Runge-Kutta pairs.
//!
//! Each method is a fixed table of coefficients `(c, A, b, bhat)` plus the
//! order of the advancing solution. The tables are pure data: built once per
//! lookup and never mutated.

mod cash_karp;
mod dormand_prince45;
mod dormand_prince78;
mod fehlberg45;
mod fehlberg78;
mod verner56;

use std::str::FromStr;

use crate::error::OdeError;

/// An embedded Runge-Kutta pair.
///
/// `a` is strictly lower triangular (`a[i][j] = 0` for `j >= i`), `c` holds
/// the abscissae with `c[0] = 0`, and `b`/`bhat` are the two weight vectors
/// sharing the same stage set. `order` is the order of the solution advanced
/// with `b`, which also drives the step-size exponents.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub stages: usize,
    pub c: Vec<f64>,
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub bhat: Vec<f64>,
    pub order: usize,
}

/// The supported embedded pairs.
///
/// | Method     | Pair | Stages |
/// |------------|------|--------|
/// | `CashKarp` | 4(5) | 6      |
/// | `Rkv56`    | 5(6) | 9      |
/// | `Rk45`     | 4(5) | 7      |
/// | `Rk78`     | 7(8) | 13     |
/// | `Rkf45`    | 4(5) | 6      |
/// | `Rkf78`    | 7(8) | 13     |
///
/// `Rk45` (Dormand-Prince) is the default and the right choice for most
/// non-stiff problems. The 7(8) pairs pay more per step but take far fewer
/// steps on smooth problems at tight tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Cash-Karp 4(5), 6 stages.
    CashKarp,
    /// Verner 5(6), 9 stages.
    Rkv56,
    /// Dormand-Prince 4(5), 7 stages (default).
    #[default]
    Rk45,
    /// Dormand-Prince 7(8), 13 stages.
    Rk78,
    /// Fehlberg 4(5), 6 stages.
    Rkf45,
    /// Fehlberg 7(8), 13 stages.
    Rkf78,
}

impl Method {
    /// Build the coefficient table for this method.
    pub fn tableau(self) -> Tableau {
        match self {
            Self::CashKarp => cash_karp::tableau(),
            Self::Rkv56 => verner56::tableau(),
            Self::Rk45 => dormand_prince45::tableau(),
            Self::Rk78 => dormand_prince78::tableau(),
            Self::Rkf45 => fehlberg45::tableau(),
            Self::Rkf78 => fehlberg78::tableau(),
        }
    }

    /// Order of the advancing solution.
    pub fn order(self) -> usize {
        match self {
            Self::CashKarp | Self::Rk45 | Self::Rkf45 => 4,
            Self::Rkv56 => 5,
            Self::Rk78 | Self::Rkf78 => 7,
        }
    }

    /// Canonical lowercase name, as accepted by [`Method::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::CashKarp => "cash-karp",
            Self::Rkv56 => "rkv56",
            Self::Rk45 => "rk45",
            Self::Rk78 => "rk78",
            Self::Rkf45 => "rkf45",
            Self::Rkf78 => "rkf78",
        }
    }
}

impl FromStr for Method {
    type Err = OdeError;

    /// Case-insensitive lookup by the historical name set.
    ///
    /// `"default"` is an alias for `"rk45"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash-karp" => Ok(Self::CashKarp),
            "rkv56" => Ok(Self::Rkv56),
            "default" | "rk45" => Ok(Self::Rk45),
            "rk78" => Ok(Self::Rk78),
            "rkf45" => Ok(Self::Rkf45),
            "rkf78" => Ok(Self::Rkf78),
            _ => Err(OdeError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}
