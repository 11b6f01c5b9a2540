//! Error types for the ODE solvers.

use std::fmt;

/// Result type for solver operations.
pub type OdeResult<T> = Result<T, OdeError>;

/// Errors that can occur while setting up or running an integration.
#[derive(Debug, Clone, PartialEq)]
pub enum OdeError {
    /// Invalid static configuration, detected before any stepping.
    ConfigurationError { message: String },

    /// Method name outside the supported set.
    UnknownMethod { name: String },

    /// The adaptive loop cannot meet the tolerance even at the minimum
    /// admissible step size.
    ToleranceNotAchievable { t: f64, h: f64 },

    /// Endpoint refinement needs at least three accepted points.
    InsufficientHistory { points: usize },

    /// Step budget exhausted before reaching the end of the interval.
    MaxStepsExceeded { steps: usize, t: f64 },
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationError { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            Self::UnknownMethod { name } => {
                write!(
                    f,
                    "Unknown method '{}'. Available methods are: 'cash-karp', 'rkv56', \
                     'rkf45', 'rkf78', 'rk78', 'rk45', and 'default'",
                    name
                )
            }
            Self::ToleranceNotAchievable { t, h } => {
                write!(
                    f,
                    "Integration tolerance not met at t = {:.6} (step size {:.2e})",
                    t, h
                )
            }
            Self::InsufficientHistory { points } => {
                write!(
                    f,
                    "Endpoint refinement requires at least 3 accepted points, got {}",
                    points
                )
            }
            Self::MaxStepsExceeded { steps, t } => {
                write!(f, "Exceeded maximum {} steps at t = {:.6}", steps, t)
            }
        }
    }
}

impl std::error::Error for OdeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OdeError::ConfigurationError {
            message: "relative tolerance cannot be zero".to_string(),
        };
        assert!(err.to_string().contains("relative tolerance"));

        let err = OdeError::UnknownMethod {
            name: "rk99".to_string(),
        };
        assert!(err.to_string().contains("rk99"));
        assert!(err.to_string().contains("cash-karp"));

        let err = OdeError::ToleranceNotAchievable { t: 0.5, h: 1e-16 };
        assert!(err.to_string().contains("tolerance not met"));

        let err = OdeError::InsufficientHistory { points: 2 };
        assert!(err.to_string().contains("2"));
    }
}
