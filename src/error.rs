//! Error types shared by all calculation engines

use thiserror::Error;

/// Specialized Result type for calculation functions
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors reported by the calculation engines
///
/// Every failure is returned to the caller as a typed value; the core never
/// substitutes a default result for an invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An input parameter is outside the function's domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Iterative search exhausted its budget without locating a root
    #[error("no convergence after {iterations} iterations (residual {residual:.2e})")]
    NoConvergence {
        /// Iterations attempted before giving up
        iterations: u32,
        /// NPV residual at the best candidate rate
        residual: f64,
    },

    /// Input too small or empty for the computation to be well-defined
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// Description of the degenerate shape
        reason: String,
    },
}

impl CalcError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create a no-convergence error
    pub fn no_convergence(iterations: u32, residual: f64) -> Self {
        Self::NoConvergence {
            iterations,
            residual,
        }
    }

    /// Create a degenerate input error
    pub fn degenerate_input(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}
