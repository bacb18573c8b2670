//! Error types for numeric operations.

use thiserror::Error;

/// Result type for numeric routines.
pub type NumResult<T> = Result<T, NumError>;

/// Errors that can occur in quadrature, root finding, or special functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumError {
    /// Integration interval is not usable (non-finite endpoint).
    #[error("Invalid interval: {what}")]
    InvalidInterval { what: &'static str },

    /// Root bracket is not usable (non-finite or degenerate endpoints).
    #[error("Invalid bracket: {what}")]
    InvalidBracket { what: &'static str },

    /// The bracketed function does not change sign, so no root is guaranteed.
    #[error("No root in bracket [{lo}, {hi}]")]
    NoRootInBracket { lo: f64, hi: f64 },

    /// Input outside the mathematical domain of a special function.
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Caller-supplied function failed or produced a non-finite value.
    #[error("Evaluation failed: {what}")]
    Evaluation { what: String },

    /// Tolerance not met within the iteration/subdivision budget.
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },
}
