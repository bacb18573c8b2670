//! Cosmology errors.

use cf_core::CfError;
use cf_num::NumError;
use thiserror::Error;

/// Result type for cosmology operations.
pub type FlrwResult<T> = Result<T, FlrwError>;

/// Errors that can occur during cosmological calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlrwError {
    /// Invalid or inconsistent constructor parameters.
    #[error("Invalid cosmology configuration: {what}")]
    Configuration { what: String },

    /// Redshift at or below -1, or non-finite (undefined scale factor).
    #[error("Redshift {z} outside the allowed domain (finite, > -1)")]
    Domain { z: f64 },

    /// Parameter combination produced an unphysical value at evaluation
    /// time (e.g. a negative E^2 radicand).
    #[error("Physically invalid domain: {what}")]
    PhysicalDomain { what: String },

    /// Quadrature or iteration failed to meet tolerance within budget.
    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    /// Inverse lookup found no solution in the searched bracket.
    #[error("No solution: {what}")]
    NoSolution { what: String },
}

impl From<NumError> for FlrwError {
    fn from(err: NumError) -> Self {
        match err {
            NumError::ConvergenceFailed { what } => FlrwError::Convergence { what },
            NumError::NoRootInBracket { lo, hi } => FlrwError::NoSolution {
                what: format!("no root bracketed in [{lo}, {hi}]"),
            },
            NumError::Evaluation { what } => FlrwError::PhysicalDomain { what },
            NumError::Domain { what } => FlrwError::PhysicalDomain { what: what.into() },
            NumError::InvalidInterval { what } | NumError::InvalidBracket { what } => {
                FlrwError::Configuration { what: what.into() }
            }
        }
    }
}

impl From<FlrwError> for CfError {
    fn from(err: FlrwError) -> Self {
        // Convert to CfError while preserving context
        match err {
            FlrwError::Configuration { what } => CfError::InvalidArg {
                what: Box::leak(format!("cosmology configuration: {}", what).into_boxed_str()),
            },
            FlrwError::Domain { z } => CfError::InvalidArg {
                what: Box::leak(format!("redshift out of domain: {}", z).into_boxed_str()),
            },
            FlrwError::PhysicalDomain { what } => CfError::Invariant {
                what: Box::leak(format!("unphysical domain: {}", what).into_boxed_str()),
            },
            FlrwError::Convergence { what } => CfError::Invariant {
                what: Box::leak(format!("convergence failed: {}", what).into_boxed_str()),
            },
            FlrwError::NoSolution { what } => CfError::InvalidArg {
                what: Box::leak(format!("no solution: {}", what).into_boxed_str()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlrwError::Domain { z: -1.5 };
        assert!(err.to_string().contains("-1.5"));

        let err = FlrwError::Configuration {
            what: "H0 must be positive".into(),
        };
        assert!(err.to_string().contains("H0"));
    }

    #[test]
    fn num_error_taxonomy_mapping() {
        let e: FlrwError = NumError::ConvergenceFailed {
            what: "budget".into(),
        }
        .into();
        assert!(matches!(e, FlrwError::Convergence { .. }));

        let e: FlrwError = NumError::NoRootInBracket { lo: 0.0, hi: 1.0 }.into();
        assert!(matches!(e, FlrwError::NoSolution { .. }));

        let e: FlrwError = NumError::Evaluation {
            what: "negative radicand".into(),
        }
        .into();
        assert!(matches!(e, FlrwError::PhysicalDomain { .. }));
    }

    #[test]
    fn error_to_cf_error() {
        let flrw_err = FlrwError::PhysicalDomain {
            what: "E^2 < 0".into(),
        };
        let cf_err: CfError = flrw_err.into();
        assert!(matches!(cf_err, CfError::Invariant { .. }));
    }
}
