//! Fit-related error types
//!
//! The external routine reports failure through a single integer diagnostic
//! code. Each code gets its own variant here, with the routine's fixed
//! message preserved verbatim. Code 7 is special: it is a warning rather
//! than an error, and the fitter still returns a result for it.

use thiserror::Error;

use lf_core::data::DataError;

/// Fit-related errors
#[derive(Debug, Error)]
pub enum FitError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Code 1: too few examples for the number of attributes
    #[error("LogisticFitter: ngroups < 2, ndf < 0 -- not enough examples with so many attributes")]
    DataInsufficient,

    /// Code 2: a trials count is negative
    #[error("LogisticFitter: n[i]<0")]
    NegativeTrials,

    /// Code 3: a success count is negative
    #[error("LogisticFitter: r[i]<0")]
    NegativeSuccesses,

    /// Code 4: a success count exceeds its trials count
    #[error("LogisticFitter: r[i]>n[i]")]
    SuccessExceedsTrials,

    /// Code 5: an attribute column is constant
    #[error("LogisticFitter: constant variable")]
    ConstantAttribute,

    /// Code 6: the iteration hit a singular system
    #[error("LogisticFitter: singularity")]
    Singularity,

    /// Code 7: iteration limit reached; the coefficients are still usable
    #[error("LogisticFitter: no convergence")]
    NoConvergence,

    /// Code 8: a coefficient diverged
    #[error("LogisticFitter: infinity in beta")]
    NonFiniteCoefficient,

    /// Any other nonzero code the routine reports
    #[error("LogisticFitter: unrecognized diagnostic code {0}")]
    UnknownDiagnostic(i32),
}

impl FitError {
    /// Map a routine diagnostic code to an error; 0 means success and maps
    /// to `None`
    pub fn from_code(code: i32) -> Option<FitError> {
        match code {
            0 => None,
            1 => Some(FitError::DataInsufficient),
            2 => Some(FitError::NegativeTrials),
            3 => Some(FitError::NegativeSuccesses),
            4 => Some(FitError::SuccessExceedsTrials),
            5 => Some(FitError::ConstantAttribute),
            6 => Some(FitError::Singularity),
            7 => Some(FitError::NoConvergence),
            8 => Some(FitError::NonFiniteCoefficient),
            other => Some(FitError::UnknownDiagnostic(other)),
        }
    }

    /// True for diagnostics that do not abort the fit
    pub fn is_warning(&self) -> bool {
        matches!(self, FitError::NoConvergence)
    }
}
