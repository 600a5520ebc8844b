//! Logistic regression marshaling for an external minimization routine
//!
//! `lf-models` wraps an opaque logistic minimization routine: it assembles
//! the 1-indexed input bundle the routine expects, hands it a zeroed output
//! bundle to mutate, interprets the diagnostic code it reports, and
//! translates the raw arrays into an owned [`logit::LogisticFit`]. The
//! routine itself stays behind the [`logit::LogisticRoutine`] trait.

pub mod base;
pub mod error;
pub mod logit;

pub use base::{Coefficient, FitStatistics, ModelSummary, Result};
pub use error::FitError;
pub use logit::{FitOutput, FitRequest, LogisticFit, LogisticFitter, LogisticRoutine, fit_logistic};
