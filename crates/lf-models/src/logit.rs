//! Logistic regression via an external minimization routine
//!
//! This module marshals examples into the 1-indexed bundles the routine
//! expects, invokes it through the [`LogisticRoutine`] seam, and translates
//! the mutated output back into an owned [`LogisticFit`]. The routine owns
//! every numeric decision; nothing here retries or recovers on its behalf.

pub mod bundle;
pub mod fitter;
pub mod result;
pub mod routine;


// Re-exports
pub use bundle::{FitOutput, FitRequest};
pub use fitter::LogisticFitter;
pub use result::LogisticFit;
pub use routine::LogisticRoutine;

use crate::base::Result;
use lf_core::data::ExampleSet;

/// Convenience function for a one-off logistic fit
pub fn fit_logistic<R, E>(routine: R, examples: &E) -> Result<LogisticFit>
where
    R: LogisticRoutine,
    E: ExampleSet + ?Sized,
{
    LogisticFitter::new(routine).fit(examples)
}
