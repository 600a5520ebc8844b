//! The seam to the external minimization routine

use super::bundle::{FitOutput, FitRequest};

/// Interface to the logistic minimization routine
///
/// The routine reads the request, writes every output field in place, and
/// reports failure only through `output.error`. It owns all numeric policy,
/// iteration limits and tolerances included. Implementations must tolerate
/// being called from multiple threads as long as each call gets its own
/// output bundle.
pub trait LogisticRoutine: Send + Sync {
    /// Run one fit, mutating `output` in place
    fn fit(&self, request: &FitRequest, output: &mut FitOutput);
}
