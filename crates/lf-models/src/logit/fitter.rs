//! Fit driver: assemble, invoke, interpret

use crate::base::{FitError, Result};
use lf_core::data::ExampleSet;

use super::bundle::{FitOutput, FitRequest};
use super::result::LogisticFit;
use super::routine::LogisticRoutine;

/// Drives the external routine through the marshal, invoke, translate cycle
#[derive(Debug, Clone)]
pub struct LogisticFitter<R> {
    routine: R,
}

impl<R: LogisticRoutine> LogisticFitter<R> {
    /// Create a fitter around a routine
    pub fn new(routine: R) -> Self {
        Self { routine }
    }

    /// Fit a logistic model to the examples
    ///
    /// A no-convergence diagnostic from the routine is logged as a warning
    /// and still yields a fit, with `converged` set to false. Every other
    /// nonzero diagnostic is an error carrying the routine's fixed message.
    pub fn fit<E: ExampleSet + ?Sized>(&self, examples: &E) -> Result<LogisticFit> {
        let request = FitRequest::from_examples(examples);
        let mut output = FitOutput::sized(request.n_examples, request.n_attributes);

        log::debug!(
            "logistic fit: {} examples, {} attributes",
            request.n_examples,
            request.n_attributes
        );

        self.routine.fit(&request, &mut output);

        match FitError::from_code(output.error) {
            None => Ok(LogisticFit::from_output(request, output, true)),
            Some(diag) if diag.is_warning() => {
                log::warn!("{}", diag);
                Ok(LogisticFit::from_output(request, output, false))
            }
            Some(err) => Err(err),
        }
    }
}
