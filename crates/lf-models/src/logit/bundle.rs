//! Input and output bundles for the external routine
//!
//! Both bundles own their storage outright. All arrays follow the routine's
//! 1-indexed convention: one slot larger than the logical size, payload
//! starting at index 1.

use lf_core::data::{ExampleSet, Matrix, Vector};
use lf_core::marshal::{design_matrix, response_vector, unit_trials};

/// Owned input bundle for one fit
#[derive(Debug, Clone)]
pub struct FitRequest {
    /// Number of examples N
    pub n_examples: usize,
    /// Number of attributes K
    pub n_attributes: usize,
    /// (N+1) x (K+1) design matrix, row 0 and column 0 zero padding
    pub design: Matrix,
    /// Length N+1 response vector, index 0 zero padding
    pub response: Vector,
    /// Length N+1 trials vector, every entry 1.0
    pub trials: Vector,
    /// Attribute names in design order, for reporting
    pub attribute_names: Vec<String>,
}

impl FitRequest {
    /// Assemble a request from an example set
    pub fn from_examples<E: ExampleSet + ?Sized>(examples: &E) -> Self {
        Self {
            n_examples: examples.n_examples(),
            n_attributes: examples.n_attributes(),
            design: design_matrix(examples),
            response: response_vector(examples),
            trials: unit_trials(examples.n_examples()),
            attribute_names: examples.attribute_names(),
        }
    }
}

/// Owned output bundle the routine writes in place
///
/// Starts fully zeroed; the routine is the only writer. Unlike the request
/// padding, `covariance` row 0 and column 0 carry the intercept terms.
#[derive(Debug, Clone)]
pub struct FitOutput {
    /// Diagnostic code, 0 on success
    pub error: i32,
    /// Goodness-of-fit chi-squared statistic
    pub chi_squared: f64,
    /// Deviance
    pub deviance: f64,
    /// Degrees of freedom; negative when there are too few examples
    pub df: i32,
    /// Coefficients, length K+1, index 0 is the intercept
    pub beta: Vector,
    /// Standard errors, length K+1, aligned with beta
    pub se_beta: Vector,
    /// Fitted success probabilities, length N+1, index 0 padding
    pub fitted: Vector,
    /// Coefficient covariance, (K+1) x (K+1)
    pub covariance: Matrix,
    /// Standardized residuals, length N+1, index 0 padding
    pub residuals: Vector,
    /// Collinearity flags per coefficient, length K+1
    pub dependent: Vec<i32>,
}

impl FitOutput {
    /// Allocate a zero-initialized bundle for N examples and K attributes
    pub fn sized(n_examples: usize, n_attributes: usize) -> Self {
        let n = n_examples;
        let k = n_attributes;

        Self {
            error: 0,
            chi_squared: 0.0,
            deviance: 0.0,
            df: 0,
            beta: Vector::zeros(k + 1),
            se_beta: Vector::zeros(k + 1),
            fitted: Vector::zeros(n + 1),
            covariance: Matrix::zeros((k + 1, k + 1)),
            residuals: Vector::zeros(n + 1),
            dependent: vec![0; k + 1],
        }
    }
}
