//! Owned fit results translated from the routine's output

use ndarray::s;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

use crate::base::{Coefficient, FitStatistics, ModelSummary};
use lf_core::data::{Matrix, Vector};

use super::bundle::{FitOutput, FitRequest};

/// Owned logistic fit
///
/// `coefficients[0]` is the intercept; `coefficients[j]` belongs to the
/// j-th attribute in `attribute_names`. `likelihood` is exactly the negated
/// deviance, a provisional stand-in kept for compatibility with downstream
/// consumers; it is not the true log-likelihood.
#[derive(Debug, Clone)]
pub struct LogisticFit {
    /// Coefficients, length K+1, intercept first
    pub coefficients: Vector,
    /// Standard errors, length K+1, aligned with coefficients
    pub standard_errors: Vector,
    /// Negated deviance, reported as the likelihood
    pub likelihood: f64,
    /// Coefficient covariance, (K+1) x (K+1)
    pub covariance: Matrix,
    /// Fitted success probabilities, length N, zero-based
    pub fitted: Vector,
    /// Standardized residuals, length N, zero-based
    pub residuals: Vector,
    /// Collinearity flags, length K+1, aligned with coefficients
    pub dependent: Vec<bool>,
    /// Attribute names in coefficient order, intercept excluded
    pub attribute_names: Vec<String>,
    /// Fit statistics
    pub statistics: FitStatistics,
    /// Number of examples
    pub n_examples: usize,
    /// Number of attributes
    pub n_attributes: usize,
}

impl LogisticFit {
    /// Translate a mutated output bundle into an owned result
    pub(crate) fn from_output(request: FitRequest, output: FitOutput, converged: bool) -> Self {
        let likelihood = -output.deviance;

        let statistics = FitStatistics {
            chi_squared: output.chi_squared,
            chi_squared_p_value: chi_squared_p_value(output.chi_squared, output.df),
            deviance: output.deviance,
            likelihood,
            df: output.df,
            converged,
        };

        Self {
            coefficients: output.beta,
            standard_errors: output.se_beta,
            likelihood,
            covariance: output.covariance,
            fitted: output.fitted.slice(s![1..]).to_owned(),
            residuals: output.residuals.slice(s![1..]).to_owned(),
            dependent: output.dependent.iter().map(|&flag| flag != 0).collect(),
            attribute_names: request.attribute_names,
            statistics,
            n_examples: request.n_examples,
            n_attributes: request.n_attributes,
        }
    }

    /// Create coefficient structs from the fitted arrays
    pub fn to_coefficients(&self) -> Vec<Coefficient> {
        let normal = Normal::new(0.0, 1.0).ok();

        self.coefficients
            .iter()
            .zip(self.standard_errors.iter())
            .enumerate()
            .map(|(i, (&estimate, &se))| {
                let name = if i == 0 {
                    "(Intercept)".to_string()
                } else if i - 1 < self.attribute_names.len() {
                    self.attribute_names[i - 1].clone()
                } else {
                    format!("x{}", i)
                };

                let z = estimate / se;
                let mut coefficient = Coefficient::new(name, estimate)
                    .with_std_error(se)
                    .with_z_value(z);

                if let Some(dist) = &normal {
                    let p = 2.0 * (1.0 - dist.cdf(z.abs()));
                    coefficient = coefficient.with_p_value(p.min(1.0).max(0.0));
                }

                if i == 0 {
                    coefficient = coefficient.as_intercept();
                }

                coefficient
            })
            .collect()
    }

    /// Build a presentation summary
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            n_examples: self.n_examples,
            n_attributes: self.n_attributes,
            coefficients: self.to_coefficients(),
            statistics: self.statistics,
        }
    }
}

/// Upper-tail chi-squared probability, absent when df is not positive
fn chi_squared_p_value(chi_squared: f64, df: i32) -> Option<f64> {
    if df <= 0 {
        return None;
    }

    ChiSquared::new(df as f64)
        .ok()
        .map(|dist| (1.0 - dist.cdf(chi_squared)).min(1.0).max(0.0))
}
