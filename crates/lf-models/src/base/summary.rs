//! Model summary structures

use super::coefficient::Coefficient;
use super::statistics::FitStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fit summary for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Number of examples
    pub n_examples: usize,
    /// Number of attributes
    pub n_attributes: usize,
    /// Coefficients table, intercept first
    pub coefficients: Vec<Coefficient>,
    /// Fit statistics
    pub statistics: FitStatistics,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logistic Fit Summary")?;
        writeln!(f, "====================")?;
        writeln!(f, "Examples: {}", self.n_examples)?;
        writeln!(f, "Attributes: {}", self.n_attributes)?;
        writeln!(f)?;

        // Coefficients
        writeln!(f, "Coefficients:")?;
        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "Term", "Estimate", "Std Error", "z-value", "p-value"
        )?;
        writeln!(
            f,
            "{:-<20} {:-<12} {:-<12} {:-<12} {:-<12}",
            "", "", "", "", ""
        )?;

        for coeff in &self.coefficients {
            writeln!(
                f,
                "{:<20} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                coeff.name,
                coeff.estimate,
                coeff.std_error.unwrap_or(f64::NAN),
                coeff.z_value.unwrap_or(f64::NAN),
                coeff.p_value.unwrap_or(f64::NAN)
            )?;
        }
        writeln!(f)?;

        // Fit statistics
        writeln!(f, "Fit Statistics:")?;
        writeln!(f, "  Chi-squared: {:.4}", self.statistics.chi_squared)?;
        if let Some(p) = self.statistics.chi_squared_p_value {
            writeln!(f, "  Chi-squared p-value: {:.4}", p)?;
        }
        writeln!(f, "  Deviance: {:.4}", self.statistics.deviance)?;
        writeln!(f, "  Likelihood: {:.4}", self.statistics.likelihood)?;
        writeln!(f, "  Degrees of freedom: {}", self.statistics.df)?;
        if !self.statistics.converged {
            writeln!(f, "  Note: the fit did not converge")?;
        }

        Ok(())
    }
}
