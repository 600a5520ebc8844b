//! Statistical structures for fit results

use serde::{Deserialize, Serialize};

/// Fit statistics reported by the routine
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitStatistics {
    /// Goodness-of-fit chi-squared statistic
    pub chi_squared: f64,
    /// Upper-tail chi-squared p-value, absent when df is not positive
    pub chi_squared_p_value: Option<f64>,
    /// Deviance
    pub deviance: f64,
    /// Negated deviance, reported as the likelihood
    pub likelihood: f64,
    /// Degrees of freedom; negative when examples are too few
    pub df: i32,
    /// Convergence status
    pub converged: bool,
}
