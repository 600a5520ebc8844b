//! Core types for fit results
//!
//! This module defines the presentation structures shared by fit results
//! in LogitFit.

// Re-export core types
pub use coefficient::Coefficient;
pub use statistics::FitStatistics;
pub use summary::ModelSummary;

pub use crate::error::FitError;

pub mod coefficient;
pub mod statistics;
pub mod summary;

/// Result type for fit operations
pub type Result<T> = std::result::Result<T, FitError>;
