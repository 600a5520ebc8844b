//! Core data structures for LogitFit
//!
//! This module provides the example-set carrier consumed by the marshaling
//! layer: a narrow read contract over classified examples, plus an owned
//! batch type for assembling them by hand or in tests.

mod batch;
mod examples;

#[cfg(test)]
mod tests;

// Re-exports
pub use batch::{ExampleBatch, ExampleBatchBuilder};
pub use examples::ExampleSet;

// Type aliases for common use cases
pub type Vector = ndarray::Array1<f64>;
pub type Matrix = ndarray::Array2<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Duplicate attribute name: {0}")]
    DuplicateAttribute(String),

    #[error("Example batch has no class values")]
    MissingClasses,
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
