//! Data carrier and marshaling primitives for LogitFit
//!
//! `lf-core` holds everything the fitting crate needs to talk to the
//! external logistic routine: the [`data::ExampleSet`] read contract with
//! its owned [`data::ExampleBatch`] carrier, and the [`marshal`] builders
//! that lay examples out in the routine's 1-indexed array convention.

pub mod data;
pub mod marshal;

pub use data::{DataError, ExampleBatch, ExampleBatchBuilder, ExampleSet, Matrix, Vector};
pub use marshal::{design_matrix, response_vector, unit_trials};
