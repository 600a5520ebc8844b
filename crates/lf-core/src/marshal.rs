//! Marshaling primitives for the external logistic routine
//!
//! The routine follows a 1-indexed array convention: each matrix and vector
//! is allocated one slot larger than its logical size and the payload starts
//! at index 1. These builders produce exactly that layout from any
//! [`ExampleSet`]. They never validate values; statistical checks are the
//! routine's job.

use crate::data::{ExampleSet, Matrix, Vector};

#[cfg(test)]
mod tests;

/// Build the (N+1) x (K+1) design matrix for N examples and K attributes.
///
/// `out[[i, j]]` holds attribute `j-1` of example `i-1`. Row 0 and column 0
/// are zero padding the routine never reads. Column 0 is not an intercept
/// column; the routine supplies the intercept itself.
pub fn design_matrix<E: ExampleSet + ?Sized>(examples: &E) -> Matrix {
    let n = examples.n_examples();
    let k = examples.n_attributes();
    let mut out = Matrix::zeros((n + 1, k + 1));

    for i in 1..=n {
        for j in 1..=k {
            out[[i, j]] = examples.attribute_value(i - 1, j - 1);
        }
    }

    out
}

/// Build the length N+1 response vector.
///
/// `out[i]` is the class value of example `i-1`; index 0 is zero padding.
pub fn response_vector<E: ExampleSet + ?Sized>(examples: &E) -> Vector {
    let n = examples.n_examples();
    let mut out = Vector::zeros(n + 1);

    for i in 1..=n {
        out[i] = examples.class_value(i - 1);
    }

    out
}

/// Build the length N+1 trials vector for the binary-outcome case.
///
/// Every entry is 1.0, the padding slot at index 0 included.
pub fn unit_trials(n_examples: usize) -> Vector {
    Vector::ones(n_examples + 1)
}
