//! Tests for marshaling primitives

use super::*;
use crate::data::ExampleBatch;

fn toy_batch() -> ExampleBatch {
    ExampleBatch::builder()
        .with_attribute("a", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_attribute("b", vec![4.0, 5.0, 6.0])
        .unwrap()
        .classes(vec![0.0, 1.0, 0.0])
        .build()
        .unwrap()
}

// ==== Design matrix ====

#[test]
fn test_design_matrix_shape_and_padding() {
    let x = design_matrix(&toy_batch());

    assert_eq!(x.shape(), &[4, 3]);
    for j in 0..3 {
        assert_eq!(x[[0, j]], 0.0);
    }
    for i in 0..4 {
        assert_eq!(x[[i, 0]], 0.0);
    }
}

#[test]
fn test_design_matrix_values_shifted_by_one() {
    let x = design_matrix(&toy_batch());

    assert_eq!(x[[1, 1]], 1.0);
    assert_eq!(x[[1, 2]], 4.0);
    assert_eq!(x[[2, 1]], 2.0);
    assert_eq!(x[[3, 1]], 3.0);
    assert_eq!(x[[3, 2]], 6.0);
}

// ==== Response vector ====

#[test]
fn test_response_vector_shifted_by_one() {
    let y = response_vector(&toy_batch());

    assert_eq!(y.len(), 4);
    assert_eq!(y.to_vec(), vec![0.0, 0.0, 1.0, 0.0]);
}

// ==== Trials vector ====

#[test]
fn test_unit_trials_all_ones() {
    let t = unit_trials(3);

    assert_eq!(t.len(), 4);
    // the padding slot at index 0 is 1.0 too
    assert!(t.iter().all(|&v| v == 1.0));
}

// ==== Edge cases ====

#[test]
fn test_empty_set_still_padded() {
    let batch = ExampleBatch::builder().classes(vec![]).build().unwrap();

    assert_eq!(design_matrix(&batch).shape(), &[1, 1]);
    assert_eq!(response_vector(&batch).len(), 1);
    assert_eq!(unit_trials(0).to_vec(), vec![1.0]);
}

#[test]
fn test_builders_are_deterministic() {
    let batch = toy_batch();

    let first: Vec<u64> = design_matrix(&batch).iter().map(|v| v.to_bits()).collect();
    let second: Vec<u64> = design_matrix(&batch).iter().map(|v| v.to_bits()).collect();
    assert_eq!(first, second);

    let first: Vec<u64> = response_vector(&batch).iter().map(|v| v.to_bits()).collect();
    let second: Vec<u64> = response_vector(&batch).iter().map(|v| v.to_bits()).collect();
    assert_eq!(first, second);

    assert_eq!(unit_trials(3), unit_trials(3));
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use crate::data::ExampleSet;
    use proptest::prelude::*;

    struct Synthetic {
        n: usize,
        k: usize,
    }

    impl ExampleSet for Synthetic {
        fn n_examples(&self) -> usize {
            self.n
        }

        fn n_attributes(&self) -> usize {
            self.k
        }

        fn attribute_value(&self, example: usize, attribute: usize) -> f64 {
            (example * self.k + attribute + 1) as f64
        }

        fn class_value(&self, example: usize) -> f64 {
            (example % 2) as f64
        }
    }

    proptest! {
        #[test]
        fn prop_design_matrix_shape_and_padding(n in 0usize..40, k in 0usize..8) {
            let x = design_matrix(&Synthetic { n, k });
            prop_assert_eq!(x.shape(), &[n + 1, k + 1]);
            prop_assert!((0..=k).all(|j| x[[0, j]] == 0.0));
            prop_assert!((0..=n).all(|i| x[[i, 0]] == 0.0));
        }

        #[test]
        fn prop_response_vector_shape(n in 0usize..200) {
            let y = response_vector(&Synthetic { n, k: 2 });
            prop_assert_eq!(y.len(), n + 1);
            prop_assert_eq!(y[0], 0.0);
        }

        #[test]
        fn prop_trials_all_ones(n in 0usize..200) {
            let t = unit_trials(n);
            prop_assert_eq!(t.len(), n + 1);
            prop_assert!(t.iter().all(|&v| v == 1.0));
        }
    }
}
