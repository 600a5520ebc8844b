//! Tests for data module

use super::*;

#[test]
fn test_batch_creation() {
    let batch = ExampleBatch::builder()
        .with_attribute("age", vec![34.0, 51.0, 27.0])
        .unwrap()
        .with_attribute("dose", vec![1.0, 2.0, 3.0])
        .unwrap()
        .classes(vec![0.0, 1.0, 1.0])
        .build()
        .unwrap();

    assert_eq!(batch.n_examples(), 3);
    assert_eq!(batch.n_attributes(), 2);
    assert_eq!(batch.attribute_names(), vec!["age", "dose"]);
    assert!(!batch.is_empty());
}

#[test]
fn test_batch_value_access() {
    let batch = ExampleBatch::builder()
        .with_attribute("a", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_attribute("b", vec![4.0, 5.0, 6.0])
        .unwrap()
        .classes(vec![0.0, 1.0, 0.0])
        .build()
        .unwrap();

    // (example, attribute), both zero-based
    assert_eq!(batch.attribute_value(0, 0), 1.0);
    assert_eq!(batch.attribute_value(0, 1), 4.0);
    assert_eq!(batch.attribute_value(2, 1), 6.0);
    assert_eq!(batch.class_value(1), 1.0);

    assert_eq!(batch.attribute_column("b"), Some(&[4.0, 5.0, 6.0][..]));
    assert_eq!(batch.attribute_column("missing"), None);
    assert_eq!(batch.classes(), &[0.0, 1.0, 0.0]);
}

#[test]
fn test_duplicate_attribute_rejected() {
    let err = ExampleBatch::builder()
        .with_attribute("x", vec![1.0, 2.0])
        .unwrap()
        .with_attribute("x", vec![3.0, 4.0])
        .unwrap_err();

    assert!(matches!(err, DataError::DuplicateAttribute(name) if name == "x"));
}

#[test]
fn test_attribute_length_mismatch_rejected() {
    let err = ExampleBatch::builder()
        .with_attribute("x", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_attribute("y", vec![1.0])
        .unwrap_err();

    assert!(matches!(err, DataError::DimensionMismatch { .. }));
}

#[test]
fn test_class_length_mismatch_rejected() {
    let err = ExampleBatch::builder()
        .with_attribute("x", vec![1.0, 2.0, 3.0])
        .unwrap()
        .classes(vec![0.0, 1.0])
        .build()
        .unwrap_err();

    assert!(matches!(err, DataError::DimensionMismatch { .. }));
}

#[test]
fn test_missing_classes_rejected() {
    let err = ExampleBatch::builder()
        .with_attribute("x", vec![1.0, 2.0])
        .unwrap()
        .build()
        .unwrap_err();

    assert!(matches!(err, DataError::MissingClasses));
}

#[test]
fn test_classes_only_batch() {
    // zero attributes is legal here; the routine rejects it downstream
    let batch = ExampleBatch::builder()
        .classes(vec![0.0, 1.0])
        .build()
        .unwrap();

    assert_eq!(batch.n_examples(), 2);
    assert_eq!(batch.n_attributes(), 0);
    assert!(batch.attribute_names().is_empty());
}

#[test]
fn test_generated_attribute_names() {
    struct Grid {
        n: usize,
        k: usize,
    }

    impl ExampleSet for Grid {
        fn n_examples(&self) -> usize {
            self.n
        }

        fn n_attributes(&self) -> usize {
            self.k
        }

        fn attribute_value(&self, example: usize, attribute: usize) -> f64 {
            (example * self.k + attribute) as f64
        }

        fn class_value(&self, _example: usize) -> f64 {
            0.0
        }
    }

    let grid = Grid { n: 2, k: 3 };
    assert_eq!(grid.attribute_names(), vec!["x1", "x2", "x3"]);
}

#[test]
fn test_error_messages() {
    let err = DataError::DimensionMismatch {
        expected: "3 examples".to_string(),
        actual: "1 examples".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: expected 3 examples, got 1 examples"
    );

    let err = DataError::DuplicateAttribute("dose".to_string());
    assert_eq!(err.to_string(), "Duplicate attribute name: dose");
}
