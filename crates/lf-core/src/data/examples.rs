//! Read contract over a set of classified examples

/// Trait for data sources the marshaling layer reads examples from
///
/// An implementor exposes an ordered attribute list, each attribute read as
/// a numeric value per example, and a numeric class value per example.
/// Values must be defined; this layer performs no validation or imputation.
/// Statistical checks (enough examples, non-constant columns) belong to the
/// fitting routine downstream.
pub trait ExampleSet: Send + Sync {
    /// Number of examples
    fn n_examples(&self) -> usize;

    /// Number of attributes
    fn n_attributes(&self) -> usize;

    /// Ordered attribute names
    ///
    /// Sources without names of their own get `x1..xK`.
    fn attribute_names(&self) -> Vec<String> {
        (1..=self.n_attributes())
            .map(|j| format!("x{}", j))
            .collect()
    }

    /// Attribute value for one example, both indices zero-based
    fn attribute_value(&self, example: usize, attribute: usize) -> f64;

    /// Class value for one example
    fn class_value(&self, example: usize) -> f64;
}
