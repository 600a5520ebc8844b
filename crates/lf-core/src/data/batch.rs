//! Owned example batches and their builder

use indexmap::IndexMap;

use super::*;

/// An owned, ordered batch of classified examples
///
/// Attribute columns keep their insertion order, which fixes the coefficient
/// order reported after a fit. One numeric class value is stored per example.
#[derive(Debug, Clone)]
pub struct ExampleBatch {
    columns: IndexMap<String, Vec<f64>>,
    classes: Vec<f64>,
}

impl ExampleBatch {
    /// Create a new ExampleBatchBuilder
    pub fn builder() -> ExampleBatchBuilder {
        ExampleBatchBuilder::new()
    }

    /// Attribute column by name
    pub fn attribute_column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Class values
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    /// Check if the batch has no examples
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ExampleSet for ExampleBatch {
    fn n_examples(&self) -> usize {
        self.classes.len()
    }

    fn n_attributes(&self) -> usize {
        self.columns.len()
    }

    fn attribute_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    fn attribute_value(&self, example: usize, attribute: usize) -> f64 {
        self.columns[attribute][example]
    }

    fn class_value(&self, example: usize) -> f64 {
        self.classes[example]
    }
}

/// Builder for creating ExampleBatches
#[derive(Debug)]
pub struct ExampleBatchBuilder {
    columns: IndexMap<String, Vec<f64>>,
    nrows: Option<usize>,
    classes: Option<Vec<f64>>,
}

impl ExampleBatchBuilder {
    /// Create a new ExampleBatchBuilder
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
            nrows: None,
            classes: None,
        }
    }

    /// Add an attribute column
    pub fn with_attribute<S: Into<String>>(mut self, name: S, values: Vec<f64>) -> Result<Self> {
        let name = name.into();

        if self.columns.contains_key(&name) {
            return Err(DataError::DuplicateAttribute(name));
        }

        // Check dimension consistency
        match self.nrows {
            Some(n) if values.len() != n => {
                return Err(DataError::DimensionMismatch {
                    expected: format!("{} examples", n),
                    actual: format!("{} examples", values.len()),
                });
            }
            None => {
                self.nrows = Some(values.len());
            }
            _ => {}
        }

        self.columns.insert(name, values);
        Ok(self)
    }

    /// Set the class values
    pub fn classes(mut self, values: Vec<f64>) -> Self {
        self.classes = Some(values);
        self
    }

    /// Build the ExampleBatch
    pub fn build(self) -> Result<ExampleBatch> {
        let classes = self.classes.ok_or(DataError::MissingClasses)?;

        if let Some(n) = self.nrows {
            if classes.len() != n {
                return Err(DataError::DimensionMismatch {
                    expected: format!("{} class values", n),
                    actual: format!("{} class values", classes.len()),
                });
            }
        }

        Ok(ExampleBatch {
            columns: self.columns,
            classes,
        })
    }
}
