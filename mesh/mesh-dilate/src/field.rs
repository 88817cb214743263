//! Multi-column per-node scalar data.

use crate::error::{DilateError, DilateResult};

/// A named column of per-node values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarColumn {
    name: String,
    values: Vec<f64>,
}

impl ScalarColumn {
    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-node values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the column, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// An ordered set of named columns sharing one node count.
///
/// # Example
///
/// ```
/// use mesh_dilate::ScalarField;
///
/// let mut field = ScalarField::new(3);
/// field.push_column("thickness", vec![1.0, 0.0, 2.0]).unwrap();
/// field.push_column("curvature", vec![0.1, 0.2, 0.3]).unwrap();
///
/// assert_eq!(field.column_count(), 2);
/// assert_eq!(field.column(1).map(|c| c.name()), Some("curvature"));
/// assert!(field.push_column("short", vec![1.0]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarField {
    node_count: usize,
    columns: Vec<ScalarColumn>,
}

impl ScalarField {
    /// Create a field with no columns.
    #[must_use]
    pub const fn new(node_count: usize) -> Self {
        Self {
            node_count,
            columns: Vec::new(),
        }
    }

    /// Create a single-column field; the node count is the column length.
    #[must_use]
    pub fn from_column(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            node_count: values.len(),
            columns: vec![ScalarColumn {
                name: name.into(),
                values,
            }],
        }
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns [`DilateError::ColumnLength`] if `values` does not have one
    /// entry per node.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> DilateResult<()> {
        let name = name.into();
        if values.len() != self.node_count {
            return Err(DilateError::ColumnLength {
                name,
                expected: self.node_count,
                found: values.len(),
            });
        }
        self.columns.push(ScalarColumn { name, values });
        Ok(())
    }

    /// Builder form of [`push_column`](Self::push_column).
    ///
    /// # Errors
    ///
    /// Same as [`push_column`](Self::push_column).
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> DilateResult<Self> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Number of nodes each column covers.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the field has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column by index.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&ScalarColumn> {
        self.columns.get(index)
    }

    /// All columns in order.
    #[must_use]
    pub fn columns(&self) -> &[ScalarColumn] {
        &self.columns
    }
}
