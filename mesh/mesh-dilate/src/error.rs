//! Error types for scalar field dilation.

use thiserror::Error;

/// Result type for dilation operations.
pub type DilateResult<T> = Result<T, DilateError>;

/// Errors that can occur while setting up or validating a dilation.
///
/// Every variant is raised before any node is processed; a failed call
/// produces no output at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DilateError {
    /// Surface, input field and ROI disagree on the number of nodes.
    #[error("node count mismatch: surface has {surface}, input has {input}, roi has {roi:?}")]
    NodeCountMismatch {
        /// Nodes on the surface.
        surface: usize,
        /// Nodes in the input field.
        input: usize,
        /// Nodes in the ROI field, if one was supplied.
        roi: Option<usize>,
    },

    /// Selected column does not exist in the input field.
    #[error("column index {column} out of range (input has {column_count} columns)")]
    InvalidColumn {
        /// The rejected index.
        column: i64,
        /// Number of columns in the input field.
        column_count: usize,
    },

    /// Dilation distance is negative or not a number.
    #[error("invalid dilation distance {distance} (must be >= 0)")]
    InvalidDistance {
        /// The rejected distance.
        distance: f64,
    },

    /// A field that needs at least one column has none.
    #[error("{field} field has no columns")]
    EmptyField {
        /// Which field was empty (`"input"` or `"roi"`).
        field: &'static str,
    },

    /// A column's length differs from its field's node count.
    #[error("column '{name}' has {found} values, expected {expected}")]
    ColumnLength {
        /// Column name.
        name: String,
        /// Node count of the field.
        expected: usize,
        /// Length of the rejected column.
        found: usize,
    },

    /// Area array length differs from the surface's node count.
    #[error("area count mismatch: {areas} areas for {nodes} nodes")]
    AreaCountMismatch {
        /// Nodes on the surface.
        nodes: usize,
        /// Areas supplied.
        areas: usize,
    },

    /// A node area is negative or not a number.
    #[error("invalid area {area} at node {node}")]
    InvalidArea {
        /// Offending node.
        node: usize,
        /// The rejected area.
        area: f64,
    },
}
