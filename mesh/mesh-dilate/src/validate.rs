//! Up-front checks run before any node is processed.

use crate::error::{DilateError, DilateResult};
use crate::field::ScalarField;
use crate::params::{ColumnSelection, DilationParams};

/// Check that a dilation request is well formed.
///
/// Only sizes and parameters are inspected; the surface's geodesic and
/// neighbor queries are never called.
///
/// # Errors
///
/// In order of checking:
/// - [`DilateError::NodeCountMismatch`] if the surface, input and ROI node
///   counts differ;
/// - [`DilateError::EmptyField`] if the input or ROI has no columns;
/// - [`DilateError::InvalidColumn`] if a single selected column is out of range;
/// - [`DilateError::InvalidDistance`] if the distance is negative or NaN.
pub fn validate(
    surface_nodes: usize,
    input: &ScalarField,
    roi: Option<&ScalarField>,
    params: &DilationParams,
) -> DilateResult<()> {
    let roi_nodes = roi.map(ScalarField::node_count);
    if input.node_count() != surface_nodes || roi_nodes.is_some_and(|n| n != surface_nodes) {
        return Err(DilateError::NodeCountMismatch {
            surface: surface_nodes,
            input: input.node_count(),
            roi: roi_nodes,
        });
    }

    if input.is_empty() {
        return Err(DilateError::EmptyField { field: "input" });
    }
    if roi.is_some_and(ScalarField::is_empty) {
        return Err(DilateError::EmptyField { field: "roi" });
    }

    if let ColumnSelection::Single(column) = params.column {
        if column >= input.column_count() {
            return Err(DilateError::InvalidColumn {
                column: i64::try_from(column).unwrap_or(i64::MAX),
                column_count: input.column_count(),
            });
        }
    }

    if params.distance.is_nan() || params.distance < 0.0 {
        return Err(DilateError::InvalidDistance {
            distance: params.distance,
        });
    }

    Ok(())
}
