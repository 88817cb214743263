//! Column driver: classify, fill and assemble the output field.

use std::borrow::Cow;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::classify::ClassificationMask;
use crate::engine::{FillTier, NodeFill, WeightedAverager};
use crate::error::DilateResult;
use crate::field::ScalarField;
use crate::params::DilationParams;
use crate::surface::DilationSurface;
use crate::validate::validate;

/// Suffix appended to each input column name in the output.
pub const DILATED_SUFFIX: &str = " dilated";

/// Counts describing how one column was filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnStats {
    /// Nodes classified bad.
    pub bad_nodes: usize,
    /// Bad nodes filled from good nodes within the search radius.
    pub from_radius: usize,
    /// Bad nodes filled from good immediate neighbors.
    pub from_neighbors: usize,
    /// Bad nodes with no reachable good value, set to zero.
    pub zero_filled: usize,
}

impl ColumnStats {
    fn record(&mut self, tier: FillTier) {
        self.bad_nodes += 1;
        match tier {
            FillTier::Radius => self.from_radius += 1,
            FillTier::Neighbors => self.from_neighbors += 1,
            FillTier::Zero => self.zero_filled += 1,
        }
    }
}

/// Result of dilating a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDilation {
    /// Dilated values, one per node.
    pub values: Vec<f64>,
    /// Fill statistics.
    pub stats: ColumnStats,
}

/// Dilate one column of values.
///
/// Good nodes keep their value exactly; each bad node gets its
/// [`WeightedAverager::fill`] value computed from the unmodified `values`.
/// With `parallel` set the nodes are processed on the rayon pool; the
/// result is identical.
///
/// # Panics
///
/// Panics if `values` or `mask` do not have one entry per surface node.
#[must_use]
pub fn dilate_column<S: DilationSurface + ?Sized>(
    surface: &S,
    values: &[f64],
    mask: &ClassificationMask,
    distance: f64,
    parallel: bool,
) -> ColumnDilation {
    let node_count = surface.node_count();
    assert_eq!(values.len(), node_count, "column length differs from node count");
    assert_eq!(mask.len(), node_count, "mask length differs from node count");

    let averager = WeightedAverager::new(surface, mask, values, distance);
    let fill = |node: usize| -> Option<NodeFill> {
        if mask.is_good(node) {
            None
        } else {
            Some(averager.fill(node))
        }
    };

    let fills: Vec<Option<NodeFill>> = if parallel {
        (0..node_count).into_par_iter().map(fill).collect()
    } else {
        (0..node_count).map(fill).collect()
    };

    let mut stats = ColumnStats::default();
    let mut scratch = Vec::with_capacity(node_count);
    for (node, filled) in fills.into_iter().enumerate() {
        match filled {
            Some(NodeFill { value, tier }) => {
                stats.record(tier);
                scratch.push(value);
            }
            None => scratch.push(values[node]),
        }
    }

    ColumnDilation {
        values: scratch,
        stats,
    }
}

/// Dilate a scalar field over a surface.
///
/// Every selected column is classified (by zero value, or by `roi` when one
/// is supplied), its bad nodes are filled, and the result is stored under
/// the input column's name with [`DILATED_SUFFIX`] appended. The output
/// has one column per selected input column.
///
/// When `roi` has several columns only the first is used. Its mask is
/// built once and shared by all columns.
///
/// # Errors
///
/// Returns the first failure found by [`validate`]; in that case no
/// surface query is made.
///
/// # Example
///
/// ```
/// use mesh_dilate::{dilate, DilationParams, MeshSurface, ScalarField};
/// use mesh_types::planar_grid;
///
/// let grid = planar_grid(3, 3, 1.0);
/// let surface = MeshSurface::from_mesh(&grid);
///
/// // Center value missing
/// let mut values = vec![1.0; 9];
/// values[4] = 0.0;
/// let input = ScalarField::from_column("thickness", values);
///
/// let output = dilate(&surface, &input, None, &DilationParams::with_distance(1.0)).unwrap();
/// let column = output.column(0).unwrap();
/// assert_eq!(column.name(), "thickness dilated");
/// assert!((column.values()[4] - 1.0).abs() < 1e-12);
/// ```
pub fn dilate<S: DilationSurface + ?Sized>(
    surface: &S,
    input: &ScalarField,
    roi: Option<&ScalarField>,
    params: &DilationParams,
) -> DilateResult<ScalarField> {
    let node_count = surface.node_count();
    validate(node_count, input, roi, params)?;

    let columns = params.column.indices(input.column_count());
    info!(
        nodes = node_count,
        columns = columns.len(),
        distance = params.distance,
        roi = roi.is_some(),
        parallel = params.parallel,
        "Starting scalar field dilation"
    );

    let roi_mask = roi
        .and_then(|r| r.column(0))
        .map(|c| ClassificationMask::from_roi(c.values()));

    let mut output = ScalarField::new(node_count);
    let mut total = ColumnStats::default();

    for column in &input.columns()[columns] {
        let mask = roi_mask.as_ref().map_or_else(
            || Cow::Owned(ClassificationMask::from_values(column.values())),
            Cow::Borrowed,
        );

        let result = dilate_column(
            surface,
            column.values(),
            &mask,
            params.distance,
            params.parallel,
        );
        let stats = result.stats;

        debug!(
            column = column.name(),
            bad = stats.bad_nodes,
            from_radius = stats.from_radius,
            from_neighbors = stats.from_neighbors,
            zero_filled = stats.zero_filled,
            "Dilated column"
        );
        if stats.zero_filled > 0 {
            warn!(
                column = column.name(),
                count = stats.zero_filled,
                "Nodes with no reachable good value were set to zero"
            );
        }

        total.bad_nodes += stats.bad_nodes;
        total.zero_filled += stats.zero_filled;
        output.push_column(format!("{}{DILATED_SUFFIX}", column.name()), result.values)?;
    }

    info!(
        columns = output.column_count(),
        bad = total.bad_nodes,
        zero_filled = total.zero_filled,
        "Dilation complete"
    );

    Ok(output)
}
