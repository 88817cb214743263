//! End-to-end dilation scenarios on small graphs and meshes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]

use mesh_dilate::{
    ColumnSelection, DISTANCE_TOLERANCE, DilateError, DilationParams, GeodesicQuery, MeshSurface,
    NodeTopology, ScalarField, dilate,
};
use mesh_geodesic::{AdjacencyList, GeodesicSolver};
use mesh_types::planar_grid;

// =============================================================================
// Fixtures
// =============================================================================

/// Path graph `0 - 1 - ... - n-1` with the given edge lengths and areas.
fn chain(lengths: &[f64], areas: Vec<f64>) -> MeshSurface {
    let edges: Vec<(u32, u32, f64)> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| (i as u32, i as u32 + 1, len))
        .collect();
    let adj = AdjacencyList::from_edges(lengths.len() + 1, &edges).unwrap();
    MeshSurface::from_parts(GeodesicSolver::from_adjacency(adj), areas).unwrap()
}

fn unit_chain(n: usize) -> MeshSurface {
    chain(&vec![1.0; n - 1], vec![1.0; n])
}

fn sequential(distance: f64) -> DilationParams {
    DilationParams::with_distance(distance).parallel(false)
}

/// Surface whose every query panics; only its node count may be read.
struct Untouchable(usize);

impl NodeTopology for Untouchable {
    fn node_count(&self) -> usize {
        self.0
    }

    fn node_area(&self, _: usize) -> f64 {
        panic!("area queried")
    }

    fn neighbors_of(&self, _: usize) -> Vec<usize> {
        panic!("neighbors queried")
    }
}

impl GeodesicQuery for Untouchable {
    fn nodes_within(&self, _: usize, _: f64) -> Vec<(usize, f64)> {
        panic!("radius queried")
    }

    fn distances_to(&self, _: usize, _: &[usize]) -> Vec<f64> {
        panic!("distances queried")
    }
}

// =============================================================================
// Fill behavior
// =============================================================================

#[test]
fn chain_of_five_fills_from_both_sides() {
    let surface = unit_chain(5);
    let input = ScalarField::from_column("data", vec![0.0, 2.0, 0.0, 4.0, 0.0]);

    let output = dilate(&surface, &input, None, &sequential(1.5)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[2.0, 2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn chain_of_five_parallel_gives_same_result() {
    let surface = unit_chain(5);
    let input = ScalarField::from_column("data", vec![0.0, 2.0, 0.0, 4.0, 0.0]);

    let output = dilate(&surface, &input, None, &DilationParams::with_distance(1.5)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[2.0, 2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn isolated_bad_node_becomes_zero() {
    // Node 2 and everything within reach of it is bad
    let surface = unit_chain(7);
    let input = ScalarField::from_column("data", vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 9.0]);

    let output = dilate(&surface, &input, None, &sequential(1.0)).unwrap();
    let values = output.column(0).unwrap().values();

    assert_eq!(values[2], 0.0);
    assert_eq!(values[3], 0.0);
    // Nodes next to a good node still fill
    assert_eq!(values[1], 5.0);
    assert_eq!(values[5], 9.0);
}

#[test]
fn disconnected_bad_node_becomes_zero() {
    let adj = AdjacencyList::from_edges(3, &[(0, 1, 1.0)]).unwrap();
    let surface =
        MeshSurface::from_parts(GeodesicSolver::from_adjacency(adj), vec![1.0; 3]).unwrap();
    let input = ScalarField::from_column("data", vec![4.0, 6.0, 0.0]);

    let output = dilate(&surface, &input, None, &sequential(100.0)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[4.0, 6.0, 0.0]);
}

#[test]
fn neighbor_fallback_reaches_past_the_radius() {
    // Edges are long relative to the radius
    let surface = chain(&[3.0, 5.0], vec![1.0; 3]);
    let input = ScalarField::from_column("data", vec![10.0, 0.0, 40.0]);

    let output = dilate(&surface, &input, None, &sequential(1.0)).unwrap();

    // Weights 1/9 and 1/25
    let expected = (10.0 / 9.0 + 40.0 / 25.0) / (1.0 / 9.0 + 1.0 / 25.0);
    assert!((output.column(0).unwrap().values()[1] - expected).abs() < 1e-12);
}

#[test]
fn bad_values_are_never_read_back() {
    // Node 1 fills first in index order; node 2 must not see its new value
    let surface = unit_chain(4);
    let input = ScalarField::from_column("data", vec![8.0, 0.0, 0.0, 0.0]);

    let output = dilate(&surface, &input, None, &sequential(1.0)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[8.0, 8.0, 0.0, 0.0]);
}

#[test]
fn coincident_nodes_use_clamped_weight() {
    // Node 1 sits 1e-6 from node 0, node 2 is one unit away; node 0 is bad
    let surface = chain(&[1e-6, 1.0], vec![1.0; 3]);
    let input = ScalarField::from_column("data", vec![0.0, 10.0, 20.0]);
    let roi = ScalarField::from_column("roi", vec![1.0, 0.0, 0.0]);

    let output = dilate(&surface, &input, Some(&roi), &sequential(2.0)).unwrap();
    let value = output.column(0).unwrap().values()[0];

    let near = 1.0 / (DISTANCE_TOLERANCE * DISTANCE_TOLERANCE);
    let far = 1.0 / (1.0 + 1e-6_f64).powi(2);
    let clamped = (10.0 * near + 20.0 * far) / (near + far);
    let unclamped_near = 1.0 / (1e-6 * 1e-6);
    let unclamped = (10.0 * unclamped_near + 20.0 * far) / (unclamped_near + far);

    assert!((value - clamped).abs() < 1e-12);
    assert!((value - unclamped).abs() > 1e-12);
}

#[test]
fn area_weighting_on_a_mesh() {
    let grid = planar_grid(3, 3, 1.0);
    let surface = MeshSurface::from_mesh(&grid);
    // Center is bad; axis neighbors hold distinct values
    let mut values = vec![0.0; 9];
    values[1] = 1.0;
    values[3] = 2.0;
    values[5] = 3.0;
    values[7] = 4.0;
    let input = ScalarField::from_column("data", values);

    let output = dilate(&surface, &input, None, &sequential(1.0)).unwrap();

    let areas = surface.areas();
    let weights = [areas[1], areas[3], areas[5], areas[7]];
    let expected = (weights[0] + 2.0 * weights[1] + 3.0 * weights[2] + 4.0 * weights[3])
        / weights.iter().sum::<f64>();
    assert!((output.column(0).unwrap().values()[4] - expected).abs() < 1e-12);
}

// =============================================================================
// Region of interest
// =============================================================================

#[test]
fn roi_treats_unflagged_zero_as_good() {
    let surface = unit_chain(3);
    let input = ScalarField::from_column("data", vec![0.0, 7.0, 3.0]);
    let roi = ScalarField::from_column("roi", vec![0.0, 0.0, 1.0]);

    let output = dilate(&surface, &input, Some(&roi), &sequential(1.0)).unwrap();
    let values = output.column(0).unwrap().values();

    // Node 0 keeps its zero; node 2 is replaced by node 1's value
    assert_eq!(values, &[0.0, 7.0, 7.0]);
}

#[test]
fn roi_zero_neighbor_contributes_zero() {
    let surface = unit_chain(3);
    let input = ScalarField::from_column("data", vec![0.0, 5.0, 6.0]);
    let roi = ScalarField::from_column("roi", vec![0.0, 2.0, 0.0]);

    let output = dilate(&surface, &input, Some(&roi), &sequential(1.0)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[0.0, 3.0, 6.0]);
}

#[test]
fn roi_mask_applies_to_every_column() {
    let surface = unit_chain(3);
    let input = ScalarField::new(3)
        .with_column("a", vec![1.0, 100.0, 3.0])
        .and_then(|f| f.with_column("b", vec![0.0, 0.0, 0.0]))
        .unwrap();
    let roi = ScalarField::from_column("roi", vec![0.0, 1.0, 0.0]);

    let output = dilate(&surface, &input, Some(&roi), &sequential(1.0)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[1.0, 2.0, 3.0]);
    assert_eq!(output.column(1).unwrap().values(), &[0.0, 0.0, 0.0]);
}

#[test]
fn extra_roi_columns_are_ignored() {
    let surface = unit_chain(3);
    let input = ScalarField::from_column("data", vec![4.0, 9.0, 8.0]);
    let roi = ScalarField::new(3)
        .with_column("first", vec![1.0, 0.0, 0.0])
        .and_then(|f| f.with_column("second", vec![0.0, 1.0, 1.0]))
        .unwrap();

    let output = dilate(&surface, &input, Some(&roi), &sequential(1.0)).unwrap();

    assert_eq!(output.column(0).unwrap().values(), &[9.0, 9.0, 8.0]);
}

// =============================================================================
// Output shape
// =============================================================================

#[test]
fn all_columns_are_renamed() {
    let surface = unit_chain(2);
    let input = ScalarField::new(2)
        .with_column("left", vec![1.0, 0.0])
        .and_then(|f| f.with_column("right", vec![0.0, 2.0]))
        .unwrap();

    let output = dilate(&surface, &input, None, &sequential(1.0)).unwrap();

    assert_eq!(output.node_count(), 2);
    let names: Vec<&str> = output.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["left dilated", "right dilated"]);
    assert_eq!(output.column(0).unwrap().values(), &[1.0, 1.0]);
    assert_eq!(output.column(1).unwrap().values(), &[2.0, 2.0]);
}

#[test]
fn single_column_mode_emits_one_column() {
    let surface = unit_chain(2);
    let input = ScalarField::new(2)
        .with_column("left", vec![1.0, 0.0])
        .and_then(|f| f.with_column("right", vec![0.0, 2.0]))
        .unwrap();
    let params = sequential(1.0).column(ColumnSelection::Single(1));

    let output = dilate(&surface, &input, None, &params).unwrap();

    assert_eq!(output.column_count(), 1);
    let column = output.column(0).unwrap();
    assert_eq!(column.name(), "right dilated");
    assert_eq!(column.values(), &[2.0, 2.0]);
}

#[test]
fn input_is_left_untouched() {
    let surface = unit_chain(3);
    let input = ScalarField::from_column("data", vec![0.0, 1.0, 0.0]);
    let before = input.clone();

    let _ = dilate(&surface, &input, None, &sequential(1.0)).unwrap();

    assert_eq!(input, before);
}

// =============================================================================
// Validation happens before any query
// =============================================================================

#[test]
fn negative_distance_is_rejected_without_queries() {
    let input = ScalarField::from_column("data", vec![0.0; 3]);
    let result = dilate(&Untouchable(3), &input, None, &sequential(-1.0));
    assert!(matches!(result, Err(DilateError::InvalidDistance { .. })));
}

#[test]
fn bad_column_is_rejected_without_queries() {
    let input = ScalarField::from_column("data", vec![0.0; 3]);
    let params = sequential(1.0).column(ColumnSelection::Single(1));
    let result = dilate(&Untouchable(3), &input, None, &params);
    assert!(matches!(result, Err(DilateError::InvalidColumn { column: 1, .. })));
}

#[test]
fn node_count_mismatch_is_rejected_without_queries() {
    let input = ScalarField::from_column("data", vec![0.0; 3]);
    let result = dilate(&Untouchable(4), &input, None, &sequential(1.0));
    assert!(matches!(result, Err(DilateError::NodeCountMismatch { .. })));

    let input = ScalarField::from_column("data", vec![0.0; 4]);
    let roi = ScalarField::from_column("roi", vec![1.0; 2]);
    let result = dilate(&Untouchable(4), &input, Some(&roi), &sequential(1.0));
    assert!(matches!(
        result,
        Err(DilateError::NodeCountMismatch { roi: Some(2), .. })
    ));
}

#[test]
fn signed_column_index_rejects_negative() {
    let err = ColumnSelection::from_signed(-2, 1).unwrap_err();
    assert!(matches!(err, DilateError::InvalidColumn { column: -2, .. }));
}

#[test]
fn all_good_field_never_queries() {
    // No bad nodes means no geodesic work at all
    let input = ScalarField::from_column("data", vec![1.0, 2.0, 3.0]);
    let output = dilate(&Untouchable(3), &input, None, &sequential(1.0)).unwrap();
    assert_eq!(output.column(0).unwrap().values(), &[1.0, 2.0, 3.0]);
}
