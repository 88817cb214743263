//! Surface capabilities consumed by the dilation engine.
//!
//! The engine never computes adjacency or distances itself. It asks a
//! [`DilationSurface`] for node areas, immediate neighbors, and the two
//! geodesic queries. [`MeshSurface`] provides all of them for an
//! [`IndexedMesh`] through [`GeodesicSolver`]; tests and callers with their
//! own distance backends implement the traits directly.

use mesh_geodesic::GeodesicSolver;
use mesh_types::IndexedMesh;
use tracing::debug;

use crate::error::{DilateError, DilateResult};

/// Node count, area weights and immediate-neighbor adjacency.
pub trait NodeTopology {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Non-negative area weight of a node.
    ///
    /// Callers only pass indices below [`node_count`](Self::node_count).
    fn node_area(&self, node: usize) -> f64;

    /// Immediate topological neighbors of a node.
    fn neighbors_of(&self, node: usize) -> Vec<usize>;
}

/// Geodesic distance queries from a single source node.
pub trait GeodesicQuery {
    /// Every node within `radius` of `node`, including `node` itself at
    /// distance zero, as `(node, distance)` pairs.
    fn nodes_within(&self, node: usize, radius: f64) -> Vec<(usize, f64)>;

    /// Distance from `node` to each of `candidates`, in the same order.
    fn distances_to(&self, node: usize, candidates: &[usize]) -> Vec<f64>;
}

/// Everything the dilation engine needs from a surface.
///
/// `Sync` is required so a column's nodes can be processed on several
/// threads against the same read-only surface.
pub trait DilationSurface: NodeTopology + GeodesicQuery + Sync {}

impl<T: NodeTopology + GeodesicQuery + Sync + ?Sized> DilationSurface for T {}

/// A triangle mesh prepared for dilation: edge-graph geodesics plus
/// per-node areas.
///
/// # Example
///
/// ```
/// use mesh_dilate::{MeshSurface, NodeTopology};
/// use mesh_types::planar_grid;
///
/// let surface = MeshSurface::from_mesh(&planar_grid(3, 3, 1.0));
/// assert_eq!(surface.node_count(), 9);
/// assert!((surface.node_area(4) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MeshSurface {
    solver: GeodesicSolver,
    areas: Vec<f64>,
}

impl MeshSurface {
    /// Build from a mesh, using barycentric vertex areas.
    #[must_use]
    pub fn from_mesh(mesh: &IndexedMesh) -> Self {
        let solver = GeodesicSolver::new(mesh);
        let areas = mesh.vertex_areas();
        debug!(
            nodes = solver.vertex_count(),
            edges = solver.adjacency().edge_count(),
            "Built mesh surface"
        );
        Self { solver, areas }
    }

    /// Build from a solver and caller-supplied areas.
    ///
    /// # Errors
    ///
    /// Returns [`DilateError::AreaCountMismatch`] if there is not exactly one
    /// area per solver vertex, and [`DilateError::InvalidArea`] for a
    /// negative or NaN area.
    pub fn from_parts(solver: GeodesicSolver, areas: Vec<f64>) -> DilateResult<Self> {
        if areas.len() != solver.vertex_count() {
            return Err(DilateError::AreaCountMismatch {
                nodes: solver.vertex_count(),
                areas: areas.len(),
            });
        }
        if let Some((node, &area)) = areas
            .iter()
            .enumerate()
            .find(|&(_, &a)| a.is_nan() || a < 0.0)
        {
            return Err(DilateError::InvalidArea { node, area });
        }
        Ok(Self { solver, areas })
    }

    /// The underlying geodesic solver.
    #[must_use]
    pub const fn solver(&self) -> &GeodesicSolver {
        &self.solver
    }

    /// Per-node areas.
    #[must_use]
    pub fn areas(&self) -> &[f64] {
        &self.areas
    }
}

impl NodeTopology for MeshSurface {
    fn node_count(&self) -> usize {
        self.solver.vertex_count()
    }

    fn node_area(&self, node: usize) -> f64 {
        self.areas[node]
    }

    fn neighbors_of(&self, node: usize) -> Vec<usize> {
        self.solver.adjacency().neighbor_indices(node)
    }
}

impl GeodesicQuery for MeshSurface {
    fn nodes_within(&self, node: usize, radius: f64) -> Vec<(usize, f64)> {
        self.solver.nodes_within(node, radius)
    }

    fn distances_to(&self, node: usize, candidates: &[usize]) -> Vec<f64> {
        self.solver.distances_to(node, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_geodesic::AdjacencyList;
    use mesh_types::planar_grid;

    fn chain_solver(n: usize) -> GeodesicSolver {
        let edges: Vec<(u32, u32, f64)> = (1..n as u32).map(|i| (i - 1, i, 1.0)).collect();
        GeodesicSolver::from_adjacency(AdjacencyList::from_edges(n, &edges).unwrap_or_default())
    }

    #[test]
    fn mesh_surface_delegates_queries() {
        let surface = MeshSurface::from_mesh(&planar_grid(3, 3, 1.0));
        let mut neighbors = surface.neighbors_of(0);
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 3, 4]);

        let near = surface.nodes_within(0, 1.0);
        assert_eq!(near.len(), 3);
        let d = surface.distances_to(0, &[8]);
        assert!((d[0] - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn from_parts_checks_area_count() {
        let result = MeshSurface::from_parts(chain_solver(3), vec![1.0; 2]);
        assert!(matches!(
            result,
            Err(DilateError::AreaCountMismatch { nodes: 3, areas: 2 })
        ));
    }

    #[test]
    fn from_parts_rejects_negative_area() {
        let result = MeshSurface::from_parts(chain_solver(3), vec![1.0, -0.5, 1.0]);
        assert!(matches!(result, Err(DilateError::InvalidArea { node: 1, .. })));
    }

    #[test]
    fn from_parts_keeps_areas() {
        let surface = MeshSurface::from_parts(chain_solver(3), vec![0.5, 1.0, 2.0]);
        assert!(surface.is_ok_and(|s| s.areas() == [0.5, 1.0, 2.0] && s.node_count() == 3));
    }
}
