//! Dijkstra's algorithm for geodesic distance computation.
//!
//! Shortest paths are taken along mesh edges. All queries share one
//! bounded search that settles vertices in non-decreasing distance order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use hashbrown::{HashMap, HashSet};
use mesh_types::IndexedMesh;

use crate::adjacency::AdjacencyList;
use crate::distance::DistanceField;

/// Geodesic distance solver using Dijkstra's algorithm.
///
/// # Performance
///
/// A full query costs O((V + E) log V). Radius and candidate queries only
/// touch the part of the graph they need, and keep their working state in
/// sparse maps so repeated local queries on large meshes stay cheap.
///
/// # Example
///
/// ```
/// use mesh_geodesic::GeodesicSolver;
/// use mesh_types::planar_grid;
///
/// let solver = GeodesicSolver::new(&planar_grid(3, 3, 1.0));
/// let near = solver.nodes_within(0, 1.0);
/// assert_eq!(near.len(), 3); // the source and its two axis neighbors
/// assert_eq!(near[0], (0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct GeodesicSolver {
    adjacency: AdjacencyList,
}

/// Priority queue entry, ordered as a min-heap on distance.
#[derive(Debug, Clone, Copy)]
struct State {
    vertex: u32,
    distance: f64,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap. Ties settle the lower index first.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl GeodesicSolver {
    /// Create a new geodesic solver from a mesh.
    #[must_use]
    pub fn new(mesh: &IndexedMesh) -> Self {
        Self {
            adjacency: AdjacencyList::from_mesh(mesh),
        }
    }

    /// Create a solver from a pre-built adjacency list.
    #[must_use]
    pub const fn from_adjacency(adjacency: AdjacencyList) -> Self {
        Self { adjacency }
    }

    /// Get a reference to the internal adjacency list.
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Compute distances from a single source vertex to every vertex.
    ///
    /// Unreachable vertices (and all vertices, for an out-of-range source)
    /// have distance `f64::INFINITY`.
    #[must_use]
    pub fn compute_from_vertex(&self, source: usize) -> DistanceField {
        let mut field = DistanceField::new(self.vertex_count());
        self.search(source, f64::INFINITY, |vertex, distance| {
            field.set_distance(vertex, distance);
            ControlFlow::Continue(())
        });
        field
    }

    /// All vertices within `radius` of `source`, source included.
    ///
    /// Pairs are `(vertex, distance)` in non-decreasing distance order.
    /// The boundary is inclusive. An out-of-range source yields no vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_geodesic::{AdjacencyList, GeodesicSolver};
    ///
    /// let adj = AdjacencyList::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    /// let solver = GeodesicSolver::from_adjacency(adj);
    /// let near = solver.nodes_within(1, 1.0);
    /// assert_eq!(near, vec![(1, 0.0), (0, 1.0), (2, 1.0)]);
    /// ```
    #[must_use]
    pub fn nodes_within(&self, source: usize, radius: f64) -> Vec<(usize, f64)> {
        let mut found = Vec::new();
        self.search(source, radius, |vertex, distance| {
            found.push((vertex, distance));
            ControlFlow::Continue(())
        });
        found
    }

    /// Distances from `source` to each vertex of `candidates`, in order.
    ///
    /// Unreachable or out-of-range candidates get `f64::INFINITY`. The search
    /// stops as soon as every candidate has been reached.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_geodesic::{AdjacencyList, GeodesicSolver};
    ///
    /// let adj = AdjacencyList::from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
    /// let solver = GeodesicSolver::from_adjacency(adj);
    /// let d = solver.distances_to(0, &[2, 0, 3]);
    /// assert_eq!(d[0], 3.0);
    /// assert_eq!(d[1], 0.0);
    /// assert!(d[2].is_infinite());
    /// ```
    #[must_use]
    pub fn distances_to(&self, source: usize, candidates: &[usize]) -> Vec<f64> {
        let mut pending: HashSet<usize> = candidates.iter().copied().collect();
        let mut reached: HashMap<usize, f64> = HashMap::with_capacity(pending.len());

        if !pending.is_empty() {
            self.search(source, f64::INFINITY, |vertex, distance| {
                if pending.remove(&vertex) {
                    reached.insert(vertex, distance);
                }
                if pending.is_empty() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
        }

        candidates
            .iter()
            .map(|c| reached.get(c).copied().unwrap_or(f64::INFINITY))
            .collect()
    }

    /// Run Dijkstra from `source`, calling `settle` once per vertex whose
    /// final distance is `<= cutoff`, in settle order.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32, meshes with >4B vertices unsupported
    fn search<F>(&self, source: usize, cutoff: f64, mut settle: F)
    where
        F: FnMut(usize, f64) -> ControlFlow<()>,
    {
        if source >= self.vertex_count() {
            return;
        }

        let mut best: HashMap<u32, f64> = HashMap::new();
        let mut done: HashSet<u32> = HashSet::new();
        let mut heap = BinaryHeap::new();

        best.insert(source as u32, 0.0);
        heap.push(State {
            vertex: source as u32,
            distance: 0.0,
        });

        while let Some(State { vertex, distance }) = heap.pop() {
            if distance > cutoff {
                break;
            }
            if !done.insert(vertex) {
                continue;
            }
            if settle(vertex as usize, distance).is_break() {
                break;
            }

            for &(neighbor, edge_length) in self.adjacency.neighbors(vertex as usize) {
                if done.contains(&neighbor) {
                    continue;
                }
                let candidate = distance + edge_length;
                if candidate > cutoff {
                    continue;
                }
                let improves = best.get(&neighbor).is_none_or(|&d| candidate < d);
                if improves {
                    best.insert(neighbor, candidate);
                    heap.push(State {
                        vertex: neighbor,
                        distance: candidate,
                    });
                }
            }
        }
    }
}
