//! Mesh adjacency data structure.
//!
//! Provides neighbor lookup with edge lengths for mesh vertices.

use mesh_types::{IndexedMesh, MeshTopology};

use crate::error::{GeodesicError, GeodesicResult};

/// Adjacency list for mesh vertices.
///
/// Each neighbor entry holds the neighbor index and the edge length.
/// Neighbors are kept in first-seen order, so traversal is deterministic.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<(u32, f64)>>,
}

impl AdjacencyList {
    /// Build an adjacency list from the edges of a triangle mesh.
    ///
    /// Edge weights are Euclidean lengths. Faces with out-of-range vertex
    /// indices are skipped.
    #[must_use]
    pub fn from_mesh(mesh: &IndexedMesh) -> Self {
        let mut neighbors: Vec<Vec<(u32, f64)>> = vec![Vec::new(); mesh.vertex_count()];

        for (face_index, [i0, i1, i2]) in mesh.faces().enumerate() {
            let Some(tri) = mesh.triangle(face_index) else {
                continue;
            };
            let [len01, len12, len20] = tri.edge_lengths();

            Self::add_edge(&mut neighbors, i0, i1, len01);
            Self::add_edge(&mut neighbors, i1, i2, len12);
            Self::add_edge(&mut neighbors, i2, i0, len20);
        }

        Self { neighbors }
    }

    /// Build an adjacency list from explicit `(from, to, length)` edges.
    ///
    /// Useful for graphs that are not triangle meshes, such as polylines.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesicError::InvalidVertex`] if an endpoint is out of
    /// range and [`GeodesicError::InvalidEdgeLength`] if a length is
    /// negative or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_geodesic::AdjacencyList;
    ///
    /// // 0 -- 1 -- 2
    /// let adj = AdjacencyList::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
    /// assert_eq!(adj.edge_count(), 2);
    /// assert_eq!(adj.neighbor_indices(1), vec![0, 2]);
    /// ```
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, f64)]) -> GeodesicResult<Self> {
        let mut neighbors: Vec<Vec<(u32, f64)>> = vec![Vec::new(); vertex_count];

        for &(from, to, length) in edges {
            for index in [from, to] {
                if index as usize >= vertex_count {
                    return Err(GeodesicError::InvalidVertex {
                        index,
                        vertex_count,
                    });
                }
            }
            if length.is_nan() || length < 0.0 {
                return Err(GeodesicError::InvalidEdgeLength { from, to, length });
            }
            Self::add_edge(&mut neighbors, from, to, length);
        }

        Ok(Self { neighbors })
    }

    /// Add an edge between two vertices (if not already present).
    fn add_edge(neighbors: &mut [Vec<(u32, f64)>], v0: u32, v1: u32, length: f64) {
        if v0 == v1 {
            return;
        }
        if !neighbors[v0 as usize].iter().any(|&(n, _)| n == v1) {
            neighbors[v0 as usize].push((v1, length));
        }
        if !neighbors[v1 as usize].iter().any(|&(n, _)| n == v0) {
            neighbors[v1 as usize].push((v0, length));
        }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Get the neighbors of a vertex as `(index, edge length)` pairs.
    ///
    /// Out-of-range vertices have no neighbors.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[(u32, f64)] {
        self.neighbors.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Get the neighbor indices of a vertex.
    #[must_use]
    pub fn neighbor_indices(&self, vertex: usize) -> Vec<usize> {
        self.neighbors(vertex)
            .iter()
            .map(|&(n, _)| n as usize)
            .collect()
    }

    /// Check if the adjacency list is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Get the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        // Each edge is stored twice (once for each direction)
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
