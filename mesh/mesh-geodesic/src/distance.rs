//! Distance field representation.
//!
//! Stores per-vertex distance values computed by geodesic algorithms.

/// Per-vertex distance field.
///
/// `f64::INFINITY` marks a vertex that is unreachable from the source.
#[derive(Debug, Clone)]
pub struct DistanceField {
    distances: Vec<f64>,
}

impl DistanceField {
    /// Create a new distance field with all distances set to infinity.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; vertex_count],
        }
    }

    /// Get the distance to a vertex.
    ///
    /// Returns `f64::INFINITY` if the vertex is unreachable or out of bounds.
    #[inline]
    #[must_use]
    pub fn distance(&self, vertex: usize) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Set the distance to a vertex.
    ///
    /// Returns `false` if the index is out of bounds.
    #[inline]
    pub fn set_distance(&mut self, vertex: usize, distance: f64) -> bool {
        self.distances.get_mut(vertex).is_some_and(|d| {
            *d = distance;
            true
        })
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if the distance field is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Get all distances as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    /// Count the number of reachable vertices (finite distance).
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}
