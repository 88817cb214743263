//! Error types for geodesic distance computation.

use thiserror::Error;

/// Result type for geodesic operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;

/// Errors that can occur while building a geodesic graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeodesicError {
    /// Invalid vertex index.
    #[error("invalid vertex index: {index} (graph has {vertex_count} vertices)")]
    InvalidVertex {
        /// The invalid index.
        index: u32,
        /// Total number of vertices in the graph.
        vertex_count: usize,
    },

    /// Edge length that is negative or not a number.
    #[error("invalid length {length} for edge {from}-{to}")]
    InvalidEdgeLength {
        /// First endpoint.
        from: u32,
        /// Second endpoint.
        to: u32,
        /// The rejected length.
        length: f64,
    },
}
