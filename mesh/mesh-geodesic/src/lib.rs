//! Geodesic (surface) distance queries for triangle meshes.
//!
//! This crate answers the distance questions that surface field
//! algorithms ask of a mesh:
//!
//! - **Full field** - distance from one vertex to every vertex
//! - **Radius query** - every vertex within a geodesic radius of a source
//! - **Candidate query** - distances from a source to an explicit vertex set
//!
//! # Algorithm
//!
//! The implementation uses Dijkstra's algorithm on the mesh edge graph.
//! Edge weights are Euclidean distances between vertices, so distances are
//! exact **along edges** and approximate the true surface geodesic. Graphs
//! that are not triangle meshes can be built with
//! [`AdjacencyList::from_edges`].
//!
//! # Example
//!
//! ```
//! use mesh_geodesic::GeodesicSolver;
//! use mesh_types::{IndexedMesh, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let solver = GeodesicSolver::new(&mesh);
//! let distances = solver.compute_from_vertex(0);
//!
//! assert!(distances.distance(0) < 1e-10);
//! assert!((distances.distance(1) - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adjacency;
mod dijkstra;
mod distance;
mod error;

pub use adjacency::AdjacencyList;
pub use dijkstra::GeodesicSolver;
pub use distance::DistanceField;
pub use error::{GeodesicError, GeodesicResult};
