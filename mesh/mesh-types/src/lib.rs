//! Core mesh types for surface field processing.
//!
//! This crate provides the foundational types the geodesic and dilation
//! crates build on:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`MeshTopology`] - Read-only access to vertices and faces
//!
//! # Vertex Areas
//!
//! Scalar fields living on a mesh are usually weighted by the surface area
//! each vertex represents. [`IndexedMesh::vertex_areas`] assigns every vertex
//! one third of the area of each incident triangle (barycentric cells), so
//! the areas sum to the total surface area.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! let areas = mesh.vertex_areas();
//! assert!((areas.iter().sum::<f64>() - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod mesh;
mod traits;
mod triangle;
mod vertex;

pub use mesh::{IndexedMesh, planar_grid};
pub use traits::MeshTopology;
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
