//! Indexed triangle mesh.

use crate::{MeshTopology, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. Faces use counter-clockwise winding when viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from flat coordinate and index arrays.
    ///
    /// Returns an empty mesh if either array length is not a multiple of 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = IndexedMesh::from_raw(&positions, &[0, 1, 2]);
    /// assert_eq!(mesh.vertex_count(), 3);
    ///
    /// let broken = IndexedMesh::from_raw(&positions[..4], &[0, 1, 2]);
    /// assert!(broken.is_empty());
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { vertices, faces }
    }

    /// Total surface area of all resolvable faces.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Per-vertex area weights.
    ///
    /// Each triangle contributes one third of its area to each of its
    /// corners. Vertices not referenced by any face get zero, and faces
    /// with out-of-range indices are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::planar_grid;
    ///
    /// let grid = planar_grid(3, 3, 1.0);
    /// let areas = grid.vertex_areas();
    /// // Center vertex touches six triangles of area 0.5
    /// assert!((areas[4] - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn vertex_areas(&self) -> Vec<f64> {
        let mut areas = vec![0.0; self.vertices.len()];
        for face_index in 0..self.faces.len() {
            let Some(tri) = self.triangle(face_index) else {
                continue;
            };
            let share = tri.area() / 3.0;
            for &v in &self.faces[face_index] {
                areas[v as usize] += share;
            }
        }
        areas
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = self.face(face_index)?;
        Some(Triangle::new(
            self.vertex(i0 as usize)?.position,
            self.vertex(i1 as usize)?.position,
            self.vertex(i2 as usize)?.position,
        ))
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        (0..self.faces.len()).filter_map(|f| self.triangle(f))
    }
}

/// Build a flat rectangular grid in the XY plane.
///
/// The grid has `cols * rows` vertices spaced `spacing` apart, numbered
/// row-major from the origin, and each cell is split into two triangles
/// along its `(x, y)`-`(x + 1, y + 1)` diagonal. Fewer than two columns or
/// rows gives a mesh with vertices but no faces.
///
/// # Example
///
/// ```
/// use mesh_types::{planar_grid, MeshTopology};
///
/// let grid = planar_grid(4, 3, 0.5);
/// assert_eq!(grid.vertex_count(), 12);
/// assert_eq!(grid.face_count(), 12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Grid sizes stay far below u32::MAX and f64 mantissa precision
pub fn planar_grid(cols: usize, rows: usize, spacing: f64) -> IndexedMesh {
    let cells = cols.saturating_sub(1) * rows.saturating_sub(1);
    let mut mesh = IndexedMesh::with_capacity(cols * rows, cells * 2);

    for y in 0..rows {
        for x in 0..cols {
            mesh.vertices.push(Vertex::from_coords(
                x as f64 * spacing,
                y as f64 * spacing,
                0.0,
            ));
        }
    }

    for y in 1..rows {
        for x in 1..cols {
            let a = ((y - 1) * cols + (x - 1)) as u32;
            let b = a + 1;
            let c = (y * cols + x) as u32;
            let d = c - 1;
            mesh.faces.push([a, b, c]);
            mesh.faces.push([a, c, d]);
        }
    }

    mesh
}
