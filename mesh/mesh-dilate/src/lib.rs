//! Geodesic-weighted dilation of scalar fields on triangle meshes.
//!
//! Scalar data sampled on a mesh often has holes: nodes whose value is
//! missing (stored as zero) or that a region of interest marks as
//! untrustworthy. Dilation replaces each such *bad* node with a weighted
//! average of nearby *good* values.
//!
//! # Algorithm
//!
//! For each bad node, in order until one yields a non-zero total weight:
//!
//! 1. **Radius** - good nodes within the geodesic search distance
//! 2. **Neighbors** - good immediate neighbors, whatever their distance
//! 3. **Zero** - no good value reachable; the node becomes `0.0`
//!
//! A contributing node `j` at geodesic distance `d` has weight
//! `area[j] / d²`, with `d` floored at [`DISTANCE_TOLERANCE`]. Good nodes
//! are copied through unchanged, and every bad node reads only the
//! input values, so the result does not depend on processing order.
//!
//! # Surfaces
//!
//! The engine asks a [`DilationSurface`] for areas, neighbors and geodesic
//! distances. [`MeshSurface`] implements it for an
//! [`IndexedMesh`](mesh_types::IndexedMesh) using edge-graph geodesics.
//!
//! # Example
//!
//! ```
//! use mesh_dilate::{dilate, ColumnSelection, DilationParams, MeshSurface, ScalarField};
//! use mesh_types::planar_grid;
//!
//! let surface = MeshSurface::from_mesh(&planar_grid(4, 4, 1.0));
//!
//! let mut depth = vec![2.0; 16];
//! depth[5] = 0.0;
//! depth[6] = 0.0;
//! let input = ScalarField::new(16)
//!     .with_column("depth", depth)
//!     .and_then(|f| f.with_column("curvature", vec![0.5; 16]))
//!     .unwrap();
//!
//! let params = DilationParams::with_distance(1.5).column(ColumnSelection::Single(0));
//! let output = dilate(&surface, &input, None, &params).unwrap();
//!
//! assert_eq!(output.column_count(), 1);
//! let values = output.column(0).unwrap().values();
//! assert!((values[5] - 2.0).abs() < 1e-12);
//! assert!((values[6] - 2.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod dilate;
mod engine;
mod error;
mod field;
mod params;
mod surface;
mod validate;

pub use classify::{ClassificationMask, NodeClass};
pub use dilate::{ColumnDilation, ColumnStats, DILATED_SUFFIX, dilate, dilate_column};
pub use engine::{DISTANCE_TOLERANCE, FillTier, NodeFill, WeightedAverager, contribution_weight};
pub use error::{DilateError, DilateResult};
pub use field::{ScalarColumn, ScalarField};
pub use params::{ColumnSelection, DilationParams};
pub use surface::{DilationSurface, GeodesicQuery, MeshSurface, NodeTopology};
pub use validate::validate;
