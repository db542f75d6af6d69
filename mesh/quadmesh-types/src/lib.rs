//! Core quad mesh types.
//!
//! This crate provides the foundational types for quad mesh processing:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`QuadMesh`] - A mesh of quadrilaterals with indexed vertices
//! - [`IndexedMesh`] - A triangle mesh, the hand-off format for rendering
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This crate has **zero rendering dependencies**. Loading meshes from disk,
//! computing normals and uploading to a GPU are left to callers.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Winding
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use quadmesh_types::{unit_cube, MeshTopology};
//!
//! let cube = unit_cube();
//! assert_eq!(cube.face_count(), 6);
//!
//! let triangles = cube.triangulate();
//! assert_eq!(triangles.face_count(), 12);
//! assert!((triangles.volume() - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod mesh;
mod quad;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use error::{MeshError, MeshResult};
pub use mesh::IndexedMesh;
pub use quad::{QuadMesh, quad_grid, unit_cube};
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
