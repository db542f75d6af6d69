//! Traits for mesh types.

use crate::{Aabb, Vertex};
use nalgebra::Point3;

/// Trait for types that provide mesh topology information.
///
/// Implemented by both [`QuadMesh`](crate::QuadMesh) and
/// [`IndexedMesh`](crate::IndexedMesh); `Face` is the index tuple type.
pub trait MeshTopology {
    /// Index tuple for one face (`[u32; 4]` for quads, `[u32; 3]` for triangles).
    type Face: Copy;

    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces.
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Get a vertex by index, or `None` if out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face by index, or `None` if out of bounds.
    fn face(&self, index: usize) -> Option<Self::Face>;
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;

    /// Get the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
