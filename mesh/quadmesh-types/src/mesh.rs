//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Vertex};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// This is the hand-off format for renderers and normal estimation, produced
/// by [`QuadMesh::triangulate`](crate::QuadMesh::triangulate). Faces use
/// counter-clockwise winding when viewed from outside.
///
/// # Example
///
/// ```
/// use quadmesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ];
/// let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
///
/// assert_eq!(mesh.face_count(), 1);
/// assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
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

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    fn corners(&self, [i0, i1, i2]: [u32; 3]) -> [Point3<f64>; 3] {
        [
            self.vertices[i0 as usize].position,
            self.vertices[i1 as usize].position,
            self.vertices[i2 as usize].position,
        ]
    }

    /// Compute the signed volume enclosed by the mesh.
    ///
    /// Sum of the signed tetrahedra spanned by each face and the origin.
    /// Positive for a closed mesh with outward winding, meaningless for an
    /// open one.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|&face| {
                let [a, b, c] = self.corners(face);
                a.coords.dot(&b.coords.cross(&c.coords))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Absolute value of [`signed_volume`](Self::signed_volume).
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Total surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&face| {
                let [a, b, c] = self.corners(face);
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }
}

impl MeshTopology for IndexedMesh {
    type Face = [u32; 3];

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
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
