//! Indexed quad mesh and quad primitives.

use crate::error::{MeshError, MeshResult};
use crate::{Aabb, IndexedMesh, MeshBounds, MeshTopology, Vertex};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed mesh whose faces are all quadrilaterals.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - dense, 0-based vertex array
/// - `faces`: `Vec<[u32; 4]>` - quads as vertex indices
///
/// # Winding Order
///
/// Corners are listed counter-clockwise when viewed from outside. Consecutive
/// corners `(i, i + 1 mod 4)` are the face's boundary edges in traversal order.
///
/// # Example
///
/// ```
/// use quadmesh_types::{QuadMesh, Vertex, MeshTopology};
///
/// let mut mesh = QuadMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2, 3]);
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Quad faces as indices into the vertex array.
    pub faces: Vec<[u32; 4]>,
}

impl QuadMesh {
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
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 4]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from flat coordinate and index buffers.
    ///
    /// `positions` is `[x0, y0, z0, x1, ...]` and `indices` holds four
    /// corners per face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RaggedPositions`] or [`MeshError::RaggedIndices`]
    /// if a buffer length is not a multiple of 3 or 4 respectively.
    ///
    /// # Example
    ///
    /// ```
    /// use quadmesh_types::{QuadMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = QuadMesh::from_raw(&positions, &[0, 1, 2, 3])?;
    /// assert_eq!(mesh.face_count(), 1);
    /// # Ok::<(), quadmesh_types::MeshError>(())
    /// ```
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> MeshResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::RaggedPositions(positions.len()));
        }
        if indices.len() % 4 != 0 {
            return Err(MeshError::RaggedIndices(indices.len()));
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();
        let faces = indices
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();

        Ok(Self { vertices, faces })
    }

    /// Create a mesh from general polygons, requiring every one to be a quad.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NonQuadFace`] naming the first polygon that does
    /// not have exactly four corners.
    pub fn from_polygons(vertices: Vec<Vertex>, polygons: &[Vec<u32>]) -> MeshResult<Self> {
        let faces = polygons
            .iter()
            .enumerate()
            .map(|(face, polygon)| {
                <[u32; 4]>::try_from(polygon.as_slice()).map_err(|_| MeshError::NonQuadFace {
                    face,
                    corners: polygon.len(),
                })
            })
            .collect::<MeshResult<Vec<_>>>()?;

        Ok(Self { vertices, faces })
    }

    /// Iterate over vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.vertices.iter().map(|v| &v.position)
    }

    /// Reverse the winding of every face.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.reverse();
        }
    }

    /// Split every quad `(a, b, c, d)` into triangles `(a, b, c)` and `(a, c, d)`.
    ///
    /// Vertices are shared, so the result has the same vertex count and twice
    /// the face count. Winding is preserved.
    #[must_use]
    pub fn triangulate(&self) -> IndexedMesh {
        let faces = self
            .faces
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect();
        IndexedMesh::from_parts(self.vertices.clone(), faces)
    }
}

impl MeshTopology for QuadMesh {
    type Face = [u32; 4];

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

    fn face(&self, index: usize) -> Option<[u32; 4]> {
        self.faces.get(index).copied()
    }
}

impl MeshBounds for QuadMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions())
    }
}

/// Create a closed unit cube from (0,0,0) to (1,1,1) as six outward quads.
///
/// Every corner has valence 3.
///
/// # Example
///
/// ```
/// use quadmesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> QuadMesh {
    let mut mesh = QuadMesh::with_capacity(8, 6);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    mesh.faces.push([0, 3, 2, 1]); // bottom, -Z
    mesh.faces.push([4, 5, 6, 7]); // top, +Z
    mesh.faces.push([0, 1, 5, 4]); // front, -Y
    mesh.faces.push([3, 7, 6, 2]); // back, +Y
    mesh.faces.push([0, 4, 7, 3]); // left, -X
    mesh.faces.push([1, 2, 6, 5]); // right, +X

    mesh
}

/// Create an open planar patch of `nx` by `ny` unit quads on the z = 0 plane.
///
/// Vertex `(i, j)` sits at `(i, j, 0)` with index `j * (nx + 1) + i`. Faces
/// face +Z. The outer ring of edges is a free boundary.
///
/// # Example
///
/// ```
/// use quadmesh_types::{quad_grid, MeshTopology};
///
/// let strip = quad_grid(2, 1);
/// assert_eq!(strip.vertex_count(), 6);
/// assert_eq!(strip.faces, vec![[0, 1, 4, 3], [1, 2, 5, 4]]);
/// ```
///
/// # Panics
///
/// Panics if the grid needs more than `u32::MAX` vertices, since its corners
/// could not be indexed.
#[must_use]
pub fn quad_grid(nx: u32, ny: u32) -> QuadMesh {
    let vertex_count = (u64::from(nx) + 1)
        .checked_mul(u64::from(ny) + 1)
        .filter(|&n| n <= u64::from(u32::MAX));
    let Some(vertex_count) = vertex_count else {
        panic!("a {nx} x {ny} grid exceeds u32 vertex indexing");
    };
    let face_count = u64::from(nx) * u64::from(ny);

    // Capacity is only a hint
    let mut mesh = QuadMesh::with_capacity(
        usize::try_from(vertex_count).unwrap_or(0),
        usize::try_from(face_count).unwrap_or(0),
    );

    let row = nx + 1;

    for j in 0..=ny {
        for i in 0..=nx {
            mesh.vertices
                .push(Vertex::from_coords(f64::from(i), f64::from(j), 0.0));
        }
    }

    for j in 0..ny {
        for i in 0..nx {
            let v = j * row + i;
            mesh.faces.push([v, v + 1, v + 1 + row, v + row]);
        }
    }

    mesh
}
