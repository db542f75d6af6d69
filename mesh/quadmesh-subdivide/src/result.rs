//! Summary of a multi-pass subdivision run.

// Counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use std::fmt;

use quadmesh_types::QuadMesh;

/// Growth factor from `before` to `after`, 1.0 when there was nothing to grow.
fn growth(before: usize, after: usize) -> f64 {
    if before == 0 {
        1.0
    } else {
        after as f64 / before as f64
    }
}

/// Output of [`subdivide_mesh`](crate::subdivide_mesh): the refined mesh plus
/// before and after counts.
#[derive(Debug, Clone)]
pub struct SubdivisionResult {
    /// The subdivided mesh.
    pub mesh: QuadMesh,

    /// Face count of the control mesh.
    pub original_faces: usize,

    /// Face count of `mesh`.
    pub final_faces: usize,

    /// Vertex count of the control mesh.
    pub original_vertices: usize,

    /// Vertex count of `mesh`.
    pub final_vertices: usize,

    /// Catmull-Clark passes applied.
    pub iterations: u32,
}

impl SubdivisionResult {
    /// Record the outcome of `iterations` passes from `control` to `mesh`.
    #[must_use]
    pub fn new(control: &QuadMesh, mesh: QuadMesh, iterations: u32) -> Self {
        Self {
            original_faces: control.faces.len(),
            final_faces: mesh.faces.len(),
            original_vertices: control.vertices.len(),
            final_vertices: mesh.vertices.len(),
            iterations,
            mesh,
        }
    }

    /// Final over original face count. Exactly `4^iterations` for a
    /// non-empty mesh.
    #[must_use]
    pub fn face_ratio(&self) -> f64 {
        growth(self.original_faces, self.final_faces)
    }

    /// Final over original vertex count.
    #[must_use]
    pub fn vertex_ratio(&self) -> f64 {
        growth(self.original_vertices, self.final_vertices)
    }

    /// Edge and face points inserted across all passes.
    #[must_use]
    pub const fn added_vertices(&self) -> usize {
        self.final_vertices.saturating_sub(self.original_vertices)
    }

    /// True when at least one pass ran on a mesh with faces.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.iterations > 0 && self.final_faces > self.original_faces
    }
}

impl fmt::Display for SubdivisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catmull-Clark x{}: {} → {} quads ({:.1}x), {} → {} vertices ({:.2}x)",
            self.iterations,
            self.original_faces,
            self.final_faces,
            self.face_ratio(),
            self.original_vertices,
            self.final_vertices,
            self.vertex_ratio()
        )
    }
}
