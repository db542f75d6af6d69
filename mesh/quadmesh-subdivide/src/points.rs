//! Catmull-Clark point rules.
//!
//! The three families of new points, computed in order from the original
//! mesh:
//!
//! 1. **Face points**: centroid of each quad's four corners.
//! 2. **Edge points**: mean of the two endpoints and the two adjacent face
//!    points. On a boundary edge the single face point fills both face slots,
//!    so the weights stay `1/4` each: `(p1 + p2 + 2 f1) / 4`.
//! 3. **Vertex points**: each original vertex moves to
//!    `(F + 2R + (n - 3) P) / n`, where `n` is the number of faces touching it,
//!    `F` the mean of those face points, `R` the mean of its incident edge
//!    midpoints and `P` its original position. Boundary vertices use the same
//!    rule.

// Valence and face indices are small integers
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use nalgebra::{Point3, Vector3};
use quadmesh_types::QuadMesh;

use crate::error::{SubdivideError, SubdivideResult};
use crate::topology::{EdgeTopology, check_indices};

/// Position type for internal calculations.
type Pos = Point3<f64>;

fn position(mesh: &QuadMesh, index: u32) -> &Pos {
    &mesh.vertices[index as usize].position
}

/// Compute one face point per face, parallel to `mesh.faces`.
///
/// # Panics
///
/// Panics if a face references a vertex past the end of `mesh.vertices`.
/// [`catmull_clark`](crate::catmull_clark) checks indices before calling this.
#[must_use]
pub fn face_points(mesh: &QuadMesh) -> Vec<Pos> {
    mesh.faces
        .iter()
        .map(|face| {
            let sum: Vector3<f64> = face.iter().map(|&v| position(mesh, v).coords).sum();
            Pos::from(sum / 4.0)
        })
        .collect()
}

/// Compute one edge point per derived edge, parallel to `topology.edges()`.
///
/// # Panics
///
/// Panics if an edge endpoint is past the end of `mesh.vertices`, or if
/// `face_points` is shorter than the face indices recorded in `topology`.
#[must_use]
pub fn edge_points(mesh: &QuadMesh, topology: &EdgeTopology, face_points: &[Pos]) -> Vec<Pos> {
    topology
        .edges()
        .iter()
        .map(|edge| {
            let f1 = face_points[edge.f1 as usize].coords;
            let f2 = edge.f2.map_or(f1, |f| face_points[f as usize].coords);
            let p1 = position(mesh, edge.p1).coords;
            let p2 = position(mesh, edge.p2).coords;
            Pos::from((p1 + p2 + f1 + f2) / 4.0)
        })
        .collect()
}

/// Compute the new position of every original vertex, parallel to
/// `mesh.vertices`.
///
/// # Errors
///
/// - [`SubdivideError::IndexOutOfBounds`] if a face references a missing vertex
/// - [`SubdivideError::PointCountMismatch`] if `face_points` is not parallel
///   to `mesh.faces`
/// - [`SubdivideError::IsolatedVertex`] for the first vertex no face
///   references, since its valence is zero
pub fn vertex_points(
    mesh: &QuadMesh,
    topology: &EdgeTopology,
    face_points: &[Pos],
) -> SubdivideResult<Vec<Pos>> {
    let vertex_count = mesh.vertices.len();
    check_indices(&mesh.faces, vertex_count)?;
    if face_points.len() != mesh.faces.len() {
        return Err(SubdivideError::PointCountMismatch {
            family: "face",
            expected: mesh.faces.len(),
            found: face_points.len(),
        });
    }

    // Face point sum and valence per vertex
    let mut face_sum = vec![Vector3::zeros(); vertex_count];
    let mut valence = vec![0_usize; vertex_count];
    for (face, fp) in mesh.faces.iter().zip(face_points) {
        for (j, &v) in face.iter().enumerate() {
            // A corner listed twice still touches the face once
            if face[..j].contains(&v) {
                continue;
            }
            face_sum[v as usize] += fp.coords;
            valence[v as usize] += 1;
        }
    }

    // Edge midpoint sum per vertex
    let mut midpoint_sum = vec![Vector3::zeros(); vertex_count];
    let mut midpoint_count = vec![0_usize; vertex_count];
    for edge in topology.edges() {
        let mid = nalgebra::center(position(mesh, edge.p1), position(mesh, edge.p2)).coords;
        for v in [edge.p1, edge.p2] {
            midpoint_sum[v as usize] += mid;
            midpoint_count[v as usize] += 1;
        }
    }

    mesh.vertices
        .iter()
        .enumerate()
        .map(|(vi, vertex)| {
            let n = valence[vi];
            if n == 0 {
                return Err(SubdivideError::IsolatedVertex(vi as u32));
            }
            let n = n as f64;
            let f = face_sum[vi] / n;
            let r = midpoint_sum[vi] / midpoint_count[vi] as f64;
            let p = vertex.position.coords;
            Ok(Pos::from((f + r * 2.0 + p * (n - 3.0)) / n))
        })
        .collect()
}
