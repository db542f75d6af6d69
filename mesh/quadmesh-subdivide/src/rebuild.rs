//! Reassembly of the subdivided quad mesh.

// Offsets are checked against u32::MAX before narrowing
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;
use quadmesh_types::{QuadMesh, Vertex};

use crate::error::{SubdivideError, SubdivideResult};
use crate::topology::{EdgeTopology, check_indices, edge_key};

/// Assemble the subdivided mesh from the three point families.
///
/// The vertex array is `[new_points][edge_points][face_points]`. Each parent
/// face `i` with corners `c0..c3` yields four children, one per corner `j`:
///
/// ```text
/// (c[j], edge(c[j], c[j+1]), face i, edge(c[j], c[j-1]))
/// ```
///
/// which keeps the parent's winding.
///
/// # Errors
///
/// - [`SubdivideError::PointCountMismatch`] if there is not one edge point per
///   topology edge and one face point per face.
/// - [`SubdivideError::IndexOutOfBounds`] if a corner has no vertex point.
/// - [`SubdivideError::IndexOverflow`] if the vertex array would not be
///   addressable with `u32` indices.
/// - [`SubdivideError::MissingEdge`] if `topology` was not derived from
///   `faces`.
pub fn rebuild(
    faces: &[[u32; 4]],
    new_points: Vec<Point3<f64>>,
    edge_points: Vec<Point3<f64>>,
    face_points: Vec<Point3<f64>>,
    topology: &EdgeTopology,
) -> SubdivideResult<QuadMesh> {
    if edge_points.len() != topology.len() {
        return Err(SubdivideError::PointCountMismatch {
            family: "edge",
            expected: topology.len(),
            found: edge_points.len(),
        });
    }
    if face_points.len() != faces.len() {
        return Err(SubdivideError::PointCountMismatch {
            family: "face",
            expected: faces.len(),
            found: face_points.len(),
        });
    }
    check_indices(faces, new_points.len())?;

    let total = new_points.len() + edge_points.len() + face_points.len();
    if u32::try_from(total).is_err() {
        return Err(SubdivideError::IndexOverflow(total));
    }
    let edge_base = new_points.len() as u32;
    let face_base = edge_base + edge_points.len() as u32;

    let vertices: Vec<Vertex> = new_points
        .into_iter()
        .chain(edge_points)
        .chain(face_points)
        .map(Vertex::new)
        .collect();

    let edge_vertex = |v0: u32, v1: u32| {
        topology
            .index_of(v0, v1)
            .map(|e| edge_base + e as u32)
            .ok_or_else(|| {
                let (p1, p2) = edge_key(v0, v1);
                SubdivideError::MissingEdge { p1, p2 }
            })
    };

    let mut new_faces = Vec::with_capacity(faces.len() * 4);
    for (i, face) in faces.iter().enumerate() {
        let face_vertex = face_base + i as u32;
        for j in 0..4 {
            let corner = face[j];
            let leaving = edge_vertex(corner, face[(j + 1) % 4])?;
            let entering = edge_vertex(corner, face[(j + 3) % 4])?;
            new_faces.push([corner, leaving, face_vertex, entering]);
        }
    }

    Ok(QuadMesh::from_parts(vertices, new_faces))
}
