//! Subdivision entry points.

use quadmesh_types::QuadMesh;
use tracing::{debug, warn};

use crate::error::{SubdivideError, SubdivideResult};
use crate::params::SubdivideParams;
use crate::points::{edge_points, face_points, vertex_points};
use crate::rebuild::rebuild;
use crate::result::SubdivisionResult;
use crate::topology::{check_indices, derive_edges};

/// Apply one pass of Catmull-Clark subdivision.
///
/// Derives edges, computes face, edge and vertex points, then stitches four
/// child quads per input quad. The result has `V + E + F` vertices and `4F`
/// faces. All lookups are local to the call, so independent meshes can be
/// subdivided from different threads.
///
/// # Errors
///
/// - [`SubdivideError::IndexOutOfBounds`] if a face references a missing vertex
/// - [`SubdivideError::NonManifoldEdge`] if an edge is shared by three or more faces
/// - [`SubdivideError::IsolatedVertex`] if a vertex belongs to no face
/// - [`SubdivideError::IndexOverflow`] if the result needs more than `u32::MAX` vertices
///
/// # Examples
///
/// ```
/// use quadmesh_types::{unit_cube, MeshTopology};
/// use quadmesh_subdivide::catmull_clark;
///
/// let cube = unit_cube();
/// let smooth = catmull_clark(&cube)?;
///
/// assert_eq!(smooth.face_count(), 24);
/// assert_eq!(smooth.vertex_count(), 8 + 12 + 6);
/// # Ok::<(), quadmesh_subdivide::SubdivideError>(())
/// ```
pub fn catmull_clark(mesh: &QuadMesh) -> SubdivideResult<QuadMesh> {
    check_indices(&mesh.faces, mesh.vertices.len())?;

    let topology = derive_edges(&mesh.faces);
    if let Some(edge) = topology.first_non_manifold() {
        return Err(SubdivideError::NonManifoldEdge {
            p1: edge.p1,
            p2: edge.p2,
            faces: edge.incident_faces,
        });
    }

    let face_points = face_points(mesh);
    let edge_points = edge_points(mesh, &topology, &face_points);
    let new_points = vertex_points(mesh, &topology, &face_points)?;

    debug!(
        "Catmull-Clark pass: {} vertices, {} edges ({} boundary), {} faces",
        mesh.vertices.len(),
        topology.len(),
        topology.boundary_count(),
        mesh.faces.len()
    );

    rebuild(&mesh.faces, new_points, edge_points, face_points, &topology)
}

/// Subdivide a quad mesh repeatedly according to `params`.
///
/// Each pass feeds the previous pass's output into a fresh call to
/// [`catmull_clark`].
///
/// # Errors
///
/// Returns an error if:
/// - The iteration count is 0
/// - The resulting mesh would exceed `max_faces`
/// - Any pass rejects the mesh (see [`catmull_clark`])
///
/// # Examples
///
/// ```
/// use quadmesh_types::unit_cube;
/// use quadmesh_subdivide::{subdivide_mesh, SubdivideParams};
///
/// let params = SubdivideParams::new().with_iterations(2);
/// let result = subdivide_mesh(&unit_cube(), &params)?;
///
/// // 6 * 4^2 = 96 faces after 2 iterations
/// assert_eq!(result.final_faces, 96);
/// assert_eq!(result.final_vertices, 98);
/// # Ok::<(), quadmesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_mesh(
    mesh: &QuadMesh,
    params: &SubdivideParams,
) -> SubdivideResult<SubdivisionResult> {
    if params.iterations == 0 {
        return Err(SubdivideError::InvalidIterations(0));
    }

    // Check projected size
    let projected = params.expected_faces(mesh.faces.len());
    if projected > params.max_faces {
        return Err(SubdivideError::MeshTooLarge {
            current: mesh.faces.len(),
            projected,
            max: params.max_faces,
        });
    }

    debug!(
        "Subdividing mesh: {} faces, {} vertices, {} iterations",
        mesh.faces.len(),
        mesh.vertices.len(),
        params.iterations
    );

    let mut current = catmull_clark(mesh)
        .inspect_err(|err| warn!("Catmull-Clark pass 1 rejected mesh: {err}"))?;
    for i in 1..params.iterations {
        current = catmull_clark(&current)
            .inspect_err(|err| warn!("Catmull-Clark pass {} rejected mesh: {err}", i + 1))?;
        debug!(
            "Iteration {}: {} faces, {} vertices",
            i + 1,
            current.faces.len(),
            current.vertices.len()
        );
    }

    Ok(SubdivisionResult::new(mesh, current, params.iterations))
}
