//! End-to-end tests for Catmull-Clark subdivision through the public API.
//!
//! Run with: cargo test -p quadmesh-subdivide --test catmull_clark

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use quadmesh_subdivide::{
    SubdivideError, SubdivideParams, catmull_clark, derive_edges, subdivide_mesh,
};
use quadmesh_types::{
    MeshError, MeshTopology, Point3, QuadMesh, Vector3, Vertex, quad_grid, unit_cube,
};

// =============================================================================
// Helpers
// =============================================================================

fn centroid(mesh: &QuadMesh, face: [u32; 4]) -> Point3<f64> {
    let sum: Vector3<f64> = face
        .iter()
        .map(|&v| mesh.vertices[v as usize].position.coords)
        .sum();
    Point3::from(sum / 4.0)
}

fn translated(mesh: &QuadMesh, offset: Vector3<f64>) -> QuadMesh {
    let mut moved = mesh.clone();
    for vertex in &mut moved.vertices {
        vertex.position += offset;
    }
    moved
}

// =============================================================================
// Counts
// =============================================================================

#[test]
fn flat_buffers_in_subdivided_cube_out() {
    #[rustfmt::skip]
    let positions = [
        0.0, 0.0, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,  1.0, 0.0, 1.0,  1.0, 1.0, 1.0,  0.0, 1.0, 1.0,
    ];
    #[rustfmt::skip]
    let indices = [
        0, 3, 2, 1,  4, 5, 6, 7,  0, 1, 5, 4,
        3, 7, 6, 2,  0, 4, 7, 3,  1, 2, 6, 5,
    ];
    let cube = QuadMesh::from_raw(&positions, &indices).expect("valid buffers");
    assert_eq!(cube, unit_cube());

    let smooth = catmull_clark(&cube).expect("closed cube");
    assert_eq!(smooth.vertex_count(), 26);
    assert_eq!(smooth.face_count(), 24);
}

#[test]
fn every_output_index_is_in_range() {
    let result = subdivide_mesh(&quad_grid(3, 2), &SubdivideParams::new().with_iterations(2))
        .expect("open grid");
    let vertex_count = result.mesh.vertex_count() as u32;
    assert!(
        result
            .mesh
            .faces
            .iter()
            .flatten()
            .all(|&v| v < vertex_count)
    );
}

#[test]
fn shared_edge_yields_one_edge_point() {
    // 6 original vertices, 7 edges, 2 faces; edge points live at 6..13
    let strip = quad_grid(2, 1);
    let smooth = catmull_clark(&strip).expect("open strip");
    assert_eq!(smooth.vertex_count(), 6 + 7 + 2);

    let mut edge_refs: Vec<u32> = smooth
        .faces
        .iter()
        .flat_map(|child| [child[1], child[3]])
        .collect();
    edge_refs.sort_unstable();
    edge_refs.dedup();
    assert_eq!(edge_refs, (6..13).collect::<Vec<_>>());
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn face_points_are_parent_centroids() {
    let cube = unit_cube();
    let smooth = catmull_clark(&cube).expect("closed cube");
    let face_base = 8 + 12;
    for (i, &face) in cube.faces.iter().enumerate() {
        let expected = centroid(&cube, face);
        let actual = smooth.vertices[face_base + i].position;
        assert_relative_eq!(actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn flat_grid_stays_flat() {
    let result = subdivide_mesh(&quad_grid(3, 3), &SubdivideParams::new().with_iterations(3))
        .expect("open grid");
    for p in result.mesh.positions() {
        assert_relative_eq!(p.z, 0.0);
    }
}

#[test]
fn commutes_with_translation() {
    let offset = Vector3::new(10.0, -3.0, 0.5);
    let cube = unit_cube();

    let moved_then_smoothed = catmull_clark(&translated(&cube, offset)).unwrap();
    let smoothed_then_moved = translated(&catmull_clark(&cube).unwrap(), offset);

    assert_eq!(moved_then_smoothed.faces, smoothed_then_moved.faces);
    for (a, b) in moved_then_smoothed
        .positions()
        .zip(smoothed_then_moved.positions())
    {
        assert_relative_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn reversed_winding_flips_orientation() {
    let mut cube = unit_cube();
    cube.flip_winding();
    let smooth = catmull_clark(&cube).expect("closed cube");
    let volume = smooth.triangulate().signed_volume();
    assert!(volume < -0.4, "volume: {volume}");
}

#[test]
fn subdivided_edges_follow_recurrence() {
    // E' = 2E + 4F on a grid: 2 * 12 + 4 * 4 = 40
    let grid = quad_grid(2, 2);
    assert_eq!(derive_edges(&grid.faces).len(), 12);
    let smooth = catmull_clark(&grid).expect("open grid");
    assert_eq!(derive_edges(&smooth.faces).len(), 40);
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn triangle_rejected_before_subdivision() {
    let vertices = quad_grid(1, 1).vertices;
    let result = QuadMesh::from_polygons(vertices, &[vec![0, 1, 3, 2], vec![0, 1, 3]]);
    assert_eq!(
        result,
        Err(MeshError::NonQuadFace {
            face: 1,
            corners: 3
        })
    );
}

#[test]
fn stray_vertex_rejected() {
    let mut cube = unit_cube();
    cube.vertices.push(Vertex::from_coords(2.0, 2.0, 2.0));
    let err = catmull_clark(&cube).unwrap_err();
    assert_eq!(err, SubdivideError::IsolatedVertex(8));
    assert!(err.to_string().contains('8'));
}
