//! Property-based tests for Catmull-Clark subdivision.
//!
//! These tests use proptest to generate jittered quad grids and verify the
//! counting and ordering invariants of a subdivision pass.
//!
//! Run with: cargo test -p quadmesh-subdivide -- proptest

#![allow(clippy::unwrap_used, clippy::expect_used)]

use hashbrown::HashSet;
use proptest::prelude::*;
use quadmesh_subdivide::{Edge, EdgeKey, catmull_clark, derive_edges};
use quadmesh_types::{QuadMesh, Vector3, quad_grid};

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a small offset for one grid vertex.
fn arb_jitter() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-0.3..0.3f64)
}

/// Generate an `nx` by `ny` grid with every vertex nudged off the lattice.
///
/// Returns the mesh together with its dimensions.
fn arb_grid() -> impl Strategy<Value = (QuadMesh, u32, u32)> {
    (1u32..6, 1u32..6).prop_flat_map(|(nx, ny)| {
        let count = ((nx + 1) * (ny + 1)) as usize;
        prop::collection::vec(arb_jitter(), count).prop_map(move |offsets| {
            let mut mesh = quad_grid(nx, ny);
            for (vertex, [dx, dy, dz]) in mesh.vertices.iter_mut().zip(offsets) {
                vertex.position += Vector3::new(dx, dy, dz);
            }
            (mesh, nx, ny)
        })
    })
}

fn edge_keys(mesh: &QuadMesh) -> HashSet<EdgeKey> {
    derive_edges(&mesh.faces)
        .edges()
        .iter()
        .map(Edge::key)
        .collect()
}

// =============================================================================
// Property Tests: Counts
// =============================================================================

proptest! {
    /// A grid has nx(ny+1) horizontal and ny(nx+1) vertical edges.
    #[test]
    fn grid_edge_count((mesh, nx, ny) in arb_grid()) {
        let expected = (nx * (ny + 1) + ny * (nx + 1)) as usize;
        prop_assert_eq!(derive_edges(&mesh.faces).len(), expected);
    }

    /// One pass yields V + E + F vertices and 4F faces.
    #[test]
    fn pass_count_laws((mesh, nx, ny) in arb_grid()) {
        let v = mesh.vertices.len();
        let e = (nx * (ny + 1) + ny * (nx + 1)) as usize;
        let f = mesh.faces.len();

        let smooth = catmull_clark(&mesh).unwrap();
        prop_assert_eq!(smooth.vertices.len(), v + e + f);
        prop_assert_eq!(smooth.faces.len(), 4 * f);
    }

    /// Every child index addresses a vertex of the output.
    #[test]
    fn pass_produces_valid_indices((mesh, _, _) in arb_grid()) {
        let smooth = catmull_clark(&mesh).unwrap();
        let vertex_count = smooth.vertices.len() as u32;
        for face in &smooth.faces {
            for &v in face {
                prop_assert!(v < vertex_count, "Face index {} >= vertex count {}", v, vertex_count);
            }
        }
    }
}

// =============================================================================
// Property Tests: Topology
// =============================================================================

proptest! {
    /// Reversing every face's winding yields the same edge set.
    #[test]
    fn winding_reversal_keeps_edges((mesh, _, _) in arb_grid()) {
        let mut flipped = mesh.clone();
        flipped.flip_winding();
        prop_assert_eq!(edge_keys(&mesh), edge_keys(&flipped));
    }

    /// Child `4i + j` starts at corner `j` of parent `i` and meets at its face point.
    #[test]
    fn children_anchor_to_parent((mesh, _, _) in arb_grid()) {
        let smooth = catmull_clark(&mesh).unwrap();
        let face_base = smooth.vertices.len() - mesh.faces.len();
        for (i, face) in mesh.faces.iter().enumerate() {
            for (j, &corner) in face.iter().enumerate() {
                let child = smooth.faces[4 * i + j];
                prop_assert_eq!(child[0], corner);
                prop_assert_eq!(child[2] as usize, face_base + i);
            }
        }
    }

    /// Subdivision is deterministic for a given input.
    #[test]
    fn pass_is_deterministic((mesh, _, _) in arb_grid()) {
        let first = catmull_clark(&mesh).unwrap();
        let second = catmull_clark(&mesh).unwrap();
        prop_assert_eq!(first, second);
    }
}
