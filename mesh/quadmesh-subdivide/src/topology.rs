//! Edge topology derived from a quad face list.
//!
//! Quad meshes only store faces. Edges, and which faces share them, are
//! recovered here by walking every face boundary and keying each edge by its
//! canonical endpoint pair.

// Face indices are stored as u32 like vertex indices
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::error::{SubdivideError, SubdivideResult};

/// Canonical edge key: endpoint indices with the smaller one first.
pub type EdgeKey = (u32, u32);

/// Normalize edge so smaller vertex index comes first.
///
/// Both faces sharing an edge traverse it in opposite directions, so this is
/// what makes them agree on a single key.
#[must_use]
pub const fn edge_key(v0: u32, v1: u32) -> EdgeKey {
    if v0 <= v1 { (v0, v1) } else { (v1, v0) }
}

/// An edge of the mesh and the faces incident to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Smaller endpoint index.
    pub p1: u32,
    /// Larger endpoint index.
    pub p2: u32,
    /// First face that referenced this edge.
    pub f1: u32,
    /// Second incident face, `None` on a boundary edge.
    pub f2: Option<u32>,
    /// Number of distinct faces referencing this edge.
    pub incident_faces: usize,
}

impl Edge {
    fn new((p1, p2): EdgeKey, face: u32) -> Self {
        Self {
            p1,
            p2,
            f1: face,
            f2: None,
            incident_faces: 1,
        }
    }

    fn add_face(&mut self, face: u32) {
        if self.f1 == face || self.f2 == Some(face) {
            return;
        }
        if self.f2.is_none() {
            self.f2 = Some(face);
        }
        self.incident_faces += 1;
    }

    /// Canonical key of this edge.
    #[must_use]
    pub const fn key(&self) -> EdgeKey {
        (self.p1, self.p2)
    }

    /// Check if only one face touches this edge.
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.f2.is_none()
    }

    /// Check if more than two faces share this edge.
    #[must_use]
    pub const fn is_non_manifold(&self) -> bool {
        self.incident_faces > 2
    }
}

/// Derived edge list plus the key lookup used to resolve edges by endpoints.
///
/// Edges are listed in order of first appearance while walking faces, so the
/// order is deterministic for a given face list.
#[derive(Debug, Clone, Default)]
pub struct EdgeTopology {
    edges: Vec<Edge>,
    lookup: HashMap<EdgeKey, usize>,
}

impl EdgeTopology {
    /// All derived edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edges were derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Position in [`edges`](Self::edges) of the edge between `v0` and `v1`,
    /// in either order.
    #[must_use]
    pub fn index_of(&self, v0: u32, v1: u32) -> Option<usize> {
        self.lookup.get(&edge_key(v0, v1)).copied()
    }

    /// The edge between `v0` and `v1`, in either order.
    #[must_use]
    pub fn get(&self, v0: u32, v1: u32) -> Option<&Edge> {
        self.index_of(v0, v1).map(|i| &self.edges[i])
    }

    /// First edge shared by more than two faces, if any.
    #[must_use]
    pub fn first_non_manifold(&self) -> Option<&Edge> {
        self.edges.iter().find(|e| e.is_non_manifold())
    }

    /// Number of boundary edges.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }
}

/// Derive the edge set of a quad face list.
///
/// Each face contributes its four boundary edges `(c[j], c[(j + 1) % 4])`.
/// Never fails: an empty face list gives an empty topology.
///
/// # Examples
///
/// ```
/// use quadmesh_subdivide::derive_edges;
/// use quadmesh_types::quad_grid;
///
/// let strip = quad_grid(2, 1);
/// let topology = derive_edges(&strip.faces);
///
/// assert_eq!(topology.len(), 7);
/// let shared = topology.get(4, 1).expect("shared edge");
/// assert_eq!((shared.f1, shared.f2), (0, Some(1)));
/// ```
#[must_use]
pub fn derive_edges(faces: &[[u32; 4]]) -> EdgeTopology {
    let mut edges: Vec<Edge> = Vec::with_capacity(faces.len() * 2 + 4);
    let mut lookup: HashMap<EdgeKey, usize> = HashMap::with_capacity(faces.len() * 2 + 4);

    for (fi, face) in faces.iter().enumerate() {
        let fi = fi as u32;
        for j in 0..4 {
            let key = edge_key(face[j], face[(j + 1) % 4]);
            match lookup.entry(key) {
                Entry::Occupied(slot) => edges[*slot.get()].add_face(fi),
                Entry::Vacant(slot) => {
                    slot.insert(edges.len());
                    edges.push(Edge::new(key, fi));
                }
            }
        }
    }

    EdgeTopology { edges, lookup }
}

/// Reject the first face corner that indexes past `vertex_count`.
pub(crate) fn check_indices(faces: &[[u32; 4]], vertex_count: usize) -> SubdivideResult<()> {
    for (face, corners) in faces.iter().enumerate() {
        if let Some(&index) = corners.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(SubdivideError::IndexOutOfBounds {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use quadmesh_types::{QuadMesh, quad_grid, unit_cube};

    fn edge_signature(topology: &EdgeTopology) -> HashSet<(EdgeKey, usize)> {
        topology
            .edges()
            .iter()
            .map(|e| (e.key(), e.incident_faces))
            .collect()
    }

    #[test]
    fn test_edge_key() {
        assert_eq!(edge_key(0, 1), (0, 1));
        assert_eq!(edge_key(1, 0), (0, 1));
        assert_eq!(edge_key(5, 3), (3, 5));
    }

    #[test]
    fn test_no_faces_no_edges() {
        let topology = derive_edges(&[]);
        assert!(topology.is_empty());
        assert_eq!(topology.index_of(0, 1), None);
    }

    #[test]
    fn test_single_quad_all_boundary() {
        let quad = quad_grid(1, 1);
        let topology = derive_edges(&quad.faces);
        assert_eq!(topology.len(), 4);
        assert_eq!(topology.boundary_count(), 4);
        assert!(topology.edges().iter().all(|e| e.f1 == 0 && e.f2.is_none()));
    }

    #[test]
    fn test_first_appearance_order() {
        let quad = quad_grid(1, 1); // [0, 1, 3, 2]
        let topology = derive_edges(&quad.faces);
        let keys: Vec<EdgeKey> = topology.edges().iter().map(Edge::key).collect();
        assert_eq!(keys, vec![(0, 1), (1, 3), (2, 3), (0, 2)]);
    }

    #[test]
    fn test_strip_shares_one_edge() {
        let strip = quad_grid(2, 1);
        let topology = derive_edges(&strip.faces);
        assert_eq!(topology.len(), 7);
        assert_eq!(topology.boundary_count(), 6);

        let shared = topology.get(1, 4).unwrap();
        assert_eq!(shared.key(), (1, 4));
        assert_eq!(shared.f1, 0);
        assert_eq!(shared.f2, Some(1));
        assert!(!shared.is_boundary());
    }

    #[test]
    fn test_cube_is_closed() {
        let cube = unit_cube();
        let topology = derive_edges(&cube.faces);
        assert_eq!(topology.len(), 12);
        assert_eq!(topology.boundary_count(), 0);
        assert!(topology.first_non_manifold().is_none());
        assert!(topology.edges().iter().all(|e| e.incident_faces == 2));
    }

    #[test]
    fn test_lookup_matches_edge_list() {
        let grid = quad_grid(3, 3);
        let topology = derive_edges(&grid.faces);
        for (i, edge) in topology.edges().iter().enumerate() {
            assert_eq!(topology.index_of(edge.p1, edge.p2), Some(i));
            assert_eq!(topology.index_of(edge.p2, edge.p1), Some(i));
        }
    }

    #[test]
    fn test_winding_reversal_gives_same_edges() {
        let mut cube = unit_cube();
        let forward = edge_signature(&derive_edges(&cube.faces));
        cube.flip_winding();
        let reversed = edge_signature(&derive_edges(&cube.faces));
        assert_eq!(forward, reversed);

        let mut grid = quad_grid(3, 2);
        let forward = edge_signature(&derive_edges(&grid.faces));
        grid.flip_winding();
        assert_eq!(forward, edge_signature(&derive_edges(&grid.faces)));
    }

    #[test]
    fn test_non_manifold_edge_is_counted() {
        // Three quads fanned around edge (0, 1)
        let mesh = QuadMesh::from_parts(
            Vec::new(),
            vec![[0, 1, 2, 3], [1, 0, 4, 5], [0, 1, 6, 7]],
        );
        let topology = derive_edges(&mesh.faces);
        let fan = topology.first_non_manifold().expect("fan edge");
        assert_eq!(fan.key(), (0, 1));
        assert_eq!(fan.incident_faces, 3);
        assert_eq!((fan.f1, fan.f2), (0, Some(1)));
    }
}
