//! Error types for Catmull-Clark subdivision.

use thiserror::Error;

/// Errors that can occur during subdivision.
///
/// Every variant is fatal: subdivision never returns partial output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubdivideError {
    /// A face references a vertex past the end of the vertex array.
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Offending face.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Length of the vertex array.
        vertex_count: usize,
    },

    /// A vertex is not referenced by any face, so its valence is zero.
    #[error("Vertex {0} has no incident faces")]
    IsolatedVertex(u32),

    /// An edge is shared by more than two faces.
    #[error("Edge ({p1}, {p2}) is shared by {faces} faces, at most 2 are supported")]
    NonManifoldEdge {
        /// Smaller endpoint index.
        p1: u32,
        /// Larger endpoint index.
        p2: u32,
        /// Number of incident faces.
        faces: usize,
    },

    /// The rebuild step asked for an edge the topology pass never derived.
    #[error("Internal error: edge ({p1}, {p2}) missing from edge lookup")]
    MissingEdge {
        /// Smaller endpoint index.
        p1: u32,
        /// Larger endpoint index.
        p2: u32,
    },

    /// A point family handed to the rebuild step does not match the mesh it
    /// was computed from.
    #[error("Internal error: expected {expected} {family} points, got {found}")]
    PointCountMismatch {
        /// Which family is off: `"edge"` or `"face"`.
        family: &'static str,
        /// Count implied by the faces and topology.
        expected: usize,
        /// Count actually supplied.
        found: usize,
    },

    /// The subdivided mesh would need vertex indices beyond `u32::MAX`.
    #[error("Subdivided mesh needs {0} vertices, which exceeds u32 indexing")]
    IndexOverflow(usize),

    /// Invalid iteration count.
    #[error("Invalid iteration count: {0} (must be >= 1)")]
    InvalidIterations(u32),

    /// Mesh would exceed maximum size.
    #[error("Subdivision would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after subdivision.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
