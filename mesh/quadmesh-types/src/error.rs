//! Error types for quad mesh construction.

use thiserror::Error;

/// Errors raised while building a [`QuadMesh`](crate::QuadMesh) from raw data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Position buffer length is not a multiple of 3.
    #[error("Position buffer length {0} is not a multiple of 3")]
    RaggedPositions(usize),

    /// Index buffer length is not a multiple of 4.
    #[error("Index buffer length {0} is not a multiple of 4")]
    RaggedIndices(usize),

    /// A polygon does not have exactly four corners.
    #[error("Face {face} has {corners} corners, expected 4")]
    NonQuadFace {
        /// Index of the offending polygon.
        face: usize,
        /// Number of corners it has.
        corners: usize,
    },
}

/// Result type for quad mesh construction.
pub type MeshResult<T> = std::result::Result<T, MeshError>;
