//! Subdivision parameters.

/// Parameters for repeated Catmull-Clark subdivision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivideParams {
    /// Number of subdivision passes.
    pub iterations: u32,

    /// Maximum faces allowed in result (prevents memory issues).
    pub max_faces: usize,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            iterations: 1,
            max_faces: 10_000_000, // 10M faces max
        }
    }
}

impl SubdivideParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of iterations.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Calculate expected face count after subdivision.
    ///
    /// Every pass turns each quad into 4, so this is `current * 4^iterations`,
    /// saturating at `usize::MAX`.
    #[must_use]
    pub const fn expected_faces(&self, current_faces: usize) -> usize {
        let mut faces = current_faces;
        let mut i = 0;
        while i < self.iterations {
            faces = faces.saturating_mul(4);
            i += 1;
        }
        faces
    }
}
