//! Catmull-Clark subdivision for quad meshes.
//!
//! Each pass turns every quad into four and moves the mesh one step closer to
//! its smooth limit surface:
//!
//! - **Topology**: edges are not stored in a quad mesh, so they are derived
//!   from the faces and keyed by their sorted endpoint indices
//! - **Point rules**: face points, edge points and repositioned original
//!   vertices, in that order
//! - **Rebuild**: the new vertex array is `[vertex points][edge points][face points]`
//!   and each quad is replaced by one child per corner
//!
//! Normals, shading and GPU upload are out of scope; compute normals on the
//! output with whatever the renderer uses.
//!
//! # Layer 0 Crate
//!
//! This crate has **zero rendering dependencies** and performs no I/O.
//!
//! # Examples
//!
//! A single pass:
//!
//! ```
//! use quadmesh_types::{unit_cube, MeshTopology};
//! use quadmesh_subdivide::catmull_clark;
//!
//! let cube = unit_cube();
//! let smooth = catmull_clark(&cube)?;
//!
//! // 8 vertex points + 12 edge points + 6 face points
//! assert_eq!(smooth.vertex_count(), 26);
//! assert_eq!(smooth.face_count(), 24);
//! # Ok::<(), quadmesh_subdivide::SubdivideError>(())
//! ```
//!
//! Several passes with a size guard:
//!
//! ```
//! use quadmesh_types::unit_cube;
//! use quadmesh_subdivide::{subdivide_mesh, SubdivideParams};
//!
//! let params = SubdivideParams::new()
//!     .with_iterations(3)
//!     .with_max_faces(1_000);
//!
//! let result = subdivide_mesh(&unit_cube(), &params)?;
//!
//! // 6 * 4^3 = 384 faces after 3 iterations
//! assert_eq!(result.final_faces, 384);
//! println!("{result}");
//! # Ok::<(), quadmesh_subdivide::SubdivideError>(())
//! ```
//!
//! # Boundaries
//!
//! Open meshes are accepted. A boundary edge counts its single face point
//! twice, keeping the edge rule's 1/4 weights. Boundary vertices are moved
//! with the same rule as interior ones, using their face count as valence, so
//! open borders shrink more than textbook Catmull-Clark would.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod params;
mod points;
mod rebuild;
mod result;
mod subdivide;
mod topology;

pub use error::{SubdivideError, SubdivideResult};
pub use params::SubdivideParams;
pub use points::{edge_points, face_points, vertex_points};
pub use rebuild::rebuild;
pub use result::SubdivisionResult;
pub use subdivide::{catmull_clark, subdivide_mesh};
pub use topology::{Edge, EdgeKey, EdgeTopology, derive_edges, edge_key};
