//! Procedural generation of the step-pyramid landmark.
//!
//! Every generator validates its configuration up front and returns an owned,
//! immutable [`MeshBuffer`] of flat-shaded triangles.

pub mod cuboid;
pub mod error;
pub mod ground;
pub mod landmark;
pub mod mesh;
pub mod pyramid;
pub mod sphere;
pub mod staircase;
pub mod temple;

pub use cuboid::*;
pub use error::GenerationError;
pub use ground::*;
pub use landmark::*;
pub use mesh::*;
pub use pyramid::*;
pub use sphere::*;
pub use staircase::*;
pub use temple::*;
