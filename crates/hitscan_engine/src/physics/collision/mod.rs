//! Bullet collision detection
//!
//! # Module Organization
//!
//! - [`primitives`] - Rays, triangles and plane equations
//! - [`sign`] - Zero-tolerant sign agreement predicates
//! - [`classifier`] - Bullet ray versus single triangle classification
//! - [`mesh`] - Placed model-space meshes and the [`TriangleSource`] seam

pub mod primitives;
pub mod sign;
pub mod classifier;
pub mod mesh;

// Re-export commonly used types
pub use primitives::{Ray, Triangle, PlaneEquation};
pub use sign::{signs_agree, vectors_agree};
pub use classifier::{classify, Intersection};
pub use mesh::{shapes, MeshData, PlacedMesh, TriangleSource};
