//! Physics module for bullet collision detection
//!
//! Builds bullet rays from an emitter pose and classifies them against
//! target meshes, one triangle at a time.

pub mod collision;
pub mod emitter;
pub mod collision_system;

pub use collision::{
    classify,
    PlacedMesh,
    Intersection,
    Ray,
    Triangle,
    TriangleSource,
};
pub use emitter::{build_ray, EmitterPose};
pub use collision_system::{run_collision, CollisionReport, format_vector};
