//! Scene management
//!
//! A flat registry of role-tagged nodes: the grid helper, the emitter and its
//! bullet line, up to three target meshes, and the debug group.
//!
//! ## Architecture
//!
//! ```text
//! SceneConfig
//!      ↓  build_scene
//! SceneRegistry ──targets()──→ run_collision
//!      ↑
//! Gizmo drags / pending mesh loads
//! ```

mod builder;
mod camera;
mod registry;

pub use builder::{build_scene, grid_lines, PendingLoad, BULLET_LINE_HEIGHT, EMITTER_HALF_EXTENTS};
pub use camera::PickingCamera;
pub use registry::{NodeGeometry, NodeKey, SceneError, SceneNode, SceneRegistry, SceneRole};
