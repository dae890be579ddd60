//! Debug module for visualization and debugging tools
//!
//! Debug shapes are plain data; a host renderer walks them each frame.

pub mod draw;
pub mod collision_debug;

pub use draw::{DebugShape, DebugDrawSystem, DebugGroupId};
pub use collision_debug::{CollisionDebugVisualizer, CollisionDebugColors, BULLET_PASS_GROUP};
