//! # Hitscan Engine
//!
//! Bullet-versus-triangle collision for a small interactive scene: an
//! emitter fires a bounded ray along its orientation, and every triangle of
//! every target mesh is classified against it.
//!
//! ## Features
//!
//! - **Ray construction**: Euler pose to scaled bullet ray
//! - **Classification**: plane equation, segment test and same-side edge tests
//! - **Collision passes**: hit count, hit points and debug shapes per pass
//! - **Scene registry**: role-tagged nodes with slot-map handles
//! - **Configuration**: TOML or RON files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hitscan_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HitscanConfig::default();
//!     let (registry, _pending) = build_scene(&config.scene, config.bullet.max_length)?;
//!     let mut debug = CollisionDebugVisualizer::from_config(&config.debug);
//!
//!     let ray = registry.emitter_pose()?.ray(config.bullet.max_length);
//!     let report = run_collision(&ray, registry.targets(), &mut debug);
//!     println!("{} -> {}", report.vector_text(), report.count_text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

// Core engine modules
pub mod config;
pub mod core;
pub mod foundation;

pub mod assets;
pub mod debug;
pub mod input;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{load_collision_triangles, ObjError, ObjLoader},
        core::{Config, ConfigError, ConfigFormat, HitscanConfig},
        debug::{CollisionDebugVisualizer, DebugShape},
        foundation::{
            math::{EulerRotation, Transform, Vec3},
            time::{FrameTicker, Stopwatch},
        },
        input::{Gizmo, InputEvent, KeyCode, MouseButton, MouseState, TransformMode},
        physics::{build_ray, classify, run_collision, CollisionReport, EmitterPose, Intersection, Ray, Triangle},
        scene::{build_scene, PendingLoad, PickingCamera, SceneError, SceneRegistry, SceneRole},
    };
}
