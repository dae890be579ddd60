//! # Core Module
//!
//! Shared configuration types used by every subsystem.

pub mod config;

// Re-export commonly used config types
pub use config::{
    HitscanConfig,
    EngineConfig,
    BulletConfig,
    DebugConfig,
    SceneConfig,
    TargetConfig,
    MeshSource,
    CameraConfig,
    GridConfig,
    Config,
    ConfigError,
    ConfigFormat,
};
