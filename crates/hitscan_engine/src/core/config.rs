//! # Unified Configuration System
//!
//! All tunables of the hitscan demo in one serializable tree: logging and
//! frame rate, bullet reach, debug colors, and the initial scene layout.
//! Files are TOML or RON, see [`Config`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::foundation::math::{EulerRotation, Transform, Vec3};
use crate::physics::emitter::{EmitterPose, DEFAULT_BULLET_LENGTH};
use crate::scene::SceneRole;

/// # Engine Configuration
///
/// Logging and scheduling behaviour shared by the whole application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Render ticks per second
    pub target_fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            target_fps: 60,
        }
    }
}

/// Bullet ray settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Maximum bullet reach in world units
    pub max_length: f64,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_BULLET_LENGTH,
        }
    }
}

/// Debug visualization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw debug shapes at all
    pub enabled: bool,
    /// Hit marker size in world units
    pub point_size: f32,
    /// RGBA fill for hit triangles
    pub hit_fill: [f32; 4],
    /// RGBA outline for every tested triangle
    pub wireframe: [f32; 4],
    /// RGBA hit point marker
    pub hit_point: [f32; 4],
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            point_size: 0.05,
            hit_fill: [1.0, 0.0, 0.0, 1.0],
            wireframe: [1.0, 1.0, 1.0, 0.25],
            hit_point: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Where a target's triangles come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshSource {
    /// Inline model-space triangles
    Triangles(Vec<[[f64; 3]; 3]>),
    /// Box with the given half extents
    Cuboid([f64; 3]),
    /// Wavefront OBJ file, loaded after scene setup
    Obj(PathBuf),
}

/// One target mesh in the initial scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Target slot (`target_a`, `target_b` or `target_c`)
    pub role: SceneRole,
    /// Placement
    #[serde(default)]
    pub transform: Transform,
    /// Geometry
    pub source: MeshSource,
}

/// Viewer camera used for pointer picking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position
    pub position: Vec3,
    /// Pitch around X in radians (negative looks down)
    pub pitch: f64,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 5.0),
            pitch: -0.8,
            fov_y_degrees: 75.0,
        }
    }
}

/// Ground grid helper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of the grid
    pub size: f64,
    /// Cells per edge
    pub divisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            divisions: 10,
        }
    }
}

/// Initial scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Starting emitter pose
    pub emitter: EmitterPose,
    /// Picking camera
    pub camera: CameraConfig,
    /// Ground grid
    pub grid: GridConfig,
    /// Target meshes
    pub targets: Vec<TargetConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            emitter: EmitterPose::new(Vec3::new(0.0, 1.0, 3.0), EulerRotation::default()),
            camera: CameraConfig::default(),
            grid: GridConfig::default(),
            targets: vec![
                TargetConfig {
                    role: SceneRole::TargetA,
                    transform: Transform::from_position(Vec3::new(0.1, 1.2, -3.0)),
                    source: MeshSource::Cuboid([0.5, 0.5, 0.5]),
                },
                TargetConfig {
                    role: SceneRole::TargetB,
                    transform: Transform::from_position(Vec3::new(3.0, 0.0, -5.0)),
                    source: MeshSource::Triangles(vec![[
                        [-1.0, 0.0, 0.0],
                        [1.0, 0.0, 0.0],
                        [0.0, 1.0, 0.0],
                    ]]),
                },
                TargetConfig {
                    role: SceneRole::TargetC,
                    transform: Transform::from_position(Vec3::new(0.0, 1.0, 5.0)),
                    source: MeshSource::Triangles(vec![[
                        [-1.0, -0.5, 0.0],
                        [1.0, -0.5, 0.0],
                        [0.0, 0.5, 0.0],
                    ]]),
                },
            ],
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HitscanConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Bullet configuration
    pub bullet: BulletConfig,
    /// Debug drawing configuration
    pub debug: DebugConfig,
    /// Initial scene
    pub scene: SceneConfig,
}

impl Config for HitscanConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let length = self.bullet.max_length;
        if !length.is_finite() || length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bullet.max_length must be finite and positive, got {length}"
            )));
        }

        if self.engine.target_fps == 0 {
            return Err(ConfigError::Invalid("engine.target_fps must be at least 1".to_string()));
        }

        if self.scene.grid.divisions == 0 {
            return Err(ConfigError::Invalid("scene.grid.divisions must be at least 1".to_string()));
        }

        let mut seen = Vec::new();
        for target in &self.scene.targets {
            if !target.role.is_target() {
                return Err(ConfigError::Invalid(format!(
                    "{} cannot be used as a target slot",
                    target.role
                )));
            }
            if seen.contains(&target.role) {
                return Err(ConfigError::Invalid(format!("{} configured twice", target.role)));
            }
            seen.push(target.role);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(HitscanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let text = r#"
            [bullet]
            max_length = 25.0

            [[scene.targets]]
            role = "target_b"
            source = { cuboid = [1.0, 2.0, 3.0] }

            [scene.targets.transform]
            position = [0.0, 0.0, -8.0]
        "#;

        let config = HitscanConfig::parse_str(text, ConfigFormat::Toml).expect("valid toml");
        assert_eq!(config.bullet.max_length, 25.0);
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.scene.targets.len(), 1);

        let target = &config.scene.targets[0];
        assert_eq!(target.role, SceneRole::TargetB);
        assert_eq!(target.source, MeshSource::Cuboid([1.0, 2.0, 3.0]));
        assert_eq!(target.transform.position, Vec3::new(0.0, 0.0, -8.0));
        assert_eq!(target.transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rejects_bad_bullet_length() {
        let text = "[bullet]\nmax_length = -1.0\n";
        let err = HitscanConfig::parse_str(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_target_role() {
        let mut config = HitscanConfig::default();
        config.scene.targets[0].role = SceneRole::Emitter;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_target_role() {
        let mut config = HitscanConfig::default();
        config.scene.targets[1].role = SceneRole::TargetA;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = HitscanConfig::default();
        let text = config.to_string_in(ConfigFormat::Ron).expect("serialize");
        let parsed = HitscanConfig::parse_str(&text, ConfigFormat::Ron).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HitscanConfig::default();
        let text = config.to_string_in(ConfigFormat::Toml).expect("serialize");
        let parsed = HitscanConfig::parse_str(&text, ConfigFormat::Toml).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_then_load_toml_file() {
        let mut config = HitscanConfig::default();
        config.bullet.max_length = 42.0;
        config.engine.log_level = "debug".to_string();

        let path = std::env::temp_dir().join(format!("hitscan_config_{}.toml", std::process::id()));
        config.save_to_file(&path).expect("save");
        let loaded = HitscanConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("load"), config);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let path = std::env::temp_dir().join("hitscan_config.json");
        let err = HitscanConfig::default().save_to_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }
}
