//! Math utilities and types
//!
//! Provides the vector and transform types used by the collision core.
//! Positions and free vectors share one type; all operations return fresh values.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Rotation3, Vector3, Vector4};

/// 3D vector type, used for both positions and directions
pub type Vec3 = Vector3<f64>;

/// RGBA color used by debug drawing
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f64>;

/// Three independent Euler angles in radians
///
/// The angles are stored per axis. How they are composed depends on the
/// consumer: [`Transform`] uses a conventional rotation matrix, while the
/// emitter ray builder uses its own sequential composition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerRotation {
    /// Rotation around the X axis (pitch)
    pub x: f64,
    /// Rotation around the Y axis (yaw)
    pub y: f64,
    /// Rotation around the Z axis (roll)
    pub z: f64,
}

impl EulerRotation {
    /// Create a rotation from per-axis angles
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotation matrix applying X, then Y, then Z (intrinsic XYZ order)
    pub fn to_rotation(self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vec3::x_axis(), self.x)
            * Rotation3::from_axis_angle(&Vec3::y_axis(), self.y)
            * Rotation3::from_axis_angle(&Vec3::z_axis(), self.z)
    }

    /// Component-wise sum, used by rotate drags
    #[must_use]
    pub fn offset(self, delta: Vec3) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler rotation
    pub rotation: EulerRotation,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: EulerRotation::default(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: EulerRotation) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_rotation().to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let scaled = point.component_mul(&self.scale);
        self.rotation.to_rotation() * scaled + self.position
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Round to a number of decimal places, halves rounding towards +infinity
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor + 0.5).floor() / factor
    }

    /// True when `angle` lies in [-pi/2, pi/2]
    pub fn within_quarter_turn(angle: f64) -> bool {
        (-constants::HALF_PI..=constants::HALF_PI).contains(&angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_point_applies_scale_rotation_translation() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: EulerRotation::new(0.0, constants::HALF_PI, 0.0),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        // (1,0,0) scaled to (2,0,0), yawed a quarter turn to (0,0,-2)
        let p = transform.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Vec3::new(1.0, 2.0, 1.0), epsilon = 1e-12);

        let m = transform.to_matrix();
        let q = m.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(q.coords, p, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to_matches_half_up() {
        assert_eq!(utils::round_to(0.0625, 3), 0.063);
        assert_eq!(utils::round_to(-0.0625, 3), -0.062);
        assert_eq!(utils::round_to(-10.0, 3), -10.0);
    }

    #[test]
    fn test_within_quarter_turn_is_inclusive() {
        assert!(utils::within_quarter_turn(constants::HALF_PI));
        assert!(utils::within_quarter_turn(-constants::HALF_PI));
        assert!(!utils::within_quarter_turn(constants::HALF_PI + 1e-9));
    }
}
