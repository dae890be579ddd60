//! Emitter pose and bullet ray construction
//!
//! The bullet direction is derived from the emitter's Euler angles by three
//! sequential planar rotations of the canonical forward vector `(0, 0, -1)`:
//! Z in the XY plane, then X in the YZ plane, then Y in the ZX plane, each
//! step reading the components produced by the previous one. This is not a
//! rotation-matrix product, and scenes are tuned against it, so it must stay
//! exactly as written. Two sign corrections follow for roll and yaw beyond a
//! quarter turn.

use serde::{Deserialize, Serialize};

use super::collision::Ray;
use crate::foundation::math::{utils, EulerRotation, Vec3};

/// Direction a bullet travels before any rotation
pub const CANONICAL_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Default maximum bullet length in world units
pub const DEFAULT_BULLET_LENGTH: f64 = 10.0;

/// Position and orientation of the object that fires the bullet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterPose {
    /// World-space position, the ray origin
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: EulerRotation,
}

impl EmitterPose {
    /// Create a pose from position and rotation
    pub fn new(position: Vec3, rotation: EulerRotation) -> Self {
        Self { position, rotation }
    }

    /// Build this pose's bullet ray
    pub fn ray(&self, length: f64) -> Ray {
        build_ray(self.position, self.rotation, length)
    }
}

/// Unscaled bullet direction for a rotation
pub fn bullet_direction(rotation: EulerRotation) -> Vec3 {
    let (x0, y0, z0) = (CANONICAL_FORWARD.x, CANONICAL_FORWARD.y, CANONICAL_FORWARD.z);

    // Roll, XY plane
    let (sin_z, cos_z) = rotation.z.sin_cos();
    let x1 = x0 * cos_z - y0 * sin_z;
    let y1 = x0 * sin_z + y0 * cos_z;
    let z1 = z0;

    // Pitch, YZ plane
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let y2 = y1 * cos_x - z1 * sin_x;
    let z2 = y1 * sin_x + z1 * cos_x;
    let x2 = x1;

    // Yaw, ZX plane
    let (sin_y, cos_y) = rotation.y.sin_cos();
    let z3 = z2 * cos_y - x2 * sin_y;
    let x3 = z2 * sin_y + x2 * cos_y;
    let y3 = y2;

    let mut x = x3;
    let mut y = y3;

    if !utils::within_quarter_turn(rotation.z) {
        x = -x;
    }
    // No correction for pitch
    if !utils::within_quarter_turn(rotation.y) {
        y = -y;
    }

    Vec3::new(x, y, z3)
}

/// Bullet ray from an emitter position and rotation
///
/// The direction carries the full bullet `length`, so the ray's `t` in
/// [0, 1] covers the bullet's reach.
pub fn build_ray(position: Vec3, rotation: EulerRotation, length: f64) -> Ray {
    Ray::new(position, bullet_direction(rotation) * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{HALF_PI, PI};
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rotation_points_forward() {
        let ray = build_ray(Vec3::new(1.0, 2.0, 3.0), EulerRotation::default(), 10.0);
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn test_build_ray_is_bit_identical() {
        let rotation = EulerRotation::new(0.37, -1.91, 2.4);
        let a = build_ray(Vec3::new(0.5, 1.0, -2.0), rotation, 10.0);
        let b = build_ray(Vec3::new(0.5, 1.0, -2.0), rotation, 10.0);
        for i in 0..3 {
            assert_eq!(a.direction[i].to_bits(), b.direction[i].to_bits());
        }
    }

    #[test]
    fn test_pitch_up_raises_direction() {
        let dir = bullet_direction(EulerRotation::new(HALF_PI / 2.0, 0.0, 0.0));
        let s = (0.5f64).sqrt();
        assert_relative_eq!(dir, Vec3::new(0.0, s, -s), epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_quarter_turn_points_left() {
        let dir = bullet_direction(EulerRotation::new(0.0, HALF_PI, 0.0));
        assert_relative_eq!(dir, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_beyond_quarter_turn_negates_y() {
        // Pitch the ray up, then yaw past 90 degrees: Y flips sign
        let rotation = EulerRotation::new(0.3, 2.0, 0.0);
        let dir = bullet_direction(rotation);
        assert!(dir.y < 0.0);

        let within = bullet_direction(EulerRotation::new(0.3, 1.0, 0.0));
        assert!(within.y > 0.0);
    }

    #[test]
    fn test_roll_beyond_quarter_turn_negates_x() {
        // Roll leaves the forward vector itself unchanged, so only the
        // correction shows up in X.
        let base = EulerRotation::new(0.0, 0.5, PI * 0.75);
        let uncorrected_x = {
            let rolled = EulerRotation::new(0.0, 0.5, 0.0);
            bullet_direction(rolled).x
        };
        let dir = bullet_direction(base);
        assert_relative_eq!(dir.x, -uncorrected_x, epsilon = 1e-12);
    }

    #[test]
    fn test_pitch_beyond_quarter_turn_is_uncorrected() {
        let rotation = EulerRotation::new(PI * 0.75, 0.0, 0.0);
        let dir = bullet_direction(rotation);
        let (s, c) = rotation.x.sin_cos();
        assert_relative_eq!(dir, Vec3::new(0.0, s, -c), epsilon = 1e-12);
    }

    #[test]
    fn test_length_scales_direction() {
        let pose = EmitterPose::new(Vec3::zeros(), EulerRotation::new(0.2, 0.4, 0.1));
        let unit = bullet_direction(pose.rotation);
        assert_relative_eq!(pose.ray(DEFAULT_BULLET_LENGTH).direction, unit * 10.0);
        assert_relative_eq!(unit.norm(), 1.0, epsilon = 1e-12);
    }
}
