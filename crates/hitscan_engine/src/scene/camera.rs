//! Viewer camera used to turn pointer positions into picking rays

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, EulerRotation, Vec3};
use crate::physics::collision::Ray;

/// Perspective camera with pitch only
#[derive(Debug, Clone, PartialEq)]
pub struct PickingCamera {
    /// Eye position
    pub position: Vec3,
    /// Rotation around X in radians
    pub pitch: f64,
    /// Vertical field of view in radians
    pub fov_y: f64,
    /// Viewport width over height
    pub aspect: f64,
}

impl PickingCamera {
    /// Camera from config and the current viewport size
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: config.position,
            pitch: config.pitch,
            fov_y: utils::deg_to_rad(config.fov_y_degrees),
            aspect: 1.0,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Update the aspect ratio after a resize
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = f64::from(width) / f64::from(height);
        }
    }

    /// Unbounded ray through a point in normalized device coordinates
    ///
    /// NDC is y-up: (-1, -1) is the bottom-left corner.
    pub fn ray_through(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        let view = Vec3::new(ndc_x * half_height * self.aspect, ndc_y * half_height, -1.0);
        let direction = EulerRotation::new(self.pitch, 0.0, 0.0).to_rotation() * view;
        Ray::new(self.position, direction.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_ray_follows_pitch() {
        let config = CameraConfig {
            position: Vec3::new(0.0, 5.0, 5.0),
            pitch: -0.8,
            fov_y_degrees: 75.0,
        };
        let camera = PickingCamera::from_config(&config, 800, 600);
        let ray = camera.ray_through(0.0, 0.0);

        assert_eq!(ray.origin, config.position);
        assert_relative_eq!(ray.direction, Vec3::new(0.0, (-0.8f64).sin(), -(0.8f64).cos()), epsilon = 1e-12);
    }

    #[test]
    fn test_top_edge_matches_half_fov() {
        let config = CameraConfig {
            position: Vec3::zeros(),
            pitch: 0.0,
            fov_y_degrees: 90.0,
        };
        let camera = PickingCamera::from_config(&config, 100, 100);
        let ray = camera.ray_through(0.0, 1.0);
        let s = (0.5f64).sqrt();
        assert_relative_eq!(ray.direction, Vec3::new(0.0, s, -s), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_height_viewport_keeps_aspect() {
        let mut camera = PickingCamera::from_config(&CameraConfig::default(), 200, 100);
        camera.set_viewport(200, 0);
        assert_relative_eq!(camera.aspect, 2.0);
    }
}
