//! Collision-specific debug visualization
//!
//! Every triangle tested in a bullet pass gets a wireframe outline, hit
//! triangles are filled, and exact crossing points get a marker.

use crate::core::config::DebugConfig;
use crate::debug::draw::{DebugDrawSystem, DebugShape};
use crate::foundation::math::{Vec3, Vec4};
use crate::physics::collision::{Intersection, Triangle};

/// Group that holds the shapes of the latest bullet pass
pub const BULLET_PASS_GROUP: &str = "bullet_pass";

/// Color scheme for collision visualization
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionDebugColors {
    /// Fill for triangles the bullet hit
    pub hit_fill: Vec4,

    /// Outline drawn for every tested triangle
    pub wireframe: Vec4,

    /// Marker at exact hit points
    pub hit_point: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            hit_fill: Vec4::new(1.0, 0.0, 0.0, 1.0),   // Solid red
            wireframe: Vec4::new(1.0, 1.0, 1.0, 0.25), // White, transparent
            hit_point: Vec4::new(0.0, 0.0, 1.0, 1.0),  // Blue
        }
    }
}

/// Collision-specific debug visualizer
///
/// Owns the debug draw system and the bullet-pass group within it.
pub struct CollisionDebugVisualizer {
    debug_draw: DebugDrawSystem,
    colors: CollisionDebugColors,
    point_size: f32,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self {
            debug_draw: DebugDrawSystem::new(),
            colors: CollisionDebugColors::default(),
            point_size: 0.05,
        }
    }

    /// Build a visualizer from config
    pub fn from_config(config: &DebugConfig) -> Self {
        let mut visualizer = Self::new().with_colors(CollisionDebugColors {
            hit_fill: Vec4::from(config.hit_fill),
            wireframe: Vec4::from(config.wireframe),
            hit_point: Vec4::from(config.hit_point),
        });
        visualizer.point_size = config.point_size;
        visualizer.set_enabled(config.enabled);
        visualizer
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Drop the previous pass's shapes
    pub fn begin_pass(&mut self) {
        self.debug_draw.clear_group(BULLET_PASS_GROUP);
    }

    /// Record one classified triangle
    pub fn draw_triangle_result(&mut self, triangle: &Triangle, result: &Intersection) {
        let vertices = triangle.vertices();
        self.debug_draw
            .draw_wire_triangle(BULLET_PASS_GROUP, vertices, self.colors.wireframe);

        if result.is_hit() {
            self.debug_draw
                .draw_filled_triangle(BULLET_PASS_GROUP, vertices, self.colors.hit_fill);
        }

        if let Some(point) = result.point() {
            self.draw_hit_point(point);
        }
    }

    fn draw_hit_point(&mut self, point: Vec3) {
        self.debug_draw
            .draw_point(BULLET_PASS_GROUP, point, self.colors.hit_point, self.point_size);
    }

    /// Shapes of the latest pass
    pub fn pass_shapes(&self) -> &[DebugShape] {
        self.debug_draw.group_shapes(BULLET_PASS_GROUP)
    }

    /// Get all debug shapes for rendering
    pub fn get_shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.debug_draw.get_shapes()
    }

    /// Enable/disable the entire debug system
    ///
    /// Disabling also drops the current pass's shapes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.debug_draw.enabled = enabled;
        if !enabled {
            self.begin_pass();
        }
    }

    /// Check if debug system is enabled
    pub fn is_enabled(&self) -> bool {
        self.debug_draw.enabled
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
