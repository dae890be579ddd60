//! Debug drawing primitives and system
//!
//! Shapes are collected into named groups. A group is the unit of
//! replacement: a producer clears its group and redraws it from scratch, so
//! the group always holds exactly one pass worth of shapes.

use crate::foundation::math::{Vec3, Vec4};
use std::collections::BTreeMap;

/// Name of a debug shape group
pub type DebugGroupId = String;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// RGBA color
        color: Vec4,
    },

    /// Solid filled triangle
    FilledTriangle {
        /// Vertices in order
        vertices: [Vec3; 3],
        /// RGBA color
        color: Vec4,
    },

    /// Point marker at position
    Point {
        /// Marker position
        position: Vec3,
        /// RGBA color
        color: Vec4,
        /// Marker size in world units
        size: f32,
    },
}

impl DebugShape {
    /// Short kind name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            DebugShape::Line { .. } => "line",
            DebugShape::FilledTriangle { .. } => "filled_triangle",
            DebugShape::Point { .. } => "point",
        }
    }
}

/// Debug drawing system holding grouped shapes
pub struct DebugDrawSystem {
    groups: BTreeMap<DebugGroupId, Vec<DebugShape>>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
            enabled: true,
        }
    }

    fn push(&mut self, group: &str, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.groups.entry(group.to_string()).or_default().push(shape);
    }

    /// Draw a line segment into a group
    pub fn draw_line(&mut self, group: &str, start: Vec3, end: Vec3, color: Vec4) {
        self.push(group, DebugShape::Line { start, end, color });
    }

    /// Draw a filled triangle into a group
    pub fn draw_filled_triangle(&mut self, group: &str, vertices: [Vec3; 3], color: Vec4) {
        self.push(group, DebugShape::FilledTriangle { vertices, color });
    }

    /// Draw a triangle outline (three segments) into a group
    pub fn draw_wire_triangle(&mut self, group: &str, vertices: [Vec3; 3], color: Vec4) {
        let [a, b, c] = vertices;
        self.draw_line(group, a, b, color);
        self.draw_line(group, b, c, color);
        self.draw_line(group, c, a, color);
    }

    /// Draw a point marker into a group
    pub fn draw_point(&mut self, group: &str, position: Vec3, color: Vec4, size: f32) {
        self.push(group, DebugShape::Point {
            position,
            color,
            size,
        });
    }

    /// Remove every shape of a group at once
    pub fn clear_group(&mut self, group: &str) {
        self.groups.remove(group);
    }

    /// Shapes of a single group, in draw order
    pub fn group_shapes(&self, group: &str) -> &[DebugShape] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get all shapes for rendering
    pub fn get_shapes(&self) -> impl Iterator<Item = &DebugShape> {
        let enabled = self.enabled;
        self.groups.values().flatten().filter(move |_| enabled)
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec4 {
        Vec4::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_clear_group_leaves_other_groups() {
        let mut system = DebugDrawSystem::new();
        system.draw_point("hits", Vec3::zeros(), red(), 0.1);
        system.draw_line("grid", Vec3::zeros(), Vec3::x(), red());

        assert_eq!(system.shape_count(), 2);

        system.clear_group("hits");
        assert!(system.group_shapes("hits").is_empty());
        assert_eq!(system.group_shapes("grid").len(), 1);
    }

    #[test]
    fn test_wire_triangle_is_three_closed_segments() {
        let mut system = DebugDrawSystem::new();
        let (a, b, c) = (Vec3::zeros(), Vec3::x(), Vec3::y());
        system.draw_wire_triangle("wire", [a, b, c], red());

        let shapes = system.group_shapes("wire");
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[2], DebugShape::Line { start: c, end: a, color: red() });
    }

    #[test]
    fn test_disabled_system_draws_nothing() {
        let mut system = DebugDrawSystem::new();
        system.enabled = false;
        system.draw_filled_triangle("hits", [Vec3::zeros(); 3], red());
        assert_eq!(system.shape_count(), 0);
        assert_eq!(system.get_shapes().count(), 0);
    }
}
