//! Transform gizmo
//!
//! Attaches to one scene node at a time and turns pointer drags into
//! transform edits. The active mode decides whether a drag moves, turns or
//! scales the node.

use crate::foundation::math::{Transform, Vec3};
use crate::scene::NodeKey;

/// World units (or radians) per dragged pixel
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Smallest scale a drag can shrink a node to
pub const MIN_SCALE: f64 = 0.01;

/// What a drag does to the attached node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Move in the screen-aligned XY plane
    #[default]
    Translate,
    /// Yaw with horizontal drags, pitch with vertical drags
    Rotate,
    /// Uniform scale
    Scale,
}

impl TransformMode {
    /// Next mode in the translate, rotate, scale cycle
    pub fn next(self) -> Self {
        match self {
            TransformMode::Translate => TransformMode::Rotate,
            TransformMode::Rotate => TransformMode::Scale,
            TransformMode::Scale => TransformMode::Translate,
        }
    }
}

/// Gizmo state
#[derive(Debug, Clone, Default)]
pub struct Gizmo {
    attached: Option<NodeKey>,
    mode: TransformMode,
}

impl Gizmo {
    /// Detached gizmo in translate mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to a node, replacing any previous attachment
    pub fn attach(&mut self, key: NodeKey) {
        self.attached = Some(key);
    }

    /// Release the attached node
    pub fn detach(&mut self) {
        self.attached = None;
    }

    /// Node under edit
    pub fn attached(&self) -> Option<NodeKey> {
        self.attached
    }

    /// Current mode
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Advance to the next mode
    pub fn cycle_mode(&mut self) -> TransformMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Apply a pointer drag of `(dx, dy)` pixels to `transform`
    ///
    /// Screen Y grows downwards, so dragging up moves, pitches or grows
    /// the node in the positive direction.
    pub fn apply_drag(&self, transform: &mut Transform, dx: f64, dy: f64) {
        let (dx, dy) = (dx * DRAG_SENSITIVITY, -dy * DRAG_SENSITIVITY);
        match self.mode {
            TransformMode::Translate => transform.position += Vec3::new(dx, dy, 0.0),
            TransformMode::Rotate => transform.rotation = transform.rotation.offset(Vec3::new(dy, dx, 0.0)),
            TransformMode::Scale => {
                let factor = 1.0 + dx + dy;
                transform.scale = (transform.scale * factor).map(|s| s.max(MIN_SCALE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slotmap::SlotMap;

    #[test]
    fn test_mode_cycles_back_to_translate() {
        let mut gizmo = Gizmo::new();
        assert_eq!(gizmo.cycle_mode(), TransformMode::Rotate);
        assert_eq!(gizmo.cycle_mode(), TransformMode::Scale);
        assert_eq!(gizmo.cycle_mode(), TransformMode::Translate);
    }

    #[test]
    fn test_attach_and_detach() {
        let mut keys: SlotMap<NodeKey, ()> = SlotMap::with_key();
        let key = keys.insert(());

        let mut gizmo = Gizmo::new();
        gizmo.attach(key);
        assert_eq!(gizmo.attached(), Some(key));
        gizmo.detach();
        assert_eq!(gizmo.attached(), None);
    }

    #[test]
    fn test_drag_per_mode() {
        let mut gizmo = Gizmo::new();
        let mut transform = Transform::identity();

        gizmo.apply_drag(&mut transform, 100.0, -50.0);
        assert_relative_eq!(transform.position, Vec3::new(1.0, 0.5, 0.0));

        gizmo.cycle_mode();
        gizmo.apply_drag(&mut transform, 10.0, 0.0);
        assert_relative_eq!(transform.rotation.y, 0.1);
        assert_relative_eq!(transform.rotation.x, 0.0);

        gizmo.cycle_mode();
        gizmo.apply_drag(&mut transform, 0.0, 10000.0);
        assert_relative_eq!(transform.scale, Vec3::repeat(MIN_SCALE));
    }
}
