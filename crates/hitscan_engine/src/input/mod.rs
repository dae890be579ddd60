//! Input events and pointer handling
//!
//! The host window feeds [`InputEvent`]s in arrival order. Pointer state
//! lives in [`MouseState`], and drags are applied to scene nodes through the
//! [`Gizmo`].

pub mod gizmo;
pub mod picking;

pub use gizmo::{Gizmo, TransformMode};
pub use picking::MouseState;

/// Discrete input from the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed at a screen position
    PointerDown {
        /// Pressed button
        button: MouseButton,
        /// Pixels from the left edge
        x: f64,
        /// Pixels from the top edge
        y: f64,
    },
    /// Pointer moved
    PointerMove {
        /// Pixels from the left edge
        x: f64,
        /// Pixels from the top edge
        y: f64,
    },
    /// Button released
    PointerUp {
        /// Released button
        button: MouseButton,
    },
    /// Key pressed
    KeyDown(KeyCode),
    /// Viewport resized
    Resize {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Z key
    Z,
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// Any other key
    Other(char),
}

impl KeyCode {
    /// Key for a typed character, case-insensitive
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'z' => KeyCode::Z,
            ' ' => KeyCode::Space,
            '\u{1b}' => KeyCode::Escape,
            other => KeyCode::Other(other),
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char() {
        assert_eq!(KeyCode::from_char('Z'), KeyCode::Z);
        assert_eq!(KeyCode::from_char('z'), KeyCode::Z);
        assert_eq!(KeyCode::from_char('\u{1b}'), KeyCode::Escape);
        assert_eq!(KeyCode::from_char('q'), KeyCode::Other('q'));
    }
}
