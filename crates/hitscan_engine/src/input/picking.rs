//! Mouse state for picking operations
//!
//! Provides utilities for converting screen-space coordinates to
//! Normalized Device Coordinates (NDC) for ray casting.

/// Pixels the pointer must travel before a press counts as a drag
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Mouse state for picking operations
#[derive(Debug, Clone, PartialEq)]
pub struct MouseState {
    /// Current screen-space X position (pixels)
    pub screen_x: f64,
    /// Current screen-space Y position (pixels)
    pub screen_y: f64,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Drag start position (None if not dragging)
    pub drag_start: Option<(f64, f64)>,
    /// Position at the previous drag step
    last_drag: Option<(f64, f64)>,
}

impl MouseState {
    /// Create a new mouse state with default values
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            screen_x: 0.0,
            screen_y: 0.0,
            window_width,
            window_height,
            drag_start: None,
            last_drag: None,
        }
    }

    /// Convert screen coordinates to Normalized Device Coordinates (NDC)
    ///
    /// NDC range: [-1, 1] where:
    /// - X: -1 = left, +1 = right
    /// - Y: -1 = bottom, +1 = top (screen Y grows downwards, so it is flipped)
    ///
    /// A zero-sized window maps everything to the centre.
    pub fn screen_to_ndc(&self) -> (f64, f64) {
        if self.window_width == 0 || self.window_height == 0 {
            return (0.0, 0.0);
        }
        let ndc_x = self.screen_x / f64::from(self.window_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - self.screen_y / f64::from(self.window_height) * 2.0;
        (ndc_x, ndc_y)
    }

    /// Update mouse position from window events
    pub fn update_position(&mut self, x: f64, y: f64) {
        self.screen_x = x;
        self.screen_y = y;
    }

    /// Update window size (for NDC conversion)
    pub fn update_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Start a drag operation at current mouse position
    pub fn start_drag(&mut self) {
        self.drag_start = Some((self.screen_x, self.screen_y));
        self.last_drag = self.drag_start;
    }

    /// End drag operation
    pub fn end_drag(&mut self) {
        self.drag_start = None;
        self.last_drag = None;
    }

    /// Whether the button is held
    pub fn button_down(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Check if currently dragging (threshold distinguishes a drag from a click)
    pub fn is_dragging(&self) -> bool {
        self.drag_start.map_or(false, |(start_x, start_y)| {
            let dx = self.screen_x - start_x;
            let dy = self.screen_y - start_y;
            (dx * dx + dy * dy).sqrt() >= DRAG_THRESHOLD
        })
    }

    /// Pixel movement since the previous call, while the button is held
    pub fn take_drag_delta(&mut self) -> Option<(f64, f64)> {
        let (last_x, last_y) = self.last_drag?;
        self.last_drag = Some((self.screen_x, self.screen_y));
        Some((self.screen_x - last_x, self.screen_y - last_y))
    }
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_to_ndc_center() {
        let mut mouse = MouseState::new(1920, 1080);
        mouse.update_position(960.0, 540.0);

        let (ndc_x, ndc_y) = mouse.screen_to_ndc();
        assert_relative_eq!(ndc_x, 0.0);
        assert_relative_eq!(ndc_y, 0.0);
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        let mut mouse = MouseState::new(1920, 1080);
        mouse.update_position(0.0, 0.0);
        assert_eq!(mouse.screen_to_ndc(), (-1.0, 1.0)); // Top-left

        mouse.update_position(1920.0, 1080.0);
        assert_eq!(mouse.screen_to_ndc(), (1.0, -1.0)); // Bottom-right
    }

    #[test]
    fn test_drag_threshold_and_deltas() {
        let mut mouse = MouseState::new(800, 600);
        mouse.update_position(100.0, 100.0);
        mouse.start_drag();
        assert!(mouse.button_down());

        mouse.update_position(102.0, 101.0);
        assert!(!mouse.is_dragging());
        assert_eq!(mouse.take_drag_delta(), Some((2.0, 1.0)));

        mouse.update_position(110.0, 101.0);
        assert!(mouse.is_dragging());
        assert_eq!(mouse.take_drag_delta(), Some((8.0, 0.0)));

        mouse.end_drag();
        assert_eq!(mouse.take_drag_delta(), None);
    }
}
