use glam::Vec2;

use super::event::MouseButton;

/// Tracks the cursor position and which buttons are held.
pub(crate) struct PointerState {
    pub(crate) position: Vec2,
    held: Vec<MouseButton>,
}

impl PointerState {
    /// Cursor at the origin, no buttons held.
    pub(crate) fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            held: Vec::new(),
        }
    }

    /// Update cursor position.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Record a press. Returns `false` if the button was already held.
    pub(crate) fn press(&mut self, button: MouseButton) -> bool {
        if self.held.contains(&button) {
            return false;
        }
        self.held.push(button);
        true
    }

    /// Record a release. Unheld buttons are ignored.
    pub(crate) fn release(&mut self, button: MouseButton) {
        self.held.retain(|held| *held != button);
    }

    /// Buttons currently held, in press order.
    pub(crate) fn held(&self) -> &[MouseButton] {
        &self.held
    }

    /// Forget all held buttons.
    pub(crate) fn clear(&mut self) {
        self.held.clear();
    }
}
