use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// rotate_left = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Positive move axis Y.
    MoveForward,
    /// Negative move axis Y.
    MoveBack,
    /// Negative move axis X.
    MoveLeft,
    /// Positive move axis X.
    MoveRight,
    /// Negative rotate axis (counter-clockwise seen from above).
    RotateLeft,
    /// Positive rotate axis (clockwise seen from above).
    RotateRight,
}

impl KeyAction {
    /// Whether this key feeds the move axis (as opposed to rotation).
    #[must_use]
    pub fn is_move(self) -> bool {
        matches!(
            self,
            Self::MoveForward | Self::MoveBack | Self::MoveLeft | Self::MoveRight
        )
    }
}

/// Key string for a winit physical key code, in the same `KeyCode` debug
/// format the bindings use (`"KeyW"`, `"ArrowUp"`).
#[cfg(feature = "winit")]
#[must_use]
pub fn key_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
