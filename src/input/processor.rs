//! Converts raw platform events into camera actions.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons, held keys, modifier state) and the key-binding map.  It
//! sits between raw window events and [`CameraActions`] implementors.
//!
//! [`CameraActions`]: crate::camera::CameraActions

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::PointerState;
use crate::camera::{CameraAction, DragInput, DragPhase};
use crate::options::KeybindingOptions;

/// Converts raw window events into [`CameraAction`]s.
///
/// Every mouse button drives both drag gestures; the camera decides which
/// button each gesture answers to.  Drags have no end: releasing a button
/// just stops the `Active` samples.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for action in input_processor.handle_event(event) {
///     controller.execute(action);
/// }
///
/// if let Some(action) = input_processor.handle_key("KeyW", true) {
///     controller.execute(action);
/// }
/// ```
pub struct InputProcessor {
    /// Cursor position and held buttons.
    pointer: PointerState,
    /// Bound key actions currently held.
    held_keys: HashSet<KeyAction>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Last move axis reported.
    move_axis: Vec2,
    /// Last rotate axis reported.
    rotate_axis: f32,
    /// When `false`, every event is dropped.
    enabled: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            pointer: PointerState::new(),
            held_keys: HashSet::new(),
            shift_pressed: false,
            move_axis: Vec2::ZERO,
            rotate_axis: 0.0,
            enabled: true,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.pointer.position
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Whether events are currently delivered.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    ///
    /// Call [`KeybindingOptions::rebuild_reverse_map`] after editing.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Start or stop delivering events.
    ///
    /// Disabling releases everything held: the returned actions zero the
    /// move and rotate axes and drop the speed modifier, the same as if
    /// every key had been let go.  Camera target state is untouched.
    #[must_use]
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<CameraAction> {
        if enabled == self.enabled {
            return Vec::new();
        }
        self.enabled = enabled;
        if enabled {
            log::debug!("camera input enabled");
            return Vec::new();
        }

        log::debug!("camera input disabled");
        let mut released = Vec::new();
        self.held_keys.clear();
        self.pointer.clear();
        if self.move_axis != Vec2::ZERO {
            self.move_axis = Vec2::ZERO;
            released.push(CameraAction::Move(Vec2::ZERO));
        }
        if self.rotate_axis != 0.0 {
            self.rotate_axis = 0.0;
            released.push(CameraAction::Rotate(0.0));
        }
        if self.shift_pressed {
            self.shift_pressed = false;
            released.push(CameraAction::SpeedUp(false));
        }
        released
    }

    /// Process a key press or release and return the resulting axis
    /// change, if any.
    ///
    /// `key` uses the `KeyCode` debug format (`"KeyW"`, `"ArrowUp"`).
    /// Unbound keys, key repeats, and releases of keys that were never
    /// pressed produce nothing.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<CameraAction> {
        if !self.enabled {
            return None;
        }
        let action = self.key_bindings.lookup(key)?;
        let changed = if pressed {
            self.held_keys.insert(action)
        } else {
            self.held_keys.remove(&action)
        };
        if !changed {
            return None;
        }

        if action.is_move() {
            let axis = self.held_move_axis();
            if axis == self.move_axis {
                return None;
            }
            self.move_axis = axis;
            Some(CameraAction::Move(axis))
        } else {
            let axis = self.held_rotate_axis();
            if axis == self.rotate_axis {
                return None;
            }
            self.rotate_axis = axis;
            Some(CameraAction::Rotate(axis))
        }
    }

    /// Process a raw pointer event and return the actions it produces.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<CameraAction> {
        if !self.enabled {
            return Vec::new();
        }
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => vec![CameraAction::Zoom(delta)],
            InputEvent::ModifiersChanged { shift } => {
                if shift == self.shift_pressed {
                    return Vec::new();
                }
                self.shift_pressed = shift;
                vec![CameraAction::SpeedUp(shift)]
            }
        }
    }

    /// Cursor moved: one `Active` sample per held button, for both drags.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<CameraAction> {
        self.pointer.handle_mouse_position(x, y);
        self.pointer
            .held()
            .iter()
            .flat_map(|&button| self.drag_pair(DragPhase::Active, button))
            .collect()
    }

    /// Mouse button press starts both drags for that control; release
    /// emits nothing.
    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) -> Vec<CameraAction> {
        if pressed {
            if self.pointer.press(button) {
                return self.drag_pair(DragPhase::Start, button).to_vec();
            }
        } else {
            self.pointer.release(button);
        }
        Vec::new()
    }

    fn drag_pair(&self, phase: DragPhase, control: MouseButton) -> [CameraAction; 2] {
        let drag = DragInput {
            phase,
            control,
            screen_pos: self.pointer.position,
        };
        [CameraAction::DragPan(drag), CameraAction::DragOrbit(drag)]
    }

    fn held_move_axis(&self) -> Vec2 {
        let held = |action: KeyAction| {
            if self.held_keys.contains(&action) {
                1.0
            } else {
                0.0
            }
        };
        Vec2::new(
            held(KeyAction::MoveRight) - held(KeyAction::MoveLeft),
            held(KeyAction::MoveForward) - held(KeyAction::MoveBack),
        )
    }

    fn held_rotate_axis(&self) -> f32 {
        let left = self.held_keys.contains(&KeyAction::RotateLeft);
        let right = self.held_keys.contains(&KeyAction::RotateRight);
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
