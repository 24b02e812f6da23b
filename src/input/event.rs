use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraAction`](crate::camera::CameraAction) values.
/// Keyboard input goes through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key).
///
/// # Example
///
/// ```ignore
/// for action in input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// ) {
///     controller.execute(action);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
///
/// Serializes as `snake_case` so presets read `pan_button = "left"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Buttons without a camera meaning (back, forward, extra) are handed back
/// as the error.
#[cfg(feature = "winit")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = winit::event::MouseButton;

    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Left),
            winit::event::MouseButton::Right => Ok(Self::Right),
            winit::event::MouseButton::Middle => Ok(Self::Middle),
            other => Err(other),
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event, if it is one the camera cares about.
    ///
    /// Line-based scroll deltas pass through; pixel deltas are scaled down
    /// to roughly one unit per notch. Presses and releases of buttons other
    /// than left, right, and middle are dropped.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { button, state, .. } => Some(Self::MouseButton {
                button: MouseButton::try_from(*button).ok()?,
                pressed: *state == ElementState::Pressed,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => Some(Self::ModifiersChanged {
                shift: modifiers.state().shift_key(),
            }),
            _ => None,
        }
    }
}


#[cfg(all(test, feature = "winit"))]
mod winit_tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::{
        DeviceId, ElementState, Modifiers, MouseScrollDelta, TouchPhase, WindowEvent,
    };
    use winit::keyboard::ModifiersState;

    use super::*;
    use crate::input::InputProcessor;

    fn device() -> DeviceId {
        // SAFETY: only compared, never handed back to the platform.
        unsafe { DeviceId::dummy() }
    }

    fn mouse_input(button: winit::event::MouseButton, state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    #[test]
    fn camera_buttons_convert() {
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Left),
            Ok(MouseButton::Left)
        );
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Middle),
            Ok(MouseButton::Middle)
        );
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Back),
            Err(winit::event::MouseButton::Back)
        );
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Other(7)),
            Err(winit::event::MouseButton::Other(7))
        );
    }

    #[test]
    fn button_press_and_release_translate() {
        let event = mouse_input(winit::event::MouseButton::Right, ElementState::Pressed);
        assert_eq!(
            InputEvent::from_window_event(&event),
            Some(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            })
        );
        let event = mouse_input(winit::event::MouseButton::Right, ElementState::Released);
        assert_eq!(
            InputEvent::from_window_event(&event),
            Some(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: false,
            })
        );
    }

    #[test]
    fn thumb_buttons_are_dropped() {
        for button in [
            winit::event::MouseButton::Back,
            winit::event::MouseButton::Forward,
            winit::event::MouseButton::Other(9),
        ] {
            let event = mouse_input(button, ElementState::Pressed);
            assert_eq!(InputEvent::from_window_event(&event), None);
        }
    }

    #[test]
    fn thumb_button_does_not_release_held_left() {
        let mut input = InputProcessor::new();
        let press = mouse_input(winit::event::MouseButton::Left, ElementState::Pressed);
        let back = mouse_input(winit::event::MouseButton::Back, ElementState::Released);
        for event in [&press, &back] {
            if let Some(event) = InputEvent::from_window_event(event) {
                let _ = input.handle_event(event);
            }
        }
        // Left is still held, so cursor motion keeps sampling the drag.
        let actions = input.handle_event(InputEvent::CursorMoved { x: 4.0, y: 2.0 });
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn scroll_deltas_translate() {
        let line = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -2.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            InputEvent::from_window_event(&line),
            Some(InputEvent::Scroll { delta: -2.0 })
        );

        let pixel = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 250.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            InputEvent::from_window_event(&pixel),
            Some(InputEvent::Scroll { delta: 2.5 })
        );
    }

    #[test]
    fn cursor_and_modifiers_translate() {
        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.0, 34.0),
        };
        assert_eq!(
            InputEvent::from_window_event(&moved),
            Some(InputEvent::CursorMoved { x: 12.0, y: 34.0 })
        );

        let shift = WindowEvent::ModifiersChanged(Modifiers::from(ModifiersState::SHIFT));
        assert_eq!(
            InputEvent::from_window_event(&shift),
            Some(InputEvent::ModifiersChanged { shift: true })
        );
        let none = WindowEvent::ModifiersChanged(Modifiers::from(ModifiersState::empty()));
        assert_eq!(
            InputEvent::from_window_event(&none),
            Some(InputEvent::ModifiersChanged { shift: false })
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(InputEvent::from_window_event(&WindowEvent::Focused(true)), None);
    }
}
