//! Input handling: event types, pointer tracking, and the input processor
//! that converts raw window events into camera actions.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Cursor position and held-button tracking.
pub(crate) mod mouse;
/// Converts raw events into camera actions.
pub mod processor;

pub use event::{InputEvent, MouseButton};
#[cfg(feature = "winit")]
pub use keyboard::key_name;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
