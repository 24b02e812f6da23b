//! The camera's input vocabulary.
//!
//! Input reaches a camera through the [`CameraActions`] handler interface.
//! A binding layer either calls the handlers directly or produces
//! [`CameraAction`] values and [`dispatch`](CameraAction::dispatch)es them.

use glam::Vec2;

use crate::input::MouseButton;

/// Phase of a pointer-drag gesture.
///
/// There is no end phase: a drag simply stops producing
/// [`Active`](Self::Active) samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The control was pressed; anchor the gesture.
    Start,
    /// The pointer moved while the control is held.
    Active,
}

/// One drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    /// Gesture phase.
    pub phase: DragPhase,
    /// Control that triggered the sample.
    pub control: MouseButton,
    /// Pointer position in physical pixels, origin top-left.
    pub screen_pos: Vec2,
}

/// Handlers a camera exposes to the input layer.
///
/// Every handler is synchronous and must not block.
pub trait CameraActions {
    /// Current move axis (x = strafe right, y = forward). Zero on release.
    fn on_move(&mut self, axis: Vec2);
    /// Speed modifier pressed (`true`) or released (`false`).
    fn on_speed_up(&mut self, active: bool);
    /// Current yaw-rate axis. Zero on release.
    fn on_rotate(&mut self, axis: f32);
    /// One zoom step (positive = in).
    fn on_zoom(&mut self, axis: f32);
    /// Pan gesture sample.
    fn on_drag_pan(&mut self, drag: DragInput);
    /// Orbit gesture sample.
    fn on_drag_orbit(&mut self, drag: DragInput);
}

/// A camera input event as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAction {
    /// See [`CameraActions::on_move`].
    Move(Vec2),
    /// See [`CameraActions::on_speed_up`].
    SpeedUp(bool),
    /// See [`CameraActions::on_rotate`].
    Rotate(f32),
    /// See [`CameraActions::on_zoom`].
    Zoom(f32),
    /// See [`CameraActions::on_drag_pan`].
    DragPan(DragInput),
    /// See [`CameraActions::on_drag_orbit`].
    DragOrbit(DragInput),
}

impl CameraAction {
    /// Deliver this action to `handler`.
    pub fn dispatch<H: CameraActions + ?Sized>(self, handler: &mut H) {
        match self {
            Self::Move(axis) => handler.on_move(axis),
            Self::SpeedUp(active) => handler.on_speed_up(active),
            Self::Rotate(axis) => handler.on_rotate(axis),
            Self::Zoom(axis) => handler.on_zoom(axis),
            Self::DragPan(drag) => handler.on_drag_pan(drag),
            Self::DragOrbit(drag) => handler.on_drag_orbit(drag),
        }
    }
}
