//! Camera system: rig, pointer rays, and the smoothed pan/orbit/zoom
//! controller.

/// Camera input vocabulary: handler trait, action values, drag phases.
pub mod actions;
/// Smoothed camera controller owning target state and drag sessions.
pub mod controller;
/// Camera rig, projection, and screen-to-world rays.
pub mod core;
/// Planes and ray intersection.
pub mod plane;

pub use actions::{CameraAction, CameraActions, DragInput, DragPhase};
pub use controller::{CameraController, CameraState, DragSession};
pub use self::core::{screen_point_to_ray, CameraRig, Projection, Ray};
pub use plane::Plane;
