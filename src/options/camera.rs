use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera movement, smoothing, and projection parameters.
///
/// A [`CameraController`](crate::camera::CameraController) copies these at
/// construction; edits afterwards only affect controllers built later.
pub struct CameraOptions {
    /// Pan speed per frame per unit of move axis.
    #[schemars(title = "Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub normal_speed: f32,
    /// Pan speed while the speed modifier is held.
    #[schemars(title = "Fast Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub fast_speed: f32,
    /// Blend rate toward the target; multiplied by frame time and clamped
    /// to one. Shared by position, rotation, and zoom.
    #[schemars(title = "Smoothing", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub smoothing_rate: f32,
    /// Yaw in degrees per frame per unit of rotate axis.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub rotation_step: f32,
    /// Lens offset change per unit of zoom axis, in rig-local space.
    #[schemars(skip)]
    pub zoom_step: [f32; 3],
    /// Degrees of yaw per world unit of lateral orbit drag.
    #[schemars(title = "Orbit Drag", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub orbit_drag_factor: f32,
    /// Button that drives pan drags.
    #[schemars(skip)]
    pub pan_button: MouseButton,
    /// Button that drives orbit drags.
    #[schemars(skip)]
    pub orbit_button: MouseButton,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            normal_speed: 0.5,
            fast_speed: 3.0,
            smoothing_rate: 5.0,
            rotation_step: 1.0,
            zoom_step: [0.0, -10.0, -10.0],
            orbit_drag_factor: 5.0,
            pan_button: MouseButton::Left,
            orbit_button: MouseButton::Right,
            fovy: 60.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}
