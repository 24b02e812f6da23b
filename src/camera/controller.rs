use glam::{Quat, Vec2, Vec3};

use super::actions::{CameraAction, CameraActions, DragInput, DragPhase};
use super::core::{screen_point_to_ray, CameraRig, Projection, Ray};
use super::plane::Plane;
use crate::options::CameraOptions;

/// Viewport assumed until the host calls [`CameraController::resize`].
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// Where the rig is heading. Input writes here; [`CameraController::tick`]
/// eases the live rig toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Desired pivot position.
    pub position: Vec3,
    /// Desired pivot orientation.
    pub rotation: Quat,
    /// Desired lens offset (zoom).
    pub zoom_offset: Vec3,
}

impl CameraState {
    fn from_rig(rig: &CameraRig) -> Self {
        Self {
            position: rig.position,
            rotation: rig.rotation,
            zoom_offset: rig.lens_offset,
        }
    }
}

/// Ground-plane hits captured during one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Anchor point. Fixed for pan; advances every sample for orbit.
    pub start: Vec3,
    /// Most recent sampled hit.
    pub last: Option<Vec3>,
}

impl DragSession {
    fn new(start: Vec3) -> Self {
        Self { start, last: None }
    }
}

/// Smoothed pan / orbit / zoom camera.
///
/// Holds the live [`CameraRig`] and a target [`CameraState`]. Input
/// handlers only touch the target (and the drag sessions); [`tick`]
/// is the only place the rig is written.
///
/// Configuration is copied at construction and never changes afterwards.
///
/// [`tick`]: Self::tick
pub struct CameraController {
    options: CameraOptions,
    rig: CameraRig,
    projection: Projection,
    target: CameraState,

    movement_speed: f32,
    move_axis: Vec2,
    rotate_axis: f32,

    pan_drag: Option<DragSession>,
    orbit_drag: Option<DragSession>,
}

impl CameraController {
    /// Create a controller whose target starts at the rig's current pose.
    #[must_use]
    pub fn new(options: &CameraOptions, rig: CameraRig) -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        log::debug!(
            "camera controller seeded at {} (lens offset {})",
            rig.position,
            rig.lens_offset
        );
        Self {
            options: options.clone(),
            projection: Projection {
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
                width,
                height,
            },
            target: CameraState::from_rig(&rig),
            rig,
            movement_speed: options.normal_speed,
            move_axis: Vec2::ZERO,
            rotate_axis: 0.0,
            pan_drag: None,
            orbit_drag: None,
        }
    }

    /// Configuration this controller was built with.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Live rig pose, as of the last tick.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable rig access for hosts that move the camera themselves.
    ///
    /// The target is left alone, so the rig eases back toward it on the
    /// following ticks.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// Target pose the rig is easing toward.
    #[must_use]
    pub fn target(&self) -> &CameraState {
        &self.target
    }

    /// Projection used for pointer rays.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Update the viewport size used to turn pixels into rays.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Movement speed currently selected by the speed modifier.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Last move axis received.
    #[must_use]
    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    /// Last rotate axis received.
    #[must_use]
    pub fn rotate_axis(&self) -> f32 {
        self.rotate_axis
    }

    /// Active pan gesture, if its start hit the ground.
    #[must_use]
    pub fn pan_drag(&self) -> Option<&DragSession> {
        self.pan_drag.as_ref()
    }

    /// Active orbit gesture, if its start hit the ground.
    #[must_use]
    pub fn orbit_drag(&self) -> Option<&DragSession> {
        self.orbit_drag.as_ref()
    }

    /// Ray from the lens through a pixel of the viewport.
    #[must_use]
    pub fn screen_point_to_ray(&self, screen_pos: Vec2) -> Ray {
        screen_point_to_ray(&self.rig, &self.projection, screen_pos)
    }

    /// Where the pointer ray meets the ground plane, if it does.
    #[must_use]
    pub fn ground_hit(&self, screen_pos: Vec2) -> Option<Vec3> {
        Plane::GROUND.intersect(&self.screen_point_to_ray(screen_pos))
    }

    /// Deliver an input action to this controller.
    pub fn execute(&mut self, action: CameraAction) {
        action.dispatch(self);
    }

    /// Advance one frame: fold the held axes into the target, then ease
    /// the rig toward it.
    pub fn tick(&mut self, dt: f32) {
        let t = blend_factor(dt, self.options.smoothing_rate);
        let speed = self.movement_speed;

        // Uses the live basis, not the target's.
        self.target.position += self.rig.right() * (speed * self.move_axis.x)
            + self.rig.forward() * (speed * self.move_axis.y);
        self.rig.position = ease(self.rig.position, self.target.position, t);

        self.target.rotation = append_yaw(
            self.target.rotation,
            self.options.rotation_step * self.rotate_axis,
        );
        self.rig.rotation = self.rig.rotation.slerp(self.target.rotation, t);

        self.rig.lens_offset = ease(self.rig.lens_offset, self.target.zoom_offset, t);
    }
}

impl CameraActions for CameraController {
    fn on_move(&mut self, axis: Vec2) {
        self.move_axis = axis;
    }

    fn on_speed_up(&mut self, active: bool) {
        self.movement_speed = if active {
            self.options.fast_speed
        } else {
            self.options.normal_speed
        };
    }

    fn on_rotate(&mut self, axis: f32) {
        self.rotate_axis = axis;
    }

    fn on_zoom(&mut self, axis: f32) {
        self.target.zoom_offset += Vec3::from_array(self.options.zoom_step) * axis;
    }

    fn on_drag_pan(&mut self, drag: DragInput) {
        if drag.control != self.options.pan_button {
            return;
        }
        match drag.phase {
            DragPhase::Start => {
                self.pan_drag = self.ground_hit(drag.screen_pos).map(DragSession::new);
                if let Some(session) = &self.pan_drag {
                    log::trace!("pan drag anchored at {}", session.start);
                }
            }
            DragPhase::Active => {
                let Some(hit) = self.ground_hit(drag.screen_pos) else {
                    return;
                };
                let Some(session) = self.pan_drag.as_mut() else {
                    return;
                };
                session.last = Some(hit);
                // Relative to the live position, not the target.
                self.target.position = self.rig.position + session.start - hit;
            }
        }
    }

    fn on_drag_orbit(&mut self, drag: DragInput) {
        if drag.control != self.options.orbit_button {
            return;
        }
        match drag.phase {
            DragPhase::Start => {
                self.orbit_drag = self.ground_hit(drag.screen_pos).map(DragSession::new);
                if let Some(session) = &self.orbit_drag {
                    log::trace!("orbit drag anchored at {}", session.start);
                }
            }
            DragPhase::Active => {
                let Some(hit) = self.ground_hit(drag.screen_pos) else {
                    return;
                };
                let Some(session) = self.orbit_drag.as_mut() else {
                    return;
                };
                let diff = session.start - hit;
                session.start = hit;
                session.last = Some(hit);
                self.target.rotation = append_yaw(
                    self.target.rotation,
                    -diff.x * self.options.orbit_drag_factor,
                );
            }
        }
    }
}

/// Fraction of the remaining distance covered this frame, clamped to
/// `[0, 1]` so large frame times land on the target instead of
/// overshooting.
#[inline]
fn blend_factor(dt: f32, smoothing_rate: f32) -> f32 {
    (dt * smoothing_rate).clamp(0.0, 1.0)
}

/// Linear blend written as `from + (to - from) * t` so a rig already on
/// its target stays bit-for-bit in place.
#[inline]
fn ease(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from + (to - from) * t
}

/// `rotation` followed by a yaw of `degrees` about its own up axis.
/// Positive degrees turn clockwise seen from above, swinging forward
/// (-Z) toward +X.
#[inline]
fn append_yaw(rotation: Quat, degrees: f32) -> Quat {
    (rotation * Quat::from_rotation_y(-degrees.to_radians())).normalize()
}
