use glam::{Mat4, Quat, Vec2, Vec3};

/// Live camera rig: a ground-level pivot carrying a lens node.
///
/// The pivot moves and yaws; the lens hangs off it at `lens_offset` (the
/// zoom offset, in pivot-local space) with a fixed local orientation
/// `lens_rotation`, usually a downward pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Pivot position in world space.
    pub position: Vec3,
    /// Pivot orientation in world space.
    pub rotation: Quat,
    /// Lens position relative to the pivot, in pivot-local space.
    pub lens_offset: Vec3,
    /// Lens orientation relative to the pivot.
    pub lens_rotation: Quat,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            lens_offset: Vec3::ZERO,
            lens_rotation: Quat::IDENTITY,
        }
    }
}

impl CameraRig {
    /// Pivot-local +X in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Pivot-local forward (-Z, right-handed) in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// World-space lens position.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.position + self.rotation * self.lens_offset
    }

    /// World-space lens orientation.
    #[must_use]
    pub fn eye_rotation(&self) -> Quat {
        self.rotation * self.lens_rotation
    }

    /// View matrix looking out of the lens.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let rotation = self.eye_rotation();
        let eye = self.eye_position();
        Mat4::look_to_rh(eye, rotation * Vec3::NEG_Z, rotation * Vec3::Y)
    }
}

/// Perspective projection and viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Viewport width in physical pixels.
    pub width: u32,
    /// Viewport height in physical pixels.
    pub height: u32,
}

impl Projection {
    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Update the viewport size. Zero extents are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // Right-handed, depth mapped to [0, 1].
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect(),
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix for the given rig.
    #[must_use]
    pub fn build_matrix(&self, rig: &CameraRig) -> Mat4 {
        self.build_projection() * rig.view_matrix()
    }
}

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ray from the lens through a pixel.
///
/// `screen_pos` is in physical pixels with the origin at the top-left
/// corner of the viewport, matching window cursor coordinates.
#[must_use]
pub fn screen_point_to_ray(rig: &CameraRig, projection: &Projection, screen_pos: Vec2) -> Ray {
    let width = projection.width.max(1) as f32;
    let height = projection.height.max(1) as f32;
    let ndc_x = 2.0 * screen_pos.x / width - 1.0;
    let ndc_y = 1.0 - 2.0 * screen_pos.y / height;

    let half_height = (projection.fovy.to_radians() * 0.5).tan();
    let local = Vec3::new(
        ndc_x * half_height * projection.aspect(),
        ndc_y * half_height,
        -1.0,
    );

    Ray {
        origin: rig.eye_position(),
        direction: (rig.eye_rotation() * local).normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> Projection {
        Projection {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn default_rig_basis_is_right_handed() {
        let rig = CameraRig::default();
        assert_eq!(rig.right(), Vec3::X);
        assert_eq!(rig.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn eye_position_follows_rig_yaw() {
        let rig = CameraRig {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::from_rotation_y(90_f32.to_radians()),
            lens_offset: Vec3::new(0.0, 0.0, 10.0),
            ..CameraRig::default()
        };
        // +Z rotated 90 degrees about +Y lands on +X
        assert!(rig.eye_position().abs_diff_eq(Vec3::new(11.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn center_ray_points_down_lens_axis() {
        let rig = CameraRig {
            lens_offset: Vec3::new(0.0, 10.0, 0.0),
            lens_rotation: Quat::from_rotation_x(-90_f32.to_radians()),
            ..CameraRig::default()
        };
        let ray = screen_point_to_ray(&rig, &projection(), Vec2::new(400.0, 300.0));
        assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 10.0, 0.0), 1e-5));
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Y, 1e-5));
    }

    #[test]
    fn right_edge_ray_leans_right() {
        let rig = CameraRig::default();
        let ray = screen_point_to_ray(&rig, &projection(), Vec2::new(800.0, 300.0));
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y.abs() < 1e-5);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn top_edge_ray_leans_up() {
        let rig = CameraRig::default();
        let ray = screen_point_to_ray(&rig, &projection(), Vec2::new(400.0, 0.0));
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn resize_clamps_to_one_pixel() {
        let mut p = projection();
        p.resize(0, 0);
        assert_eq!((p.width, p.height), (1, 1));
        assert_eq!(p.aspect(), 1.0);
    }

    #[test]
    fn view_projection_maps_eye_target_to_center() {
        let rig = CameraRig {
            lens_offset: Vec3::new(0.0, 0.0, 10.0),
            ..CameraRig::default()
        };
        let clip = projection().build_matrix(&rig) * Vec3::ZERO.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }
}
