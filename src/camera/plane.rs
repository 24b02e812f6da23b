//! Infinite planes and ray intersection.
//!
//! Drag gestures project the pointer onto the ground plane so pointer
//! motion becomes world-space motion independent of zoom level.

use glam::Vec3;

use super::core::Ray;

/// Rays whose direction is this close to parallel with a plane never hit it.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: n · p + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// The world horizontal plane through the origin, facing up.
    pub const GROUND: Self = Self {
        normal: Vec3::Y,
        distance: 0.0,
    };

    /// Plane with the given normal passing through `point`.
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Distance along `ray` to the plane.
    ///
    /// `None` when the ray runs parallel to the plane or the plane lies
    /// behind the ray origin.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        (t > 0.0).then_some(t)
    }

    /// World-space hit point of `ray` on the plane, if any.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|t| ray.point_at(t))
    }
}
