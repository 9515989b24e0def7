//! Plane: unit normal plus offset from the origin along that normal.

use super::mat4::Mat4;
use super::ray::Ray;
use super::vec3::Vec3;
use super::vec4::Vec4;

/// The plane of points `p` satisfying `normal . p == d`.
///
/// `d` is the plane's distance from the origin along its normal, so the
/// plane `y = 0.5` is `Plane::new(Vec3::UP, 0.5)`. A point is "in front"
/// of the plane when its signed distance is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and its offset along that normal.
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive on the normal's side, negative behind, zero on the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }

    /// Strictly in front: signed distance greater than zero.
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Intersects a ray with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane (including
    /// rays lying in the plane) or when the intersection lies behind the
    /// ray origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = -self.signed_distance(ray.origin) / denom;
        if t < 0.0 {
            return None;
        }

        Some(ray.at(t))
    }

    /// Transforms the plane by a rigid transform (rotation + translation).
    ///
    /// Moves a point on the plane through the matrix, rotates the normal
    /// by the matrix's linear part, and recomputes `d`. Correct for the
    /// camera transforms this renderer feeds it; non-uniform scale would
    /// need the inverse-transpose instead.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let world_point = *matrix * (self.normal * self.d);
        let rotated = *matrix * Vec4::from_vec3(self.normal, 0.0);
        let normal = rotated.to_vec3().normalize();

        Self {
            normal,
            d: normal.dot(world_point),
        }
    }
}
