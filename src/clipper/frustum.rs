//! The six view-frustum planes and the clip drivers built on them.

use crate::clipper::line;
use crate::clipper::polygon::Polygon;
use crate::math::bounds::BoundingBox;
use crate::math::mat4::Mat4;
use crate::math::plane::Plane;
use crate::math::vec3::Vec3;

/// A convex clip region bounded by six planes whose normals point into
/// the interior: near, far, left, right, top, bottom.
///
/// Built in camera space (camera at the origin looking down negative Z)
/// and optionally transformed into world space for coarse culling. Never
/// stored across frames; derived on demand from the camera parameters.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Derives the camera-space frustum from perspective parameters.
    ///
    /// Near and far are axis-aligned planes at `z = -near` and
    /// `z = -far`. The four side planes pass through the origin, tilted
    /// by the half field of view; the horizontal pair uses the aspect
    /// corrected `fov_x = 2 * atan(aspect * tan(fov_y / 2))`.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let half_y = fov_y / 2.0;
        let half_x = (aspect_ratio * half_y.tan()).atan();

        Self {
            planes: [
                // Near: in front means z <= -near
                Plane::new(Vec3::new(0.0, 0.0, -1.0), near),
                // Far: in front means z >= -far
                Plane::new(Vec3::new(0.0, 0.0, 1.0), -far),
                // Left
                Plane::new(Vec3::new(half_x.cos(), 0.0, -half_x.sin()), 0.0),
                // Right
                Plane::new(Vec3::new(-half_x.cos(), 0.0, -half_x.sin()), 0.0),
                // Top
                Plane::new(Vec3::new(0.0, -half_y.cos(), -half_y.sin()), 0.0),
                // Bottom
                Plane::new(Vec3::new(0.0, half_y.cos(), -half_y.sin()), 0.0),
            ],
        }
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Transforms every plane by a rigid transform, yielding the frustum
    /// in the target space (typically camera-local to world).
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let mut planes = self.planes;
        for plane in &mut planes {
            *plane = plane.transformed(matrix);
        }
        Self { planes }
    }

    /// Sutherland-Hodgman clip of a convex polygon against all six planes.
    pub fn clip_polygon(&self, polygon: &Polygon) -> Polygon {
        polygon.clip(&self.planes)
    }

    /// Clips a segment against all six planes.
    ///
    /// Returns `None` as soon as any plane rejects it entirely.
    pub fn clip_segment(&self, mut p0: Vec3, mut p1: Vec3) -> Option<(Vec3, Vec3)> {
        for plane in &self.planes {
            (p0, p1) = line::clip_to_plane(plane, p0, p1)?;
        }
        Some((p0, p1))
    }

    /// Conservative box test for per-actor pre-culling.
    ///
    /// Positive-vertex test: for each plane, take the box corner furthest
    /// along the plane normal; if even that corner is behind, the whole
    /// box is outside. Returns `false` only for boxes fully outside at
    /// least one plane, so false positives near corners are possible and
    /// harmless.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        for plane in &self.planes {
            let positive = Vec3::new(
                if plane.normal.x >= 0.0 {
                    bounds.max.x
                } else {
                    bounds.min.x
                },
                if plane.normal.y >= 0.0 {
                    bounds.max.y
                } else {
                    bounds.min.y
                },
                if plane.normal.z >= 0.0 {
                    bounds.max.z
                } else {
                    bounds.min.z
                },
            );
            if plane.signed_distance(positive) < 0.0 {
                return false;
            }
        }
        true
    }
}
