//! Triangle value type.
//!
//! Every transform or clip operation returns a new [`Triangle`]; there is
//! no shared mutable triangle state anywhere in the pipeline. The vertex
//! order `a, b, c` defines the front-face winding used for culling.

use crate::math::{mat4::Mat4, vec3::Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Outward unit normal for counter-clockwise front-face winding.
    pub fn normal(&self) -> Vec3 {
        (self.c - self.b).cross(self.a - self.b).normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Transforms all three vertices as homogeneous points.
    ///
    /// The matrix multiply divides by the resulting W, so this works for
    /// projection matrices as well as affine transforms.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            a: *matrix * self.a,
            b: *matrix * self.b,
            c: *matrix * self.c,
        }
    }

    /// Returns the vertex permutation with `a.y <= b.y <= c.y`.
    ///
    /// In raster space Y grows downward, so `a` ends up as the topmost
    /// vertex. Used to classify triangles as top-flat, bottom-flat, or
    /// general before scanline filling.
    pub fn sorted_by_y(&self) -> Self {
        let mut v = [self.a, self.b, self.c];
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        if v[2].y < v[1].y {
            v.swap(1, 2);
        }
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_of_ccw_triangle_in_xy_plane_points_back() {
        // Counter-clockwise when viewed from +Z
        let tri = Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(tri.normal(), Vec3::BACK);
    }

    #[test]
    fn centroid_averages_the_vertices() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        );
        assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn transformed_applies_the_matrix_to_every_vertex() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::RIGHT, Vec3::UP);
        let moved = tri.transformed(&Mat4::translation(0.0, 0.0, -5.0));
        assert_eq!(moved.a, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(moved.b, Vec3::new(1.0, 0.0, -5.0));
        assert_eq!(moved.c, Vec3::new(0.0, 1.0, -5.0));
    }

    #[test]
    fn transformed_by_projection_divides_by_w() {
        let m = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        let tri = Triangle::new(
            Vec3::new(0.0, 2.0, -2.0),
            Vec3::new(2.0, 0.0, -2.0),
            Vec3::new(0.0, 0.0, -2.0),
        );
        let projected = tri.transformed(&m);
        // Edge of the 90 degree frustum lands on the NDC boundary
        assert_relative_eq!(projected.a.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(projected.b.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn sorted_by_y_orders_vertices_top_to_bottom() {
        let tri = Triangle::new(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 3.0, 0.0),
        );
        let sorted = tri.sorted_by_y();
        assert_eq!(sorted.a.y, 1.0);
        assert_eq!(sorted.b.y, 3.0);
        assert_eq!(sorted.c.y, 5.0);
    }

    #[test]
    fn sorted_by_y_is_a_permutation() {
        let tri = Triangle::new(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        );
        let sorted = tri.sorted_by_y();
        for v in sorted.vertices() {
            assert!(tri.vertices().contains(&v));
        }
    }
}
