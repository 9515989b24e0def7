//! Axis-aligned bounding box.

use super::mat4::Mat4;
use super::vec3::Vec3;

/// Axis-aligned box spanning `min..=max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all `points`.
    ///
    /// An empty slice yields a degenerate box at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut iter = points.iter();
        let first = match iter.next() {
            Some(p) => *p,
            None => Vec3::ZERO,
        };

        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.min(*p);
            max = max.max(*p);
        }

        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Axis-aligned box enclosing this box after an affine transform.
    ///
    /// Arvo's method: transform the center directly and run the extents
    /// through the absolute value of the linear 3x3 part, which avoids
    /// transforming all eight corners.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let center = *matrix * self.center();
        let e = self.extents();

        let mut abs_e = [0.0f32; 3];
        for (row, out) in abs_e.iter_mut().enumerate() {
            *out = matrix.get(row, 0).abs() * e.x
                + matrix.get(row, 1).abs() * e.y
                + matrix.get(row, 2).abs() * e.z;
        }
        let extents = Vec3::new(abs_e[0], abs_e[1], abs_e[2]);

        Self {
            min: center - extents,
            max: center + extents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn from_points_spans_all_inputs() {
        let b = BoundingBox::from_points(&[
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ]);
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 0.5));
    }

    #[test]
    fn center_and_extents_split_the_box() {
        let b = BoundingBox::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(b.extents(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn transformed_by_translation_shifts_the_box() {
        let b = BoundingBox::new(-Vec3::ONE, Vec3::ONE);
        let moved = b.transformed(&Mat4::translation(5.0, 0.0, 0.0));
        assert_eq!(moved.min, Vec3::new(4.0, -1.0, -1.0));
        assert_eq!(moved.max, Vec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn transformed_box_contains_all_transformed_corners() {
        let b = BoundingBox::new(-Vec3::ONE * 0.5, Vec3::ONE * 0.5);
        let m = Mat4::translation(1.0, 2.0, 3.0) * Mat4::rotation_y(FRAC_PI_4);
        let world = b.transformed(&m);

        for corner in b.corners() {
            let p = m * corner;
            assert!(p.x >= world.min.x - 1e-5 && p.x <= world.max.x + 1e-5);
            assert!(p.y >= world.min.y - 1e-5 && p.y <= world.max.y + 1e-5);
            assert!(p.z >= world.min.z - 1e-5 && p.z <= world.max.z + 1e-5);
        }
        assert_relative_eq!(world.center().x, 1.0, epsilon = 1e-5);
    }
}
