//! Segment clipping: Cohen-Sutherland against a box, and against a
//! single half-space.

use crate::math::bounds::BoundingBox;
use crate::math::plane::Plane;
use crate::math::vec3::Vec3;

/// Cohen-Sutherland region bits. A point inside the box has no bits set;
/// each violated boundary sets exactly one.
pub const INSIDE: u8 = 0;
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;
pub const NEAR: u8 = 16;
pub const FAR: u8 = 32;

/// Computes the 6-bit region code of `point` relative to `extents`.
pub fn outcode(extents: &BoundingBox, point: Vec3) -> u8 {
    let mut code = INSIDE;

    if point.x < extents.min.x {
        code |= LEFT;
    } else if point.x > extents.max.x {
        code |= RIGHT;
    }

    if point.y < extents.min.y {
        code |= BOTTOM;
    } else if point.y > extents.max.y {
        code |= TOP;
    }

    if point.z < extents.min.z {
        code |= NEAR;
    } else if point.z > extents.max.z {
        code |= FAR;
    }

    code
}

/// Clips the segment `p0..p1` to an axis-aligned box.
///
/// Classic Cohen-Sutherland: trivially accept when both outcodes are
/// zero, trivially reject when they share a set bit, otherwise replace
/// an outside endpoint with its intersection against the first violated
/// boundary and loop. Each pass strictly shrinks the violated set, so
/// the loop terminates.
///
/// Returns the (possibly shortened) segment, or `None` when it lies
/// entirely outside.
pub fn clip_to_box(extents: &BoundingBox, mut p0: Vec3, mut p1: Vec3) -> Option<(Vec3, Vec3)> {
    let mut code0 = outcode(extents, p0);
    let mut code1 = outcode(extents, p1);

    loop {
        if code0 | code1 == INSIDE {
            return Some((p0, p1));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        // At least one endpoint is outside; pick it.
        let out_code = if code0 == INSIDE { code1 } else { code0 };

        // Intersect with the first violated boundary, in fixed priority
        // order. y = y0 + slope * (x - x0) and friends, solved per axis.
        let clipped = if out_code & TOP != 0 {
            let t = (extents.max.y - p0.y) / (p1.y - p0.y);
            Vec3::new(
                p0.x + (p1.x - p0.x) * t,
                extents.max.y,
                p0.z + (p1.z - p0.z) * t,
            )
        } else if out_code & BOTTOM != 0 {
            let t = (extents.min.y - p0.y) / (p1.y - p0.y);
            Vec3::new(
                p0.x + (p1.x - p0.x) * t,
                extents.min.y,
                p0.z + (p1.z - p0.z) * t,
            )
        } else if out_code & RIGHT != 0 {
            let t = (extents.max.x - p0.x) / (p1.x - p0.x);
            Vec3::new(
                extents.max.x,
                p0.y + (p1.y - p0.y) * t,
                p0.z + (p1.z - p0.z) * t,
            )
        } else if out_code & LEFT != 0 {
            let t = (extents.min.x - p0.x) / (p1.x - p0.x);
            Vec3::new(
                extents.min.x,
                p0.y + (p1.y - p0.y) * t,
                p0.z + (p1.z - p0.z) * t,
            )
        } else if out_code & FAR != 0 {
            let t = (extents.max.z - p0.z) / (p1.z - p0.z);
            Vec3::new(
                p0.x + (p1.x - p0.x) * t,
                p0.y + (p1.y - p0.y) * t,
                extents.max.z,
            )
        } else {
            let t = (extents.min.z - p0.z) / (p1.z - p0.z);
            Vec3::new(
                p0.x + (p1.x - p0.x) * t,
                p0.y + (p1.y - p0.y) * t,
                extents.min.z,
            )
        };

        if out_code == code0 {
            p0 = clipped;
            code0 = outcode(extents, p0);
        } else {
            p1 = clipped;
            code1 = outcode(extents, p1);
        }
    }
}

/// Clips the segment `p0..p1` to the front half-space of `plane`.
///
/// Endpoints on the plane count as in front, so a segment touching the
/// boundary survives unmodified. A segment parallel to the plane but
/// behind it returns `None` (the silent-skip degenerate case).
pub fn clip_to_plane(plane: &Plane, p0: Vec3, p1: Vec3) -> Option<(Vec3, Vec3)> {
    let d0 = plane.signed_distance(p0);
    let d1 = plane.signed_distance(p1);

    if d0 >= 0.0 && d1 >= 0.0 {
        return Some((p0, p1));
    }
    if d0 < 0.0 && d1 < 0.0 {
        return None;
    }

    // The segment straddles the plane: walk from the in-front endpoint
    // toward the behind one and replace the behind endpoint with the
    // intersection.
    let (front, back) = if d0 >= 0.0 { (p0, p1) } else { (p1, p0) };
    let direction = (back - front).normalize();
    let denom = direction.dot(plane.normal);
    if denom == 0.0 {
        return None;
    }

    let t = -plane.signed_distance(front) / denom;
    let intersection = front + direction * t;

    if d0 >= 0.0 {
        Some((p0, intersection))
    } else {
        Some((intersection, p1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn outcode_is_inside_for_points_in_the_box() {
        let extents = unit_box();
        assert_eq!(outcode(&extents, Vec3::ZERO), INSIDE);
        assert_eq!(outcode(&extents, Vec3::ONE), INSIDE);
        assert_eq!(outcode(&extents, Vec3::new(0.5, 0.5, 0.5)), INSIDE);
    }

    #[test]
    fn outcode_sets_one_bit_per_axis_violation() {
        let extents = unit_box();
        assert_eq!(outcode(&extents, Vec3::LEFT), LEFT);
        assert_eq!(outcode(&extents, Vec3::RIGHT * 2.0), RIGHT);
        assert_eq!(outcode(&extents, Vec3::UP * 2.0), TOP);
        assert_eq!(outcode(&extents, Vec3::DOWN), BOTTOM);
        assert_eq!(outcode(&extents, Vec3::FORWARD), NEAR);
        assert_eq!(outcode(&extents, Vec3::BACK * 2.0), FAR);
    }

    #[test]
    fn outcode_combines_bits_for_corner_regions() {
        let extents = unit_box();
        let code = outcode(&extents, Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(code, LEFT | TOP);
    }

    #[test]
    fn clip_to_box_accepts_interior_segments_unmodified() {
        let p0 = Vec3::new(0.25, 0.25, 0.25);
        let p1 = Vec3::new(0.75, 0.75, 0.75);
        assert_eq!(clip_to_box(&unit_box(), p0, p1), Some((p0, p1)));
    }

    #[test]
    fn clip_to_box_rejects_segments_outside_one_boundary() {
        let p0 = Vec3::new(2.0, 0.0, 0.5);
        let p1 = Vec3::new(2.0, 1.0, 0.5);
        assert_eq!(clip_to_box(&unit_box(), p0, p1), None);
    }

    #[test]
    fn clip_to_box_shortens_a_crossing_segment() {
        let (p0, p1) = clip_to_box(
            &unit_box(),
            Vec3::new(-1.0, 0.5, 0.5),
            Vec3::new(2.0, 0.5, 0.5),
        )
        .unwrap();
        assert_relative_eq!(p0.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p1.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p0.y, 0.5);
        assert_relative_eq!(p1.y, 0.5);
    }

    #[test]
    fn clip_to_box_handles_diagonals_through_corner_regions() {
        let (p0, p1) = clip_to_box(
            &unit_box(),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(1.5, 1.5, 0.5),
        )
        .unwrap();
        // Endpoints land exactly on the box after clipping
        assert_eq!(outcode(&unit_box(), p0), INSIDE);
        assert_eq!(outcode(&unit_box(), p1), INSIDE);
        assert_relative_eq!(p0.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p1.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn clip_to_plane_keeps_front_segments() {
        let plane = Plane::new(Vec3::UP, 0.0);
        let p0 = Vec3::new(0.0, 1.0, 0.0);
        let p1 = Vec3::new(1.0, 2.0, 0.0);
        assert_eq!(clip_to_plane(&plane, p0, p1), Some((p0, p1)));
    }

    #[test]
    fn clip_to_plane_drops_behind_segments() {
        let plane = Plane::new(Vec3::UP, 0.0);
        let p0 = Vec3::new(0.0, -1.0, 0.0);
        let p1 = Vec3::new(1.0, -2.0, 0.0);
        assert_eq!(clip_to_plane(&plane, p0, p1), None);
    }

    #[test]
    fn clip_to_plane_shortens_a_straddling_segment() {
        let plane = Plane::new(Vec3::UP, 0.5);
        let (p0, p1) = clip_to_plane(
            &plane,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
        )
        .unwrap();
        assert_eq!(p0, Vec3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(p1.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn clip_to_plane_keeps_boundary_touches() {
        let plane = Plane::new(Vec3::UP, 0.0);
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        // Both endpoints lie exactly on the plane
        assert_eq!(clip_to_plane(&plane, p0, p1), Some((p0, p1)));
    }
}
