//! Sutherland-Hodgman polygon clipping with fan re-triangulation.

use crate::math::plane::Plane;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Squared distance below which two clip output vertices are considered
/// the same point and the later one is dropped.
const WELD_EPSILON_SQ: f32 = 1e-12;

/// A convex polygon represented as a vertex loop.
///
/// Intermediate representation used during clipping; after all planes
/// have been applied the polygon is triangulated back into a fan.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    pub fn from_triangle(triangle: &Triangle) -> Self {
        Self {
            vertices: vec![triangle.a, triangle.b, triangle.c],
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// True once clipping has reduced the polygon below a triangle.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Clips against the front half-space of one plane.
    ///
    /// Walks consecutive vertex pairs (wrapping), emitting each in-front
    /// vertex and the edge/plane intersection wherever an edge crosses.
    /// Vertices exactly on the plane count as in front, so a polygon
    /// already inside comes back unchanged. Output winding preserves the
    /// input winding.
    ///
    /// Invariant: never emits a zero-length edge. An intersection that
    /// coincides with the previously emitted vertex (or with the first
    /// vertex when the loop closes) is welded away.
    pub fn clip_against_plane(&self, plane: &Plane) -> Self {
        if self.vertices.len() < 3 {
            return Self { vertices: vec![] };
        }

        let mut output: Vec<Vec3> = Vec::with_capacity(self.vertices.len() + 1);
        let mut push_welded = |output: &mut Vec<Vec3>, point: Vec3| {
            let duplicate = output.last().is_some_and(|last| {
                let d = point - *last;
                d.dot(d) < WELD_EPSILON_SQ
            }) || output.first().is_some_and(|first| {
                let d = point - *first;
                d.dot(d) < WELD_EPSILON_SQ
            });
            if !duplicate {
                output.push(point);
            }
        };

        for i in 0..self.vertices.len() {
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % self.vertices.len()];

            let d1 = plane.signed_distance(current);
            let d2 = plane.signed_distance(next);

            if d1 >= 0.0 {
                push_welded(&mut output, current);

                if d2 < 0.0 {
                    // Leaving the half-space: emit the crossing point
                    let t = d1 / (d1 - d2);
                    push_welded(&mut output, current.lerp(next, t));
                }
            } else if d2 >= 0.0 {
                // Entering the half-space: emit the crossing point
                let t = d1 / (d1 - d2);
                push_welded(&mut output, current.lerp(next, t));
            }
        }

        Self { vertices: output }
    }

    /// Clips against a sequence of planes, short-circuiting as soon as
    /// the polygon is clipped away.
    pub fn clip(&self, planes: &[Plane]) -> Self {
        let mut result = self.clone();
        for plane in planes {
            if result.is_empty() {
                break;
            }
            result = result.clip_against_plane(plane);
        }
        result
    }

    /// Fan triangulation: vertex 0 as pivot, consecutive pairs as the
    /// other two. Correct only for convex polygons, which is what
    /// clipping a convex input against convex half-spaces produces.
    pub fn triangulate(&self) -> impl Iterator<Item = Triangle> + '_ {
        (1..self.vertices.len().saturating_sub(1)).map(move |i| {
            Triangle::new(
                self.vertices[0],
                self.vertices[i],
                self.vertices[i + 1],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-6);
    }

    #[test]
    fn triangle_clipped_by_half_space_becomes_a_quad() {
        // Half-space y <= 0.5: normal points down, offset -0.5
        let plane = Plane::new(Vec3::DOWN, -0.5);
        let polygon = Polygon::from_triangle(&Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ));

        let clipped = polygon.clip_against_plane(&plane);
        let vertices = clipped.vertices();

        // Walk order preserves the input winding: the surviving apex-side
        // vertices are replaced by the two crossing points.
        assert_eq!(vertices.len(), 4);
        assert_vec3_eq(vertices[0], Vec3::new(0.0, 0.0, 0.0));
        assert_vec3_eq(vertices[1], Vec3::new(0.0, 0.5, 0.0));
        assert_vec3_eq(vertices[2], Vec3::new(0.5, 0.5, 0.0));
        assert_vec3_eq(vertices[3], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn polygon_fully_in_front_is_unchanged() {
        let plane = Plane::new(Vec3::UP, 0.0);
        let triangle = Triangle::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        );
        let polygon = Polygon::from_triangle(&triangle);

        let clipped = polygon.clip_against_plane(&plane);
        assert_eq!(clipped.vertices(), polygon.vertices());
    }

    #[test]
    fn boundary_vertices_survive() {
        // Idempotence requires points exactly on the plane to stay
        let plane = Plane::new(Vec3::UP, 0.0);
        let polygon = Polygon::from_triangle(&Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ));

        let clipped = polygon.clip_against_plane(&plane);
        assert_eq!(clipped.vertices(), polygon.vertices());
    }

    #[test]
    fn polygon_fully_behind_is_clipped_away() {
        let plane = Plane::new(Vec3::UP, 1.0);
        let polygon = Polygon::from_triangle(&Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        ));

        assert!(polygon.clip_against_plane(&plane).is_empty());
    }

    #[test]
    fn vertex_touching_the_plane_emits_no_duplicate() {
        // Apex lies exactly on the clip plane; without welding, the
        // crossing point would duplicate it.
        let plane = Plane::new(Vec3::DOWN, -1.0);
        let polygon = Polygon::from_triangle(&Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ));

        let clipped = polygon.clip_against_plane(&plane);
        let vertices = clipped.vertices();
        assert_eq!(vertices.len(), 3);
        for window in vertices.windows(2) {
            assert!((window[1] - window[0]).magnitude() > 1e-6);
        }
    }

    #[test]
    fn clip_short_circuits_on_empty() {
        let planes = [
            Plane::new(Vec3::UP, 10.0),
            Plane::new(Vec3::RIGHT, 0.0),
            Plane::new(Vec3::DOWN, 0.0),
        ];
        let polygon = Polygon::from_triangle(&Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ));

        assert!(polygon.clip(&planes).is_empty());
    }

    #[test]
    fn triangulate_fans_from_the_first_vertex() {
        let quad = Polygon::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]);

        let triangles: Vec<Triangle> = quad.triangulate().collect();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].a, quad.vertices()[0]);
        assert_eq!(triangles[0].b, quad.vertices()[1]);
        assert_eq!(triangles[0].c, quad.vertices()[2]);
        assert_eq!(triangles[1].b, quad.vertices()[2]);
        assert_eq!(triangles[1].c, quad.vertices()[3]);
    }

    #[test]
    fn triangulate_of_empty_polygon_is_empty() {
        let empty = Polygon::new(vec![]);
        assert_eq!(empty.triangulate().count(), 0);
    }
}
