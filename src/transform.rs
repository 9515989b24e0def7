//! Transform component for 3D objects.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position,
//! rotation (quaternion), and scale.

use crate::math::{mat4::Mat4, quat::Quat, vec3::Vec3};

/// A 3D transform with position, rotation, and scale.
///
/// The composed matrix is `T * R * S` in column-vector convention: scale is
/// applied first, then rotation, then translation. The matrix is recomputed
/// on every [`matrix`](Transform::matrix) call rather than cached.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(5.0, 2.0, 0.0)
///     .rotate_y(0.1)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=identity, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    /// Get the position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the position.
    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    /// Set the position from x, y, z components.
    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Rotation ============

    /// Get the rotation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Set the rotation.
    pub fn set_rotation(&mut self, rotation: Quat) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Apply an incremental rotation in local space.
    ///
    /// Re-normalizes so long animation runs don't drift off unit length.
    pub fn rotate(&mut self, delta: Quat) -> &mut Self {
        self.rotation = (self.rotation * delta).normalize();
        self
    }

    /// Rotate around the local X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotate(Quat::from_axis_angle(Vec3::RIGHT, angle))
    }

    /// Rotate around the local Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotate(Quat::from_axis_angle(Vec3::UP, angle))
    }

    /// Rotate around the local Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotate(Quat::from_axis_angle(Vec3::BACK, angle))
    }

    /// Orient the transform so its forward axis points at `target`.
    pub fn look_at(&mut self, target: Vec3) -> &mut Self {
        self.rotation = Quat::look_rotation(target - self.position);
        self
    }

    // ============ Scale ============

    /// Get the scale.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the scale.
    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    // ============ Derived ============

    /// World-space forward axis.
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(Vec3::FORWARD)
    }

    /// World-space right axis.
    pub fn right(&self) -> Vec3 {
        self.rotation.rotate(Vec3::RIGHT)
    }

    /// World-space up axis.
    pub fn up(&self) -> Vec3 {
        self.rotation.rotate(Vec3::UP)
    }

    /// Generate the local-to-world matrix.
    ///
    /// Order: `Translation * Rotation * Scale` (scale applied first).
    /// A zero scale is legal and produces a singular matrix; callers that
    /// need the inverse get `None` and skip the dependent work.
    pub fn matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::from_quat(self.rotation)
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn default_is_the_identity_transform() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.rotation(), Quat::IDENTITY);
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::identity());
    }

    #[test]
    fn fluent_api_chains() {
        let mut t = Transform::new();
        t.set_position_xyz(1.0, 2.0, 3.0)
            .rotate_y(0.5)
            .set_scale_uniform(2.0);

        assert_eq!(t.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn matrix_applies_scale_before_rotation_before_translation() {
        let mut t = Transform::new();
        t.set_position(Vec3::new(10.0, 0.0, 0.0))
            .set_rotation(Quat::from_axis_angle(Vec3::UP, FRAC_PI_2))
            .set_scale_uniform(2.0);

        // (1,0,0) -> scaled (2,0,0) -> yawed 90 degrees (0,0,-2) -> translated
        assert_vec3_eq(t.matrix() * Vec3::RIGHT, Vec3::new(10.0, 0.0, -2.0));
    }

    #[test]
    fn forward_tracks_rotation() {
        let mut t = Transform::new();
        assert_vec3_eq(t.forward(), Vec3::FORWARD);

        t.rotate_y(FRAC_PI_2);
        assert_vec3_eq(t.forward(), Vec3::LEFT);
        assert_vec3_eq(t.right(), Vec3::FORWARD);
    }

    #[test]
    fn look_at_faces_the_target() {
        let mut t = Transform::new();
        t.set_position(Vec3::new(0.0, 0.0, 3.0)).look_at(Vec3::ZERO);
        assert_vec3_eq(t.forward(), Vec3::FORWARD);
    }

    #[test]
    fn zero_scale_yields_a_singular_matrix() {
        let mut t = Transform::new();
        t.set_scale_uniform(0.0);
        assert!(t.matrix().inverse().is_none());
    }
}
