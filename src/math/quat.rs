//! Unit quaternions for 3D rotation.
//!
//! Rotations compose through multiplication: `a * b` applies `b` first,
//! then `a`, matching the column-major matrix convention. Accumulating
//! many small rotations drifts off unit length, so long-lived quaternions
//! should be re-normalized now and then (see [`Quat::normalize`]).

use std::ops::Mul;

use super::vec3::Vec3;

/// A rotation stored as `(x, y, z)` vector part + `w` scalar part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// The axis must be normalized.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let sin = half.sin();
        Self {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: half.cos(),
        }
    }

    /// Creates a rotation from yaw (around Y), pitch (around X), and roll
    /// (around Z), applied in that order.
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self {
            x: cy * sp * cr + sy * cp * sr,
            y: sy * cp * cr - cy * sp * sr,
            z: cy * cp * sr - sy * sp * cr,
            w: cy * cp * cr + sy * sp * sr,
        }
    }

    /// Creates the rotation that turns [`Vec3::FORWARD`] onto `direction`.
    ///
    /// `direction` does not need to be normalized. The antiparallel case
    /// (looking straight backward) resolves to a half-turn around
    /// [`Vec3::UP`].
    pub fn look_rotation(direction: Vec3) -> Self {
        let forward = direction.normalize();
        let dot = Vec3::FORWARD.dot(forward);

        if (dot + 1.0).abs() < 1e-6 {
            return Self::from_axis_angle(Vec3::UP, std::f32::consts::PI);
        }
        if (dot - 1.0).abs() < 1e-6 {
            return Self::IDENTITY;
        }

        let angle = dot.acos();
        let axis = Vec3::FORWARD.cross(forward).normalize();
        Self::from_axis_angle(axis, angle)
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2)).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
            w: self.w / magnitude,
        }
    }

    /// The inverse rotation (valid for unit quaternions).
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotates a vector by this quaternion.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        // q v q^-1 expanded into two cross products
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }
}

/// Hamilton product: `a * b` applies b's rotation first, then a's.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}
