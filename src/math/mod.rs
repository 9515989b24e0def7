//! Linear algebra primitives for the rendering pipeline.
//!
//! # Conventions
//! - Right-handed coordinates: X right, Y up, Z toward the viewer.
//!   [`Vec3::FORWARD`](vec3::Vec3::FORWARD) is `(0, 0, -1)`; a camera with
//!   identity rotation looks down negative Z.
//! - Matrices are column-major with column vectors on the right
//!   (`Mat4 * Vec`), so transforms chain right-to-left.

pub mod bounds;
pub mod mat4;
pub mod plane;
pub mod quat;
pub mod ray;
pub mod vec3;
pub mod vec4;
