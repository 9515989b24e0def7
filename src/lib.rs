//! A CPU-based software 3D rasterizer.
//!
//! Every pixel is produced on the CPU: meshes go through transform,
//! backface culling, camera-space frustum clipping, pinhole projection,
//! and scanline rasterization into a plain `u32` pixel buffer. SDL2 is
//! used only to put that buffer on screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastrum::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.push(MeshActor::new(Mesh::cube()));
//!
//! let camera = Camera::new();
//! let mut buffer = Buffer::new(800, 600);
//! buffer.clear(colors::BACKGROUND);
//! camera.render(&mut buffer, &scene);
//! ```

pub mod buffer;
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod transform;
pub mod triangle;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use buffer::Buffer;
pub use camera::{Camera, RenderMode};
pub use mesh::{Mesh, MeshError};
pub use scene::{MeshActor, Scene};
pub use transform::Transform;
pub use triangle::Triangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastrum::prelude::*;
/// ```
pub mod prelude {
    // Rendering
    pub use crate::buffer::Buffer;
    pub use crate::camera::{Camera, RenderMode};
    pub use crate::colors;

    // Scene
    pub use crate::mesh::{Mesh, MeshError};
    pub use crate::scene::{MeshActor, Scene};
    pub use crate::transform::Transform;
    pub use crate::triangle::Triangle;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window & Input
    pub use crate::window::{FpsCounter, FrameLimiter, InputState, Window, WindowEvent};
}
