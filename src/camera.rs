//! Camera: projection parameters and the per-frame render pass.

use crate::buffer::{self, Buffer};
use crate::clipper::frustum::Frustum;
use crate::clipper::polygon::Polygon;
use crate::colors;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::scene::{MeshActor, Scene};
use crate::transform::Transform;
use crate::triangle::Triangle;

/// Which passes the camera runs per triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Only the clipped edges.
    Wireframe,
    /// Only the filled faces.
    Filled,
    /// Fills first, then edges over them so silhouettes stay visible.
    FilledWireframe,
}

/// A perspective camera driving the full pipeline:
/// world -> camera -> clip -> project -> raster.
///
/// The projection scalars are plain fields; [`set_fov`] and [`set_aspect`]
/// keep the derived canvas dimensions (the image-plane extent at unit
/// distance) coherent when either changes.
///
/// [`set_fov`]: Camera::set_fov
/// [`set_aspect`]: Camera::set_aspect
pub struct Camera {
    pub transform: Transform,
    pub near_clip: f32,
    pub far_clip: f32,
    pub fov_radians: f32,
    pub aspect_ratio: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub render_mode: RenderMode,
}

impl Camera {
    pub fn new() -> Self {
        let fov_radians = std::f32::consts::FRAC_PI_4;
        let aspect_ratio = 1.0;
        let canvas_height = 2.0 * (fov_radians / 2.0).tan();

        Self {
            transform: Transform::new(),
            near_clip: 1.0,
            far_clip: 200.0,
            fov_radians,
            aspect_ratio,
            canvas_width: aspect_ratio * canvas_height,
            canvas_height,
            render_mode: RenderMode::FilledWireframe,
        }
    }

    /// Sets the vertical field of view and rederives the canvas size.
    pub fn set_fov(&mut self, fov_radians: f32) -> &mut Self {
        self.fov_radians = fov_radians;
        self.canvas_height = 2.0 * (fov_radians / 2.0).tan();
        self.canvas_width = self.aspect_ratio * self.canvas_height;
        self
    }

    /// Sets the aspect ratio and rederives the canvas width.
    pub fn set_aspect(&mut self, aspect_ratio: f32) -> &mut Self {
        self.aspect_ratio = aspect_ratio;
        self.canvas_width = aspect_ratio * self.canvas_height;
        self
    }

    /// Matches the aspect ratio to the target buffer, typically after a
    /// window resize.
    pub fn set_aspect_from_bounds(&mut self, width: u32, height: u32) -> &mut Self {
        self.set_aspect(width as f32 / height as f32)
    }

    /// The perspective projection matrix for the current parameters.
    ///
    /// The render pass itself projects through the pinhole divide in
    /// [`buffer::canvas_to_screen`]; the two agree (matrix NDC is
    /// `2 * pipeline NDC - 1` on X and Y), which a test pins down.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(
            self.fov_radians,
            self.aspect_ratio,
            self.near_clip,
            self.far_clip,
        )
    }

    /// The camera-local frustum planes for the current parameters.
    pub fn frustum(&self) -> Frustum {
        Frustum::perspective(
            self.fov_radians,
            self.aspect_ratio,
            self.near_clip,
            self.far_clip,
        )
    }

    /// Renders one frame of `scene` into `buffer`.
    ///
    /// Draws the reference grid and axis lines first, then every actor's
    /// triangles in scene order. There is no depth buffer, so submission
    /// order is paint order. A camera with a singular transform (zero
    /// scale) renders nothing.
    pub fn render(&self, buffer: &mut Buffer, scene: &Scene) {
        let camera_matrix = self.transform.matrix();
        let world_to_camera = match camera_matrix.inverse() {
            Some(m) => m,
            None => return,
        };

        let frustum = self.frustum();
        let world_frustum = frustum.transformed(&camera_matrix);

        self.draw_grid(buffer, &world_to_camera, &frustum);
        self.draw_axes(buffer, &world_to_camera, &frustum);

        for actor in scene.actors() {
            self.render_actor(buffer, &world_to_camera, &frustum, &world_frustum, actor);
        }
    }

    fn render_actor(
        &self,
        buffer: &mut Buffer,
        world_to_camera: &Mat4,
        frustum: &Frustum,
        world_frustum: &Frustum,
        actor: &MeshActor,
    ) {
        let actor_matrix = actor.transform.matrix();

        // Coarse pre-cull: skip the whole mesh when its world-space
        // bounds sit outside the frustum.
        let world_bounds = actor.mesh.bounds().transformed(&actor_matrix);
        if !world_frustum.intersects_box(&world_bounds) {
            return;
        }

        let camera_position = self.transform.position();

        for triangle in actor.mesh.triangles() {
            let world = triangle.transformed(&actor_matrix);

            if is_backface(&world, camera_position) {
                continue;
            }

            let camera_space = world.transformed(world_to_camera);

            if self.render_mode != RenderMode::Wireframe {
                let clipped = frustum.clip_polygon(&Polygon::from_triangle(&camera_space));
                for piece in clipped.triangulate() {
                    let raster = Triangle::new(
                        self.project(buffer, piece.a),
                        self.project(buffer, piece.b),
                        self.project(buffer, piece.c),
                    );
                    buffer.draw_filled_triangle(&raster, colors::FILL);
                }
            }

            if self.render_mode != RenderMode::Filled {
                let [a, b, c] = camera_space.vertices();
                for (start, end) in [(a, b), (b, c), (c, a)] {
                    self.draw_camera_space_line(buffer, frustum, start, end, colors::WIREFRAME);
                }
            }
        }
    }

    /// Projects a camera-space point all the way to raster pixels:
    /// perspective divide, NDC recentering, then the Y-flipping raster
    /// scale.
    fn project(&self, buffer: &Buffer, camera_space: Vec3) -> Vec3 {
        let screen = buffer::canvas_to_screen(camera_space);
        let ndc = buffer::screen_to_ndc(screen, self.canvas_width, self.canvas_height);
        buffer.ndc_to_raster(ndc)
    }

    fn draw_camera_space_line(
        &self,
        buffer: &mut Buffer,
        frustum: &Frustum,
        start: Vec3,
        end: Vec3,
        color: u32,
    ) {
        if let Some((p0, p1)) = frustum.clip_segment(start, end) {
            let a = self.project(buffer, p0);
            let b = self.project(buffer, p1);
            buffer.draw_line_points(a, b, color);
        }
    }

    fn draw_world_line(
        &self,
        buffer: &mut Buffer,
        world_to_camera: &Mat4,
        frustum: &Frustum,
        start: Vec3,
        end: Vec3,
        color: u32,
    ) {
        let a = *world_to_camera * start;
        let b = *world_to_camera * end;
        self.draw_camera_space_line(buffer, frustum, a, b, color);
    }

    /// The fixed 11x11 unit-spaced reference grid on the ground plane.
    fn draw_grid(&self, buffer: &mut Buffer, world_to_camera: &Mat4, frustum: &Frustum) {
        const LINES: i32 = 11;
        let half = (LINES - 1) as f32 / 2.0;

        for i in 0..LINES {
            let offset = -half + i as f32;
            self.draw_world_line(
                buffer,
                world_to_camera,
                frustum,
                Vec3::new(offset, 0.0, -half),
                Vec3::new(offset, 0.0, half),
                colors::GRID,
            );
            self.draw_world_line(
                buffer,
                world_to_camera,
                frustum,
                Vec3::new(-half, 0.0, offset),
                Vec3::new(half, 0.0, offset),
                colors::GRID,
            );
        }
    }

    /// Unit axis lines from the world origin, one color per axis.
    fn draw_axes(&self, buffer: &mut Buffer, world_to_camera: &Mat4, frustum: &Frustum) {
        for (axis, color) in [
            (Vec3::RIGHT, colors::AXIS_X),
            (Vec3::UP, colors::AXIS_Y),
            (Vec3::FORWARD, colors::AXIS_Z),
        ] {
            self.draw_world_line(buffer, world_to_camera, frustum, Vec3::ZERO, axis, color);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosine test against the direction from the camera to the triangle:
/// a face whose outward normal does not point back at the camera is
/// invisible and skipped before any clipping work.
fn is_backface(world: &Triangle, camera_position: Vec3) -> bool {
    let view_direction = (world.centroid() - camera_position).normalize();
    view_direction.dot(world.normal()) >= 0.0
}
