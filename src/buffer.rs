//! Pixel buffer: the rasterizer target.
//!
//! Owns a flat array of packed `0xAARRGGBB` pixels, row-major with the
//! origin at the top left. All draw calls clip individual pixels against
//! the bounds (out-of-range writes are silently skipped) rather than
//! rejecting whole primitives.

use std::path::Path;

use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Projects a camera-space point onto the image plane at unit distance.
///
/// This is the homogeneous divide of the perspective projection: the
/// camera looks down negative Z, so W is `-z`. The returned Z is the
/// (positive) depth, carried along for the later conversions.
pub fn canvas_to_screen(point: Vec3) -> Vec3 {
    Vec3::new(point.x / -point.z, point.y / -point.z, -point.z)
}

/// Recenters a screen-space point into normalized device coordinates
/// `[0, 1]` using the canvas dimensions at unit distance.
pub fn screen_to_ndc(screen: Vec3, canvas_width: f32, canvas_height: f32) -> Vec3 {
    Vec3::new(
        (screen.x + canvas_width / 2.0) / canvas_width,
        (screen.y + canvas_height / 2.0) / canvas_height,
        screen.z,
    )
}

/// Inverse of [`screen_to_ndc`]; used by the round-trip tests.
pub fn ndc_to_screen(ndc: Vec3, canvas_width: f32, canvas_height: f32) -> Vec3 {
    Vec3::new(
        ndc.x * canvas_width - canvas_width / 2.0,
        ndc.y * canvas_height - canvas_height / 2.0,
        ndc.z,
    )
}

pub struct Buffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Buffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.pixels[index] = color;
        }
    }

    /// Fills the horizontal run `x0..=x1` on row `y`, clamped to bounds.
    pub fn draw_scanline(&mut self, y: i32, x0: i32, x1: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }

        let (mut x0, mut x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if x1 < 0 || x0 >= self.width as i32 {
            return;
        }

        x0 = x0.max(0);
        x1 = x1.min(self.width as i32 - 1);

        let start = (y as u32 * self.width + x0 as u32) as usize;
        let end = (y as u32 * self.width + x1 as u32) as usize;
        self.pixels[start..=end].fill(color);
    }

    /// Draws a line with integer Bresenham.
    ///
    /// Exactly-horizontal lines dispatch to the scanline fill, which
    /// fills the run in one slice write instead of stepping pixels.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        if y0 == y1 {
            self.draw_scanline(y0, x0, x1, color);
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        // Error term tracks the distance from the ideal line; when it
        // tips past a threshold we also step on the minor axis.
        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draws the line between two raster-space points, truncating to
    /// pixel coordinates.
    pub fn draw_line_points(&mut self, a: Vec3, b: Vec3, color: u32) {
        self.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }

    /// Fills a triangle given in raster coordinates.
    ///
    /// Sorts the vertices by ascending Y, then classifies within half a
    /// pixel: a horizontal bottom edge fills as one bottom-flat triangle,
    /// a horizontal top edge as one top-flat, and the general case splits
    /// at the middle vertex's height into a bottom-flat/top-flat pair.
    /// The split paints the seam row exactly once.
    pub fn draw_filled_triangle(&mut self, raster: &Triangle, color: u32) {
        let sorted = raster.sorted_by_y();

        if (sorted.b.y - sorted.c.y).abs() < 0.5 {
            self.fill_bottom_flat(sorted.a, sorted.b, sorted.c, color);
            return;
        }

        if (sorted.a.y - sorted.b.y).abs() < 0.5 {
            self.fill_top_flat(sorted.a, sorted.b, sorted.c, sorted.a.y as i32, color);
            return;
        }

        // Synthesize the fourth vertex on edge A-C at B's height
        let t = (sorted.b.y - sorted.a.y) / (sorted.c.y - sorted.a.y);
        let split = Vec3::new(
            sorted.a.x + t * (sorted.c.x - sorted.a.x),
            sorted.b.y,
            sorted.b.z,
        );

        self.fill_bottom_flat(sorted.a, sorted.b, split, color);
        // The upper half painted the seam row; start one row below it
        self.fill_top_flat(sorted.b, split, sorted.c, sorted.b.y as i32 + 1, color);
    }

    /// Fills a triangle whose flat edge is at the bottom (`v2`, `v3`
    /// share B's height; `v1` is the top apex). Walks scanlines downward
    /// from the apex, tracking both edge X-intercepts incrementally.
    fn fill_bottom_flat(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, color: u32) {
        let inv_slope1 = (v2.x - v1.x) / (v2.y - v1.y);
        let inv_slope2 = (v3.x - v1.x) / (v3.y - v1.y);

        let mut cur_x1 = v1.x;
        let mut cur_x2 = v1.x;

        for y in (v1.y as i32)..=(v2.y as i32) {
            self.draw_scanline(y, cur_x1 as i32, cur_x2 as i32, color);
            cur_x1 += inv_slope1;
            cur_x2 += inv_slope2;
        }
    }

    /// Fills a triangle whose flat edge is at the top (`v1`, `v2` share
    /// a height; `v3` is the bottom apex). Walks upward from the apex
    /// until `first_row`, which the general-triangle split sets below
    /// the seam so the seam row is painted exactly once.
    fn fill_top_flat(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, first_row: i32, color: u32) {
        let inv_slope1 = (v3.x - v1.x) / (v3.y - v1.y);
        let inv_slope2 = (v3.x - v2.x) / (v3.y - v2.y);

        let mut cur_x1 = v3.x;
        let mut cur_x2 = v3.x;

        let mut y = v3.y as i32;
        while y >= first_row {
            self.draw_scanline(y, cur_x1 as i32, cur_x2 as i32, color);
            cur_x1 -= inv_slope1;
            cur_x2 -= inv_slope2;
            y -= 1;
        }
    }

    /// Converts a normalized-device-coordinate point to raster pixels:
    /// Y flips so the origin moves to the top left.
    pub fn ndc_to_raster(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            ndc.x * self.width as f32,
            (1.0 - ndc.y) * self.height as f32,
            ndc.z,
        )
    }

    /// Inverse of [`ndc_to_raster`]; used by the round-trip tests.
    pub fn raster_to_ndc(&self, raster: Vec3) -> Vec3 {
        Vec3::new(
            raster.x / self.width as f32,
            1.0 - raster.y / self.height as f32,
            raster.z,
        )
    }

    /// Raw view of the pixels for streaming-texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Saves the buffer as a PNG, forcing full opacity.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            rgba.push(((pixel >> 16) & 0xFF) as u8);
            rgba.push(((pixel >> 8) & 0xFF) as u8);
            rgba.push((pixel & 0xFF) as u8);
            rgba.push(0xFF);
        }

        image::save_buffer(
            path,
            &rgba,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}
