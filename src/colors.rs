//! Packed-color helpers and the default palette.
//!
//! Pixels are stored as `0xAARRGGBB`, matching the ARGB8888 texture format
//! the window host uploads to.

/// Frame clear color.
pub const BACKGROUND: u32 = 0xFF14_1414;
/// Ground-plane reference grid.
pub const GRID: u32 = 0xFF80_8080;
/// Filled triangle faces.
pub const FILL: u32 = 0xFF2E_5E8C;
/// Wireframe edges, drawn over fills so silhouettes stay visible.
pub const WIREFRAME: u32 = 0xFFFF_0000;

pub const AXIS_X: u32 = 0xFFFF_0000;
pub const AXIS_Y: u32 = 0xFF00_FF00;
pub const AXIS_Z: u32 = 0xFF00_00FF;

/// Pack RGBA components (each in `0.0..=1.0`) into `0xAARRGGBB`.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let r = (r.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (g.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (b.clamp(0.0, 1.0) * 255.0) as u32;
    let a = (a.clamp(0.0, 1.0) * 255.0) as u32;
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Unpack `0xAARRGGBB` into RGB components in `0.0..=1.0`.
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    (r, g, b)
}
