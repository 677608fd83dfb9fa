//! Marker pass: control-point discs on the visible frame.
//!
//! Warp points draw as fixed-radius black discs, the four corner
//! anchors as larger discs in their own colors. Markers are drawn
//! last, directly onto the output, and are never part of the buffered
//! passes.

use meshgrad_color::ColorField;
use meshgrad_core::{Frame, Rgba};
use meshgrad_math::Vec2;

/// Disc radius for warp points, in device pixels.
pub const WARP_POINT_RADIUS: f32 = 10.0;

/// Disc radius for corner color anchors, in device pixels.
pub const COLOR_POINT_RADIUS: f32 = 15.0;

/// Marker color for warp points.
pub const WARP_POINT_COLOR: Rgba = Rgba::BLACK;

/// Maps normalized device coordinates to pixel coordinates.
#[inline]
fn ndc_to_pixel(p: Vec2, width: u32, height: u32) -> (f32, f32) {
    (
        (p.x + 1.0) * 0.5 * width as f32,
        (1.0 - p.y) * 0.5 * height as f32,
    )
}

/// Rasterizes a filled disc onto the frame.
fn fill_disc(frame: &mut Frame, center: Vec2, radius: f32, color: Rgba) {
    let (cx, cy) = ndc_to_pixel(center, frame.width(), frame.height());
    let r2 = radius * radius;

    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as i64).clamp(0, frame.width() as i64) as u32;
    let y1 = ((cy + radius).ceil() as i64).clamp(0, frame.height() as i64) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                frame.set_pixel(x, y, color);
            }
        }
    }
}

/// Draws warp-point and corner-anchor markers onto the frame.
///
/// `warp_points` are the sources of the viewed orientation; corner
/// anchors come from the color field and draw on top.
pub fn draw(frame: &mut Frame, warp_points: &[Vec2], colors: &ColorField) {
    for &p in warp_points {
        fill_disc(frame, p, WARP_POINT_RADIUS, WARP_POINT_COLOR);
    }
    for corner in colors.positions().iter().zip(colors.colors()) {
        let (&pos, color) = corner;
        fill_disc(frame, pos, COLOR_POINT_RADIUS, color);
    }
}
