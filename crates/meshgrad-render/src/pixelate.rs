//! Pixelate pass: mosaic by grid-snapped sampling.
//!
//! Each output pixel samples the source at its grid cell's origin
//! (`x - x % size`, `y - y % size`). A cell size of 1 device pixel is
//! the identity.

use meshgrad_core::{Frame, Result};

/// Applies the pixelate effect from `src` into `dst`.
///
/// A `pixel_size` of 0 is treated as 1.
///
/// # Errors
///
/// Returns [`meshgrad_core::Error::DimensionMismatch`] when the frames
/// disagree on size.
pub fn apply(src: &Frame, dst: &mut Frame, pixel_size: u32) -> Result<()> {
    src.check_same_size(dst)?;

    let size = pixel_size.max(1);
    for y in 0..dst.height() {
        let sy = y - y % size;
        for x in 0..dst.width() {
            let sx = x - x % size;
            dst.set_pixel(x, y, src.pixel(sx, sy));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshgrad_core::Rgba;

    fn ramp_frame(w: u32, h: u32) -> Frame {
        let mut frame = Frame::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                frame.set_pixel(x, y, Rgba::rgb(x as f32 / w as f32, y as f32 / h as f32, 0.0));
            }
        }
        frame
    }

    #[test]
    fn test_pixel_size_one_is_identity() {
        let src = ramp_frame(16, 16);
        let mut dst = Frame::new(16, 16).unwrap();
        apply(&src, &mut dst, 1).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn test_cells_are_constant() {
        let src = ramp_frame(16, 16);
        let mut dst = Frame::new(16, 16).unwrap();
        apply(&src, &mut dst, 4).unwrap();

        // Every pixel of a cell carries the cell origin's color.
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(dst.pixel(x, y), src.pixel(x - x % 4, y - y % 4));
            }
        }
        // Adjacent cells differ on a ramp.
        assert_ne!(dst.pixel(0, 0), dst.pixel(4, 0));
    }

    #[test]
    fn test_size_larger_than_frame() {
        let src = ramp_frame(8, 8);
        let mut dst = Frame::new(8, 8).unwrap();
        apply(&src, &mut dst, 32).unwrap();
        // Single cell: everything is the top-left pixel.
        for (_, _, px) in dst.pixels() {
            assert_eq!(px, src.pixel(0, 0));
        }
    }

    #[test]
    fn test_zero_size_treated_as_one() {
        let src = ramp_frame(4, 4);
        let mut dst = Frame::new(4, 4).unwrap();
        apply(&src, &mut dst, 0).unwrap();
        assert_eq!(src, dst);
    }
}
