//! PNG export of a rendered frame.
//!
//! Converts the float frame to 8-bit RGBA and writes it with the `png`
//! encoder.

use anyhow::{Context, Result};
use meshgrad_core::Frame;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Quantizes a frame to 8-bit RGBA bytes.
fn to_rgba8(frame: &Frame) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(frame.pixel_count() * 4);
    for px in frame.data() {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        bytes.extend_from_slice(&[q(px.r), q(px.g), q(px.b), q(px.a)]);
    }
    bytes
}

/// Writes a frame to a PNG file.
pub fn write_png(path: &Path, frame: &Frame) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .context("failed to write PNG header")?;
    png_writer
        .write_image_data(&to_rgba8(frame))
        .context("failed to write PNG data")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshgrad_core::Rgba;

    #[test]
    fn test_quantization() {
        let mut frame = Frame::new(2, 1).unwrap();
        frame.set_pixel(0, 0, Rgba::new(1.0, 0.5, 0.0, 1.0));
        frame.set_pixel(1, 0, Rgba::new(-0.5, 2.0, 0.25, 0.5));

        let bytes = to_rgba8(&frame);
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &[255, 128, 0, 255]);
        // Out-of-range values clamp before quantization.
        assert_eq!(&bytes[4..8], &[0, 255, 64, 128]);
    }
}
