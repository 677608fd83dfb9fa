//! Rainbow pass: harmonic hue-rotated tint over the image.
//!
//! Each corner color gets a hue-rotated variant from a harmonic
//! scheme that escalates with intensity (complementary, then triadic,
//! then tetradic). Per pixel, sinusoidal spatial factors blend each
//! base color toward its variant; the four tinted colors are combined
//! with the gradient's inverse-square corner weighting and the result
//! is mixed over the input at a fixed 0.8 factor.

use meshgrad_color::{ColorField, hsl};
use meshgrad_core::{Frame, Result, Rgba};
use meshgrad_math::{Vec2, fract};
use std::f32::consts::{FRAC_PI_2, PI};

/// Fixed mix factor of the tint over the source image.
const MIX: f32 = 0.8;

/// Spatial wave directions, one per corner.
const WAVE_DIRS: [Vec2; 4] = [
    Vec2::new(1.0, 0.7),
    Vec2::new(-0.6, 1.1),
    Vec2::new(0.9, -0.8),
    Vec2::new(-1.2, -0.5),
];

/// Spatial wave phases, one per corner.
const WAVE_PHASES: [f32; 4] = [0.0, FRAC_PI_2, PI, PI + FRAC_PI_2];

/// Hue offsets (in turns) for a harmonic scheme.
///
/// Intensity escalates the scheme: complementary, triadic, tetradic.
fn harmonic_offsets(intensity: u32) -> &'static [f32] {
    match intensity {
        0 | 1 => &[0.5],
        2 => &[1.0 / 3.0, 2.0 / 3.0],
        _ => &[0.25, 0.5, 0.75],
    }
}

/// Rotates a color's hue by `offset` turns, keeping S and L.
fn rotate_hue(color: Rgba, offset: f32) -> Rgba {
    let [h, s, l] = hsl::rgb_to_hsl(color.rgb_array());
    Rgba::from_rgb_array(hsl::hsl_to_rgb([fract(h + offset), s, l]))
}

/// Applies the rainbow effect from `src` into `dst`.
///
/// `colors` supplies both the 4 base colors and the corner positions
/// used for the spatial weighting.
///
/// # Errors
///
/// Returns [`meshgrad_core::Error::DimensionMismatch`] when the frames
/// disagree on size.
pub fn apply(src: &Frame, dst: &mut Frame, intensity: u32, colors: &ColorField) -> Result<()> {
    src.check_same_size(dst)?;

    let offsets = harmonic_offsets(intensity);
    let base = colors.colors();
    let variants: [Rgba; 4] =
        std::array::from_fn(|i| rotate_hue(base[i], offsets[i % offsets.len()]));
    let frequency = 2.0 + intensity as f32;

    let width = dst.width();
    let height = dst.height();
    for y in 0..height {
        let ny = 1.0 - 2.0 * (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let nx = 2.0 * (x as f32 + 0.5) / width as f32 - 1.0;
            let p = Vec2::new(nx, ny);

            let weights = colors.weights(p);
            let mut tint = Rgba::rgb(0.0, 0.0, 0.0);
            for i in 0..4 {
                let wave = frequency * p.dot(WAVE_DIRS[i]) + WAVE_PHASES[i];
                let factor = 0.5 + 0.5 * wave.sin();
                let tinted = base[i].lerp_rgb(variants[i], factor);
                tint.r += weights[i] * tinted.r;
                tint.g += weights[i] * tinted.g;
                tint.b += weights[i] * tinted.b;
            }

            let source = src.pixel(x, y);
            let mixed = source.lerp_rgb(tint, MIX).clamp01();
            dst.set_pixel(x, y, mixed.with_alpha(source.a));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ColorField {
        ColorField::new(
            [
                Rgba::from_hex("#ff0000").unwrap(),
                Rgba::from_hex("#00cc44").unwrap(),
                Rgba::from_hex("#2244ff").unwrap(),
                Rgba::from_hex("#ffaa00").unwrap(),
            ],
            1.0,
        )
    }

    #[test]
    fn test_complementary_rotation() {
        // Half-turn rotation of pure red is cyan.
        let rotated = rotate_hue(Rgba::from_hex("#ff0000").unwrap(), 0.5);
        assert!(rotated.dist2_rgb(Rgba::rgb(0.0, 1.0, 1.0)) < 1e-4);
    }

    #[test]
    fn test_rotation_preserves_gray() {
        // Grays have no hue; rotation must leave them alone.
        let gray = Rgba::rgb(0.5, 0.5, 0.5);
        assert!(rotate_hue(gray, 0.25).dist2_rgb(gray) < 1e-6);
    }

    #[test]
    fn test_scheme_escalation() {
        assert_eq!(harmonic_offsets(1).len(), 1);
        assert_eq!(harmonic_offsets(2).len(), 2);
        assert_eq!(harmonic_offsets(3).len(), 3);
        assert_eq!(harmonic_offsets(7).len(), 3);
    }

    #[test]
    fn test_output_in_range_and_alpha_kept() {
        let colors = field();
        let src = Frame::filled(16, 16, Rgba::new(0.3, 0.6, 0.9, 0.7)).unwrap();
        let mut dst = Frame::new(16, 16).unwrap();
        apply(&src, &mut dst, 2, &colors).unwrap();

        for (_, _, px) in dst.pixels() {
            assert!(px.r >= 0.0 && px.r <= 1.0);
            assert!(px.g >= 0.0 && px.g <= 1.0);
            assert!(px.b >= 0.0 && px.b <= 1.0);
            assert_eq!(px.a, 0.7);
        }
    }

    #[test]
    fn test_mix_keeps_some_source() {
        // With a flat white source, the 0.8 mix still leaves a 0.2
        // white contribution in every channel.
        let colors = field();
        let src = Frame::filled(8, 8, Rgba::WHITE).unwrap();
        let mut dst = Frame::new(8, 8).unwrap();
        apply(&src, &mut dst, 1, &colors).unwrap();

        for (_, _, px) in dst.pixels() {
            assert!(px.r >= 0.2 - 1e-5);
            assert!(px.g >= 0.2 - 1e-5);
            assert!(px.b >= 0.2 - 1e-5);
        }
    }

    #[test]
    fn test_spatial_variation() {
        // The tint varies across the frame even over a flat source.
        let colors = field();
        let src = Frame::filled(32, 32, Rgba::rgb(0.5, 0.5, 0.5)).unwrap();
        let mut dst = Frame::new(32, 32).unwrap();
        apply(&src, &mut dst, 1, &colors).unwrap();

        let a = dst.pixel(2, 2);
        let b = dst.pixel(29, 29);
        let c = dst.pixel(16, 5);
        assert!(a.dist2_rgb(b) > 1e-4 || a.dist2_rgb(c) > 1e-4);
    }

    #[test]
    fn test_tetradic_intensity_runs() {
        let colors = field();
        let src = Frame::filled(4, 4, Rgba::BLACK).unwrap();
        let mut dst = Frame::new(4, 4).unwrap();
        assert!(apply(&src, &mut dst, 3, &colors).is_ok());
        assert!(dst.pixel(0, 0).is_finite());
    }
}
