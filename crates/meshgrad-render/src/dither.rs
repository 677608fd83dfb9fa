//! Dither pass: palette quantization with threshold perturbation.
//!
//! The image is sampled on a grid of `dither_size` device pixels, each
//! channel is perturbed by a threshold, and the result snaps to the
//! nearest of the four corner colors in squared RGB distance.
//!
//! Thresholds come from one of:
//!
//! - Ordered: a 4x4 Bayer matrix indexed by grid cell mod 4,
//!   amplitude 0.2
//! - Floyd / Atkinson: a deterministic position hash, amplitudes
//!   0.15 / 0.125 - real-time approximations of error diffusion, not
//!   the true sequential algorithms

use meshgrad_core::{DitherAlgorithm, Frame, Result, Rgba};
use meshgrad_math::fract;

/// 4x4 Bayer threshold matrix, normalized to [0, 1), indexed [y][x].
const BAYER4: [[f32; 4]; 4] = [
    [0.0 / 16.0, 8.0 / 16.0, 2.0 / 16.0, 10.0 / 16.0],
    [12.0 / 16.0, 4.0 / 16.0, 14.0 / 16.0, 6.0 / 16.0],
    [3.0 / 16.0, 11.0 / 16.0, 1.0 / 16.0, 9.0 / 16.0],
    [15.0 / 16.0, 7.0 / 16.0, 13.0 / 16.0, 5.0 / 16.0],
];

/// Deterministic pseudo-random threshold from a grid position.
///
/// The classic shader hash: `fract(sin(dot(p, k)) * 43758.5453)`.
#[inline]
fn hash_noise(cx: f32, cy: f32) -> f32 {
    fract((cx * 12.9898 + cy * 78.233).sin() * 43758.5453)
}

/// Returns the palette color nearest to `color` in squared RGB
/// distance. Ties keep the earliest palette entry.
#[inline]
pub fn closest_palette_color(color: Rgba, palette: &[Rgba; 4]) -> Rgba {
    let mut closest = palette[0];
    let mut min_dist = color.dist2_rgb(palette[0]);
    for &candidate in &palette[1..] {
        let dist = color.dist2_rgb(candidate);
        if dist < min_dist {
            min_dist = dist;
            closest = candidate;
        }
    }
    closest
}

/// Applies the dither effect from `src` into `dst`.
///
/// `palette` is the 4 corner colors. A `dither_size` of 0 is treated
/// as 1. Output alpha follows the sampled pixel.
///
/// # Errors
///
/// Returns [`meshgrad_core::Error::DimensionMismatch`] when the frames
/// disagree on size.
pub fn apply(
    src: &Frame,
    dst: &mut Frame,
    dither_size: u32,
    algorithm: DitherAlgorithm,
    palette: &[Rgba; 4],
) -> Result<()> {
    src.check_same_size(dst)?;

    let size = dither_size.max(1);
    let amplitude = match algorithm {
        DitherAlgorithm::Ordered => 0.2,
        DitherAlgorithm::Floyd => 0.15,
        DitherAlgorithm::Atkinson => 0.125,
    };

    for y in 0..dst.height() {
        let cell_y = y / size;
        for x in 0..dst.width() {
            let cell_x = x / size;

            // Sample at the cell origin: dithering coarser than a
            // device pixel also pixelates.
            let sampled = src.pixel(cell_x * size, cell_y * size);

            let threshold = match algorithm {
                DitherAlgorithm::Ordered => {
                    BAYER4[(cell_y % 4) as usize][(cell_x % 4) as usize]
                }
                DitherAlgorithm::Floyd | DitherAlgorithm::Atkinson => {
                    hash_noise(cell_x as f32, cell_y as f32)
                }
            };

            let shift = (threshold - 0.5) * amplitude;
            let perturbed = Rgba::rgb(sampled.r + shift, sampled.g + shift, sampled.b + shift)
                .clamp01();

            let quantized = closest_palette_color(perturbed, palette);
            dst.set_pixel(x, y, quantized.with_alpha(sampled.a));
        }
    }
    Ok(())
}
