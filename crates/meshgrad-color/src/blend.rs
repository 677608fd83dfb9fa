//! Color-space-aware pairwise interpolation.
//!
//! Every gradient blend step goes through [`blend`], dispatched once
//! on the configured [`ColorSpace`]. Hue-bearing spaces interpolate
//! hue along the shorter circular arc.

use crate::{hsl, oklab};
use meshgrad_core::{ColorSpace, Rgba};
use meshgrad_math::lerp;
use std::f32::consts::TAU;

/// Interpolates hue along the shorter arc of a circle of size `turn`.
///
/// When the raw difference exceeds half a turn, the second endpoint is
/// shifted by a full turn before mixing; the result is folded back
/// below `turn`.
fn lerp_hue(h1: f32, h2: f32, t: f32, turn: f32) -> f32 {
    let mut h2 = h2;
    if (h2 - h1).abs() > turn / 2.0 {
        h2 += if h2 < h1 { turn } else { -turn };
    }
    let mut h = lerp(h1, h2, t);
    if h >= turn {
        h -= turn;
    }
    h
}

/// Blends two colors at parameter `t` in the given color space.
///
/// The result is always opaque (gradient evaluation emits alpha 1).
///
/// # Example
///
/// ```rust
/// use meshgrad_color::blend;
/// use meshgrad_core::{ColorSpace, Rgba};
///
/// let a = Rgba::rgb(0.0, 0.0, 0.0);
/// let b = Rgba::rgb(1.0, 1.0, 1.0);
/// let mid = blend(a, b, 0.5, ColorSpace::Rgb);
/// assert!((mid.r - 0.5).abs() < 1e-6);
/// ```
pub fn blend(a: Rgba, b: Rgba, t: f32, space: ColorSpace) -> Rgba {
    match space {
        ColorSpace::Rgb => a.lerp_rgb(b, t),
        ColorSpace::Oklab => {
            let lab1 = oklab::rgb_to_oklab(a.rgb_array());
            let lab2 = oklab::rgb_to_oklab(b.rgb_array());
            let mixed = [
                lerp(lab1[0], lab2[0], t),
                lerp(lab1[1], lab2[1], t),
                lerp(lab1[2], lab2[2], t),
            ];
            Rgba::from_rgb_array(oklab::oklab_to_rgb(mixed))
        }
        ColorSpace::Hsl => {
            let hsl1 = hsl::rgb_to_hsl(a.rgb_array());
            let hsl2 = hsl::rgb_to_hsl(b.rgb_array());
            let mixed = [
                lerp_hue(hsl1[0], hsl2[0], t, 1.0),
                lerp(hsl1[1], hsl2[1], t),
                lerp(hsl1[2], hsl2[2], t),
            ];
            Rgba::from_rgb_array(hsl::hsl_to_rgb(mixed))
        }
        ColorSpace::Lch => {
            let lch1 = oklab::rgb_to_lch(a.rgb_array());
            let lch2 = oklab::rgb_to_lch(b.rgb_array());
            let mixed = [
                lerp(lch1[0], lch2[0], t),
                lerp(lch1[1], lch2[1], t),
                lerp_hue(lch1[2], lch2[2], t, TAU),
            ];
            Rgba::from_rgb_array(oklab::lch_to_rgb(mixed))
        }
    }
}
