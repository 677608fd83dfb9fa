//! Render configuration surface.
//!
//! These types mirror the UI controls: a color-space selector, a
//! levels triple, and a closed set of effect variants with their
//! parameters. The core reads them, never mutates them, during a draw.
//!
//! All types are serde-derived so presets round-trip as JSON.

use serde::{Deserialize, Serialize};

/// Color space used for every pairwise gradient interpolation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Direct linear mix of RGB components.
    #[default]
    Rgb,
    /// Mix in OKLAB; perceptually even lightness across the blend.
    Oklab,
    /// Mix in HSL with shorter-arc hue interpolation.
    Hsl,
    /// Mix in OKLAB-derived polar form (lightness/chroma/hue).
    Lch,
}

/// Levels adjustment parameters.
///
/// The pass remaps `[low, high]` to `[0, 1]` with clamping, then
/// applies the midtone exponent `1 / mid` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    /// Input black point.
    pub low: f32,
    /// Midtone gamma control; 1.0 is a no-op exponent.
    pub mid: f32,
    /// Input white point.
    pub high: f32,
}

impl Levels {
    /// Identity parameters: the pass becomes a plain copy.
    pub const IDENTITY: Self = Self {
        low: 0.0,
        mid: 1.0,
        high: 1.0,
    };

    /// Creates a levels triple.
    pub const fn new(low: f32, mid: f32, high: f32) -> Self {
        Self { low, mid, high }
    }

    /// Returns true if these parameters leave [0, 1] colors unchanged.
    pub fn is_identity(&self) -> bool {
        self.low == 0.0 && self.mid == 1.0 && self.high == 1.0
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Dithering sub-algorithm.
///
/// Floyd and Atkinson are real-time approximations driven by a
/// position hash, not true sequential error diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DitherAlgorithm {
    /// 4x4 Bayer threshold matrix.
    #[default]
    Ordered,
    /// Floyd-Steinberg approximation (noise amplitude 0.15).
    Floyd,
    /// Atkinson approximation (noise amplitude 0.125).
    Atkinson,
}

/// The effect applied in the final render pass.
///
/// A closed tagged variant: the compositor dispatches on it exactly
/// once per draw.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EffectKind {
    /// Identity copy of the levels output.
    #[default]
    None,
    /// Snap sampling to a square grid of device pixels.
    Pixelate {
        /// Grid cell edge in device pixels.
        pixel_size: u32,
    },
    /// Quantize to the 4 corner colors after threshold perturbation.
    Dither {
        /// Dither cell edge in device pixels.
        dither_size: u32,
        /// Threshold generator.
        algorithm: DitherAlgorithm,
    },
    /// Harmonic hue-rotated tint blended over the image.
    Rainbow {
        /// Scheme escalation: 1 complementary, 2 triadic, 3+ tetradic.
        intensity: u32,
    },
}

impl EffectKind {
    /// Default pixelate parameters (8 px grid).
    pub const fn pixelate() -> Self {
        Self::Pixelate { pixel_size: 8 }
    }

    /// Default dither parameters (4 px cells, ordered).
    pub const fn dither() -> Self {
        Self::Dither {
            dither_size: 4,
            algorithm: DitherAlgorithm::Ordered,
        }
    }

    /// Default rainbow parameters (intensity 1).
    pub const fn rainbow() -> Self {
        Self::Rainbow { intensity: 1 }
    }
}

/// Full render configuration consumed by a draw.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Gradient interpolation space.
    #[serde(default)]
    pub color_space: ColorSpace,
    /// Levels adjustment for the second pass.
    #[serde(default)]
    pub levels: Levels,
    /// Effect for the final pass.
    #[serde(default)]
    pub effect: EffectKind,
}
