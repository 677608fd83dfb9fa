//! Normalized float RGBA color.
//!
//! Colors cross the engine boundary as 6-hex-digit RGB strings
//! (`#rrggbb`) and are converted to normalized float RGBA (alpha 1)
//! at pipeline entry. Inside the pipeline everything is f32.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A color with normalized float components.
///
/// Components are nominally in [0, 1] but intermediate pipeline values
/// may overshoot (OKLAB round-trips of saturated colors, levels before
/// clamping); [`clamp01`](Self::clamp01) restores the displayable range.
///
/// # Example
///
/// ```rust
/// use meshgrad_core::Rgba;
///
/// let red = Rgba::from_hex("#ff0000").unwrap();
/// assert_eq!(red.r, 1.0);
/// assert_eq!(red.a, 1.0);
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses a `#rrggbb` string into an opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] unless the input is exactly a
    /// `#` followed by six hex digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meshgrad_core::Rgba;
    ///
    /// let c = Rgba::from_hex("#8080ff").unwrap();
    /// assert!((c.b - 1.0).abs() < 1e-6);
    /// assert!(Rgba::from_hex("8080ff").is_err());
    /// assert!(Rgba::from_hex("#80ff").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_color(hex))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(hex));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| Error::invalid_color(hex))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as a `#rrggbb` string.
    ///
    /// Components are clamped to [0, 1] first; alpha is dropped.
    pub fn to_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    /// Returns the RGB components as an array, dropping alpha.
    #[inline]
    pub const fn rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates an opaque color from an RGB array.
    #[inline]
    pub const fn from_rgb_array(rgb: [f32; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Squared RGB distance to another color; alpha is ignored.
    ///
    /// This is the palette-matching metric of the dither pass.
    #[inline]
    pub fn dist2_rgb(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Linear RGB interpolation; the result is opaque.
    ///
    /// Blend results are always emitted with alpha 1, matching the
    /// gradient evaluation.
    #[inline]
    pub fn lerp_rgb(self, other: Self, t: f32) -> Self {
        Self::rgb(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Clamps RGB components to [0, 1]; alpha unchanged.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a,
        )
    }

    /// Returns a copy with the given alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

// Serialized as the boundary representation: a `#rrggbb` string.
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
