//! # meshgrad-color
//!
//! Color-space math and gradient evaluation.
//!
//! Conversions operate on `[f32; 3]` RGB triplets:
//!
//! - [`oklab`] - OKLAB forward/inverse and its polar (LCh) form
//! - [`hsl`] - hue/saturation/lightness
//! - [`blend`] - color-space-aware pairwise interpolation
//! - [`ColorField`] - the 4-corner inverse-square-distance gradient
//!
//! # Example
//!
//! ```rust
//! use meshgrad_color::blend;
//! use meshgrad_core::{ColorSpace, Rgba};
//!
//! let red = Rgba::from_hex("#ff0000").unwrap();
//! let green = Rgba::from_hex("#00ff00").unwrap();
//!
//! // The OKLAB midpoint avoids the muddy RGB average.
//! let rgb_mid = blend(red, green, 0.5, ColorSpace::Rgb);
//! let lab_mid = blend(red, green, 0.5, ColorSpace::Oklab);
//! assert!(rgb_mid.dist2_rgb(lab_mid) > 0.01);
//! ```

#![warn(missing_docs)]

mod blend;
mod field;
pub mod hsl;
pub mod oklab;

pub use blend::blend;
pub use field::{ColorField, Corner, CornerPoint, WEIGHT_EPSILON};
