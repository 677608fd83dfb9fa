//! # meshgrad-render
//!
//! Render passes and orchestration for the mesh-gradient engine.
//!
//! A [`Compositor`] owns two off-screen frames and runs a fixed pass
//! sequence per draw:
//!
//! 1. Base gradient (warped color field) into buffer A
//! 2. [`levels`] adjustment A -> B
//! 3. The configured effect ([`pixelate`], [`dither`], [`rainbow`], or
//!    an identity copy) B -> visible frame
//! 4. [`markers`] on top, unbuffered
//!
//! All passes are synchronous and single-threaded; a draw either
//! completes fully or fails before touching the visible frame.
//!
//! # Example
//!
//! ```rust
//! use meshgrad_color::ColorField;
//! use meshgrad_core::{Frame, RenderConfig, Rgba};
//! use meshgrad_render::Compositor;
//! use meshgrad_warp::{CorrespondenceSet, Orientation};
//!
//! let set = CorrespondenceSet::new();
//! let colors = ColorField::new(
//!     [Rgba::WHITE, Rgba::BLACK, Rgba::BLACK, Rgba::WHITE],
//!     1.0,
//! );
//! let mut compositor = Compositor::new(64, 64).unwrap();
//! let mut out = Frame::new(64, 64).unwrap();
//! compositor
//!     .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
//!     .unwrap();
//! ```

#![warn(missing_docs)]

mod compositor;
pub mod dither;
pub mod levels;
pub mod markers;
pub mod pixelate;
pub mod rainbow;

pub use compositor::Compositor;

/// Flat background color of the base pass.
pub const BACKGROUND: meshgrad_core::Rgba = meshgrad_core::Rgba::new(0.5, 0.5, 1.0, 1.0);
