//! # meshgrad-core
//!
//! Core types for the mesh-gradient engine.
//!
//! This crate provides the shared vocabulary of the workspace:
//!
//! - [`Error`] / [`Result`] - unified error handling
//! - [`Rgba`] - normalized float color with `#rrggbb` boundary parsing
//! - [`Frame`] - owned RGBA framebuffer for the render passes
//! - [`RenderConfig`] - color-space, levels, and effect selection
//!
//! # Example
//!
//! ```rust
//! use meshgrad_core::{Frame, Rgba, RenderConfig};
//!
//! let bg = Rgba::from_hex("#8080ff").unwrap();
//! let mut frame = Frame::new(64, 64).unwrap();
//! frame.fill(bg);
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.levels.mid, 1.0);
//! ```

#![warn(missing_docs)]

mod color;
mod config;
mod error;
mod frame;

pub use color::Rgba;
pub use config::{ColorSpace, DitherAlgorithm, EffectKind, Levels, RenderConfig};
pub use error::{Error, Result};
pub use frame::Frame;
