//! # meshgrad-math
//!
//! Math utilities for the mesh-gradient engine.
//!
//! This crate provides the numeric foundation shared by the warp solver
//! and the render passes:
//!
//! - [`Vec2`] - 2D point/vector in normalized device coordinates
//! - [`interp`] - scalar interpolation helpers (`lerp`, `saturate`, ...)
//! - [`solve`] - dense Gaussian elimination with partial pivoting
//!
//! # Example
//!
//! ```rust
//! use meshgrad_math::{Vec2, lerp};
//!
//! let a = Vec2::new(-1.0, -1.0);
//! let b = Vec2::new(1.0, 1.0);
//! let mid = a.lerp(b, 0.5);
//! assert_eq!(mid, Vec2::ZERO);
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! ```

#![warn(missing_docs)]

pub mod interp;
pub mod solve;
mod vec2;

pub use interp::{clamp, fract, inverse_lerp, lerp, mix, saturate};
pub use solve::linsolve;
pub use vec2::Vec2;
