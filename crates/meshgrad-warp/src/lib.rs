//! # meshgrad-warp
//!
//! Radial-basis-function warping from sparse point correspondences.
//!
//! A [`CorrespondenceSet`] owns up to [`MAX_POINTS`] (source,
//! destination) pairs and keeps two mirrored [`WarpField`]s solved over
//! them: the forward field treats the source array as its input space,
//! the inverse field swaps the roles. Both borrow the same
//! [`PointArena`]; neither copies the point data.
//!
//! The kernel is `sqrt(d^2 + s^2)` where `s^2` is a per-point support
//! radius derived from the nearest-neighbor distance. Weights come from
//! a dense Gaussian-elimination solve, so the field passes through all
//! correspondences exactly (up to float precision) and varies smoothly
//! elsewhere. With fewer than [`MIN_POINTS`] pairs the warp is the
//! identity.
//!
//! # Example
//!
//! ```rust
//! use meshgrad_math::Vec2;
//! use meshgrad_warp::{CorrespondenceSet, Orientation};
//!
//! let mut set = CorrespondenceSet::new();
//! for (x, y) in [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)] {
//!     set.add(x, y, x, y, false).unwrap();
//! }
//!
//! // Source == destination everywhere: the field is the identity.
//! let p = Vec2::new(0.2, -0.1);
//! let q = set.warp(Orientation::Forward, p);
//! assert!((q - p).length() < 1e-3);
//! ```

#![warn(missing_docs)]

mod arena;
mod field;
mod set;

pub use arena::PointArena;
pub use field::{Orientation, WarpField};
pub use set::CorrespondenceSet;

/// Fixed capacity of the point-pair arena.
pub const MAX_POINTS: usize = 32;

/// Minimum number of pairs for the solver to engage.
///
/// Below this the system is too unconstrained to be useful and the
/// warp is the identity.
pub const MIN_POINTS: usize = 4;
