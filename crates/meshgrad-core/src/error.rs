//! Error types for mesh-gradient operations.
//!
//! One enum covers the failure modes of the whole engine:
//!
//! - Point-set mutation (capacity, index bounds, init from parts)
//! - Color parsing at the `#rrggbb` boundary
//! - Frame allocation and pass dimension agreement
//!
//! Mutation errors are recoverable at the call site that triggered
//! them: the shared point arrays are left untouched. Frame/pass errors
//! abort the current draw and propagate to its caller.
//!
//! # Usage
//!
//! ```rust
//! use meshgrad_core::{Error, Result};
//!
//! fn check_index(index: usize, len: usize) -> Result<()> {
//!     if index >= len {
//!         return Err(Error::index_out_of_range(index, len));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the mesh-gradient engine.
///
/// Uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// The point arena is full.
    ///
    /// Returned by `add`/`add_pair` once all 32 slots hold a
    /// correspondence. The mutation is rejected; existing points are
    /// untouched.
    #[error("point capacity exceeded: {len} of {capacity} slots in use")]
    CapacityExceeded {
        /// Current number of live points.
        len: usize,
        /// Fixed arena capacity.
        capacity: usize,
    },

    /// A point index is outside the live range.
    ///
    /// Returned by `delete`/`set_point` when `index >= len`.
    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of live points.
        len: usize,
    },

    /// A `(source[], destination[], npoints)` triple is inconsistent.
    ///
    /// Returned when initializing from persisted state with a count
    /// that exceeds the capacity or the provided slices.
    #[error("invalid point count {count} (capacity {capacity}, sources {sources}, destinations {destinations})")]
    InvalidPointCount {
        /// Requested live count.
        count: usize,
        /// Fixed arena capacity.
        capacity: usize,
        /// Provided source slice length.
        sources: usize,
        /// Provided destination slice length.
        destinations: usize,
    },

    /// A color string is not of the `#rrggbb` form.
    #[error("invalid color string {value:?}: expected \"#rrggbb\"")]
    InvalidColor {
        /// The offending string.
        value: String,
    },

    /// Frame dimensions are unusable.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Reason why dimensions are invalid.
        reason: String,
    },

    /// Two frames in a pass disagree on size.
    ///
    /// All passes require source and target frames of equal size.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First frame width.
        a_width: u32,
        /// First frame height.
        a_height: u32,
        /// Second frame width.
        b_width: u32,
        /// Second frame height.
        b_height: u32,
    },
}

impl Error {
    /// Creates an [`Error::CapacityExceeded`] error.
    #[inline]
    pub fn capacity_exceeded(len: usize, capacity: usize) -> Self {
        Self::CapacityExceeded { len, capacity }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::InvalidPointCount`] error.
    #[inline]
    pub fn invalid_point_count(
        count: usize,
        capacity: usize,
        sources: usize,
        destinations: usize,
    ) -> Self {
        Self::InvalidPointCount {
            count,
            capacity,
            sources,
            destinations,
        }
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Returns `true` if this is a point-set mutation error.
    #[inline]
    pub fn is_mutation_error(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidPointCount { .. }
        )
    }

    /// Returns `true` if this is a frame/pass error.
    #[inline]
    pub fn is_frame_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::DimensionMismatch { .. }
        )
    }
}
