//! Correspondence set: the single source of truth for point pairs.
//!
//! Owns one [`PointArena`] and exactly two [`WarpField`]s, one per
//! orientation. Every mutation recomputes both fields in full; there
//! is no incremental update (an O(n^3) re-solve at n <= 32 is cheap
//! next to a frame render).
//!
//! Mutations are transactional: a rejected add/delete/move leaves the
//! arena and both fields untouched.

use crate::{Orientation, PointArena, WarpField};
use meshgrad_core::Result;
use meshgrad_math::Vec2;
use tracing::debug;

/// A set of point correspondences with both warp orientations solved.
///
/// # Example
///
/// ```rust
/// use meshgrad_math::Vec2;
/// use meshgrad_warp::{CorrespondenceSet, Orientation};
///
/// let mut set = CorrespondenceSet::new();
/// // Click-to-add: the counterpart is synthesized through the
/// // current warp (identity while below the minimum point count).
/// for (x, y) in [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)] {
///     set.add_pair(Orientation::Forward, x, y).unwrap();
/// }
/// assert_eq!(set.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CorrespondenceSet {
    arena: PointArena,
    forward: WarpField,
    inverse: WarpField,
}

impl CorrespondenceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            arena: PointArena::new(),
            forward: WarpField::new(Orientation::Forward),
            inverse: WarpField::new(Orientation::Inverse),
        }
    }

    /// Builds a set from persisted `(source[], destination[], npoints)`
    /// parts and solves both fields.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::InvalidPointCount`] for an
    /// inconsistent triple.
    pub fn from_parts(src: &[Vec2], dst: &[Vec2], count: usize) -> Result<Self> {
        let mut set = Self {
            arena: PointArena::from_parts(src, dst, count)?,
            forward: WarpField::new(Orientation::Forward),
            inverse: WarpField::new(Orientation::Inverse),
        };
        set.update();
        Ok(set)
    }

    /// Number of live pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if no pairs are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The shared point arena.
    #[inline]
    pub fn arena(&self) -> &PointArena {
        &self.arena
    }

    /// The solved field for an orientation.
    #[inline]
    pub fn field(&self, orientation: Orientation) -> &WarpField {
        match orientation {
            Orientation::Forward => &self.forward,
            Orientation::Inverse => &self.inverse,
        }
    }

    /// The points acting as sources under an orientation.
    ///
    /// This is what a view of that orientation displays as its
    /// draggable markers.
    #[inline]
    pub fn source_points(&self, orientation: Orientation) -> &[Vec2] {
        self.field(orientation).source(&self.arena)
    }

    /// Warps a point through the field of the given orientation.
    #[inline]
    pub fn warp(&self, orientation: Orientation, p: Vec2) -> Vec2 {
        self.field(orientation).warp(&self.arena, p)
    }

    /// Appends a pair; `flip` swaps source and destination before
    /// storage (adding while viewing the inverse orientation stores in
    /// canonical orientation).
    ///
    /// Triggers a full recompute of both fields.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::CapacityExceeded`] when the
    /// arena is full; the set is unchanged.
    pub fn add(&mut self, sx: f32, sy: f32, dx: f32, dy: f32, flip: bool) -> Result<usize> {
        let (src, dst) = if flip {
            (Vec2::new(dx, dy), Vec2::new(sx, sy))
        } else {
            (Vec2::new(sx, sy), Vec2::new(dx, dy))
        };
        let index = self.arena.push(src, dst)?;
        debug!(index, npoints = self.arena.len(), flip, "added point pair");
        self.update();
        Ok(index)
    }

    /// Adds a matched pair from a single click at `(x, y)` in the space
    /// of `orientation`.
    ///
    /// The counterpart is synthesized by warping `(x, y)` through that
    /// orientation's current field, then stored canonically via
    /// [`add`](Self::add) with `flip` set for the inverse view.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::CapacityExceeded`] when full.
    pub fn add_pair(&mut self, orientation: Orientation, x: f32, y: f32) -> Result<usize> {
        let p = self.warp(orientation, Vec2::new(x, y));
        self.add(x, y, p.x, p.y, orientation == Orientation::Inverse)
    }

    /// Deletes the pair at `index`, shifting later pairs down.
    ///
    /// Triggers a full recompute of both fields.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::IndexOutOfRange`] for a bad
    /// index; the set is unchanged.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.arena.remove(index)?;
        debug!(index, npoints = self.arena.len(), "deleted point pair");
        self.update();
        Ok(())
    }

    /// Moves the point at `index` that acts as a *source* under
    /// `orientation` (drag support), then recomputes both fields.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::IndexOutOfRange`] for a bad
    /// index; the set is unchanged.
    pub fn set_point(&mut self, orientation: Orientation, index: usize, pos: Vec2) -> Result<()> {
        match orientation {
            Orientation::Forward => self.arena.set_source(index, pos)?,
            Orientation::Inverse => self.arena.set_destination(index, pos)?,
        }
        self.update();
        Ok(())
    }

    /// Recomputes both fields from the current points.
    ///
    /// Called by every mutating method; callers only need it after
    /// mutating the arena through other means.
    pub fn update(&mut self) {
        self.forward.update(&self.arena);
        self.inverse.update(&self.arena);
    }
}

impl Default for CorrespondenceSet {
    fn default() -> Self {
        Self::new()
    }
}
