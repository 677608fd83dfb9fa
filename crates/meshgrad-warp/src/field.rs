//! RBF warp field: support radii, kernel solve, evaluation.
//!
//! A field's weights satisfy `H * w = dst - src` for the kernel matrix
//! `H[r][c] = sqrt(|src_r - src_c|^2 + s2[c])`: the solved quantity is
//! the displacement at each control point, and evaluation adds the
//! query point back onto the kernel sum. Evaluating at a control point
//! therefore reproduces its destination exactly, and a set whose
//! sources equal their destinations solves to all-zero weights (the
//! field is the identity everywhere).
//!
//! The solved system carries no affine/polynomial drift block, so the
//! kernel sum does not vanish far from all points and the field is not
//! guaranteed to approach the identity at infinity.
//!
//! Pairwise squared distances use the Gram formulation
//! `d^2(x, y) = |x|^2 + |y|^2 - 2<x, y>` for parity between the solve
//! and evaluation paths.

use crate::{MIN_POINTS, PointArena};
use meshgrad_math::{Vec2, linsolve};
use tracing::trace;

/// Which array of the arena acts as this field's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Source array maps to destination array.
    Forward,
    /// Destination array maps to source array.
    Inverse,
}

impl Orientation {
    /// The opposite orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

/// Solved warp state for one orientation.
///
/// Owns only derived data (support radii and weight vectors); the
/// point arrays are borrowed from the [`PointArena`] on every call.
/// Stale derived state is harmless: evaluation is gated on the live
/// point count, and every mutation path recomputes before the next
/// evaluation.
#[derive(Debug, Clone)]
pub struct WarpField {
    orientation: Orientation,
    s2: [f32; crate::MAX_POINTS],
    w: [Vec2; crate::MAX_POINTS],
}

/// Squared distance via the Gram identity, clamped against f32
/// cancellation producing a small negative.
#[inline]
fn dist2(a: Vec2, b: Vec2) -> f32 {
    (a.length_squared() + b.length_squared() - 2.0 * a.dot(b)).max(0.0)
}

impl WarpField {
    /// Creates an unsolved field for the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            s2: [0.0; crate::MAX_POINTS],
            w: [Vec2::ZERO; crate::MAX_POINTS],
        }
    }

    /// This field's orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The arena array acting as this field's source.
    #[inline]
    pub fn source<'a>(&self, arena: &'a PointArena) -> &'a [Vec2] {
        match self.orientation {
            Orientation::Forward => arena.sources(),
            Orientation::Inverse => arena.destinations(),
        }
    }

    /// The arena array acting as this field's destination.
    #[inline]
    pub fn destination<'a>(&self, arena: &'a PointArena) -> &'a [Vec2] {
        match self.orientation {
            Orientation::Forward => arena.destinations(),
            Orientation::Inverse => arena.sources(),
        }
    }

    /// Per-point support radii (squared) for the live points.
    #[inline]
    pub fn support_radii(&self, arena: &PointArena) -> &[f32] {
        &self.s2[..arena.len()]
    }

    /// Solved weight vectors for the live points.
    #[inline]
    pub fn weights(&self, arena: &PointArena) -> &[Vec2] {
        &self.w[..arena.len()]
    }

    /// Recomputes support radii and weights from the current points.
    ///
    /// No-op below [`MIN_POINTS`]. A near-singular kernel (coincident
    /// or collinear points) degrades accuracy silently; the solve never
    /// produces non-finite weights thanks to the zero-pivot guard.
    pub fn update(&mut self, arena: &PointArena) {
        let n = arena.len();
        if n < MIN_POINTS {
            return;
        }

        let src = self.source(arena);
        let dst = self.destination(arena);

        // Pairwise squared distances over the source points.
        let d2: Vec<Vec<f32>> = src
            .iter()
            .map(|&a| src.iter().map(|&b| dist2(a, b)).collect())
            .collect();

        // Support radius: squared distance to the nearest neighbor.
        // The true-zero diagonal is masked with the matrix maximum
        // before taking column minima.
        let d2max = d2
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0_f32, f32::max);
        for c in 0..n {
            let mut min = f32::INFINITY;
            for (r, row) in d2.iter().enumerate() {
                let v = if r == c { d2max } else { row[c] };
                min = min.min(v);
            }
            self.s2[c] = min;
        }

        // Kernel matrix over the original distances (true diagonal).
        let mut h: Vec<Vec<f32>> = d2
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, &v)| (v + self.s2[c]).sqrt())
                    .collect()
            })
            .collect();

        // Right-hand side: per-point displacement.
        let mut w: Vec<Vec2> = dst.iter().zip(src).map(|(&d, &s)| d - s).collect();
        linsolve(&mut h, &mut w);

        self.w[..n].copy_from_slice(&w);
        for slot in self.w[n..].iter_mut() {
            *slot = Vec2::ZERO;
        }

        trace!(
            npoints = n,
            orientation = ?self.orientation,
            "warp field solved"
        );
    }

    /// Warps a single point.
    ///
    /// Identity below [`MIN_POINTS`]; otherwise
    /// `p + sum_r sqrt(d^2(p, src_r) + s2_r) * w_r`.
    pub fn warp(&self, arena: &PointArena, p: Vec2) -> Vec2 {
        let n = arena.len();
        if n < MIN_POINTS {
            return p;
        }
        let src = self.source(arena);
        let mut q = p;
        for i in 0..n {
            let h = (dist2(p, src[i]) + self.s2[i]).sqrt();
            q += self.w[i] * h;
        }
        q
    }

    /// Warps a batch of points.
    pub fn warp_all(&self, arena: &PointArena, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.warp(arena, p)).collect()
    }
}
