//! Four-corner gradient evaluation.
//!
//! Exactly four draggable color anchors exist at all times, one per
//! corner identity. A query point is colored by inverse-square-distance
//! weights over the anchors, blended pairwise: top edge, bottom edge,
//! then top against bottom. The pairwise order is deliberate and load
//! bearing for visual fidelity; it is not a symmetric 4-way sum.

use crate::blend;
use meshgrad_core::{ColorSpace, Rgba};
use meshgrad_math::Vec2;

/// Epsilon added to squared distances before inversion.
///
/// Keeps the weight finite when the query point coincides with an
/// anchor; the anchor's weight then dominates and the blend converges
/// to its color.
pub const WEIGHT_EPSILON: f32 = 1e-4;

/// Corner identity of a color anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left anchor.
    TopLeft,
    /// Top-right anchor.
    TopRight,
    /// Bottom-left anchor.
    BottomLeft,
    /// Bottom-right anchor.
    BottomRight,
}

impl Corner {
    /// All corners in evaluation order (TL, TR, BL, BR).
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// A color anchor: mutable position plus its assigned color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPoint {
    /// Position in normalized device coordinates.
    pub pos: Vec2,
    /// Anchor color.
    pub color: Rgba,
}

/// The 4-corner color field.
///
/// Anchors are independent of the warp-point capacity; they are never
/// added or deleted, only recolored and repositioned.
///
/// # Example
///
/// ```rust
/// use meshgrad_color::{ColorField, Corner};
/// use meshgrad_core::{ColorSpace, Rgba};
/// use meshgrad_math::Vec2;
///
/// let field = ColorField::new(
///     [Rgba::WHITE, Rgba::BLACK, Rgba::BLACK, Rgba::WHITE],
///     1.0,
/// );
/// // At an anchor, the blend converges to that anchor's color.
/// let at_tl = field.eval(field.position(Corner::TopLeft), ColorSpace::Rgb);
/// assert!(at_tl.dist2_rgb(Rgba::WHITE) < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    corners: [CornerPoint; 4],
}

/// Default anchor bounds for a given aspect ratio.
///
/// Wide canvases pull the vertical bound in, tall ones the horizontal,
/// so anchors stay near the visible corners.
fn corner_bounds(aspect_ratio: f32) -> (f32, f32) {
    let xb = (0.9 * aspect_ratio).min(0.9);
    let yb = (0.9 / aspect_ratio).min(0.9);
    (xb, yb)
}

impl ColorField {
    /// Creates a field with the default corner layout for an aspect
    /// ratio. Color order: TL, TR, BL, BR.
    pub fn new(colors: [Rgba; 4], aspect_ratio: f32) -> Self {
        let (xb, yb) = corner_bounds(aspect_ratio);
        let positions = [
            Vec2::new(-xb, yb),
            Vec2::new(xb, yb),
            Vec2::new(-xb, -yb),
            Vec2::new(xb, -yb),
        ];
        let corners = std::array::from_fn(|i| CornerPoint {
            pos: positions[i],
            color: colors[i],
        });
        Self { corners }
    }

    /// Creates a field with explicit anchor positions (TL, TR, BL, BR).
    pub fn with_positions(colors: [Rgba; 4], positions: [Vec2; 4]) -> Self {
        let corners = std::array::from_fn(|i| CornerPoint {
            pos: positions[i],
            color: colors[i],
        });
        Self { corners }
    }

    /// The anchor for a corner.
    #[inline]
    pub fn corner(&self, corner: Corner) -> CornerPoint {
        self.corners[corner.index()]
    }

    /// The position of a corner's anchor.
    #[inline]
    pub fn position(&self, corner: Corner) -> Vec2 {
        self.corners[corner.index()].pos
    }

    /// The color of a corner's anchor.
    #[inline]
    pub fn color(&self, corner: Corner) -> Rgba {
        self.corners[corner.index()].color
    }

    /// All four colors in evaluation order.
    pub fn colors(&self) -> [Rgba; 4] {
        self.corners.map(|c| c.color)
    }

    /// All four positions in evaluation order.
    pub fn positions(&self) -> [Vec2; 4] {
        self.corners.map(|c| c.pos)
    }

    /// Recolors a corner's anchor.
    pub fn set_color(&mut self, corner: Corner, color: Rgba) {
        self.corners[corner.index()].color = color;
    }

    /// Moves a corner's anchor.
    pub fn set_position(&mut self, corner: Corner, pos: Vec2) {
        self.corners[corner.index()].pos = pos;
    }

    /// Resets anchor positions to the default layout for an aspect
    /// ratio, keeping colors.
    pub fn reset_positions(&mut self, aspect_ratio: f32) {
        let (xb, yb) = corner_bounds(aspect_ratio);
        self.corners[0].pos = Vec2::new(-xb, yb);
        self.corners[1].pos = Vec2::new(xb, yb);
        self.corners[2].pos = Vec2::new(-xb, -yb);
        self.corners[3].pos = Vec2::new(xb, -yb);
    }

    /// Normalized inverse-square-distance weights of the four anchors
    /// at `p` (sum to 1).
    pub fn weights(&self, p: Vec2) -> [f32; 4] {
        let mut w = [0.0f32; 4];
        for (i, corner) in self.corners.iter().enumerate() {
            let d2 = (p - corner.pos).length_squared();
            w[i] = 1.0 / (d2 + WEIGHT_EPSILON);
        }
        let sum: f32 = w.iter().sum();
        for v in &mut w {
            *v /= sum;
        }
        w
    }

    /// Evaluates the blended color at `p`.
    ///
    /// Pairwise order: TL-TR with `t = w_tr / (w_tl + w_tr)`, BL-BR
    /// with `t = w_br / (w_bl + w_br)`, then top against bottom with
    /// `t = w_bl + w_br`.
    pub fn eval(&self, p: Vec2, space: ColorSpace) -> Rgba {
        let [w_tl, w_tr, w_bl, w_br] = self.weights(p);
        let [tl, tr, bl, br] = self.colors();

        let top = blend(tl, tr, w_tr / (w_tl + w_tr), space);
        let bottom = blend(bl, br, w_br / (w_bl + w_br), space);
        blend(top, bottom, w_bl + w_br, space)
    }
}
