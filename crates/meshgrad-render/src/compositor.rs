//! Pass orchestration over two off-screen frames.
//!
//! The pass sequence is fixed: base gradient into buffer A, levels
//! A -> B, effect B -> visible frame, markers on top. Buffers are
//! exclusively owned and reallocated together when the output size
//! changes; a draw never runs against mismatched buffers.

use crate::{BACKGROUND, dither, levels, markers, pixelate, rainbow};
use meshgrad_color::ColorField;
use meshgrad_core::{EffectKind, Frame, Levels, RenderConfig, Result};
use meshgrad_math::Vec2;
use meshgrad_warp::{CorrespondenceSet, Orientation};
use tracing::{debug, trace};

/// Orchestrates the fixed render-pass sequence.
///
/// # Example
///
/// ```rust
/// use meshgrad_color::ColorField;
/// use meshgrad_core::{EffectKind, Frame, RenderConfig, Rgba};
/// use meshgrad_render::Compositor;
/// use meshgrad_warp::{CorrespondenceSet, Orientation};
///
/// let mut set = CorrespondenceSet::new();
/// for (x, y) in [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)] {
///     set.add_pair(Orientation::Forward, x, y).unwrap();
/// }
/// let colors = ColorField::new(
///     [Rgba::WHITE, Rgba::BLACK, Rgba::BLACK, Rgba::WHITE],
///     1.0,
/// );
/// let config = RenderConfig {
///     effect: EffectKind::pixelate(),
///     ..RenderConfig::default()
/// };
///
/// let mut compositor = Compositor::new(128, 128).unwrap();
/// let mut out = Frame::new(128, 128).unwrap();
/// compositor
///     .draw(&set, Orientation::Forward, &colors, &config, &mut out)
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct Compositor {
    frame_a: Frame,
    frame_b: Frame,
    show_markers: bool,
}

impl Compositor {
    /// Creates a compositor with buffers of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::InvalidDimensions`] for a
    /// zero-area size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            frame_a: Frame::new(width, height)?,
            frame_b: Frame::new(width, height)?,
            show_markers: true,
        })
    }

    /// Current buffer width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.frame_a.width()
    }

    /// Current buffer height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.frame_a.height()
    }

    /// Width / height of the buffers.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.frame_a.aspect_ratio()
    }

    /// Whether the marker pass runs.
    #[inline]
    pub fn show_markers(&self) -> bool {
        self.show_markers
    }

    /// Toggles the marker pass (export renders disable it).
    pub fn set_show_markers(&mut self, show: bool) {
        self.show_markers = show;
    }

    /// Reallocates both off-screen buffers for a new output size.
    ///
    /// Both buffers are replaced atomically with respect to the next
    /// draw: on error the old buffers stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`meshgrad_core::Error::InvalidDimensions`] for a
    /// zero-area size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) == self.frame_a.dimensions() {
            return Ok(());
        }
        let frame_a = Frame::new(width, height)?;
        let frame_b = Frame::new(width, height)?;
        self.frame_a = frame_a;
        self.frame_b = frame_b;
        debug!(width, height, "compositor buffers reallocated");
        Ok(())
    }

    /// Runs the full pass sequence into `out`.
    ///
    /// The compositor resizes itself to `out`'s dimensions first, so a
    /// surface size change is absorbed before any pass runs.
    ///
    /// # Errors
    ///
    /// Propagates frame allocation/mismatch errors; the visible frame
    /// is only written by the final passes.
    pub fn draw(
        &mut self,
        set: &CorrespondenceSet,
        orientation: Orientation,
        colors: &ColorField,
        config: &RenderConfig,
        out: &mut Frame,
    ) -> Result<()> {
        let (width, height) = out.dimensions();
        self.resize(width, height)?;

        trace!(
            width,
            height,
            npoints = set.len(),
            effect = ?config.effect,
            "draw"
        );

        // Pass 1: base gradient. Below the minimum point count the
        // warp is the identity, so the colors render unwarped.
        self.frame_a.fill(BACKGROUND);
        let field = set.field(orientation);
        let arena = set.arena();
        for y in 0..height {
            let ny = 1.0 - 2.0 * (y as f32 + 0.5) / height as f32;
            for x in 0..width {
                let nx = 2.0 * (x as f32 + 0.5) / width as f32 - 1.0;
                let q = field.warp(arena, Vec2::new(nx, ny));
                let color = colors.eval(q, config.color_space).clamp01();
                self.frame_a.set_pixel(x, y, color);
            }
        }

        // Pass 2: levels.
        levels::apply(&self.frame_a, &mut self.frame_b, config.levels)?;

        // Pass 3: effect onto the visible frame. "None" routes through
        // the levels pass with identity parameters.
        match config.effect {
            EffectKind::None => levels::apply(&self.frame_b, out, Levels::IDENTITY)?,
            EffectKind::Pixelate { pixel_size } => {
                pixelate::apply(&self.frame_b, out, pixel_size)?
            }
            EffectKind::Dither {
                dither_size,
                algorithm,
            } => dither::apply(&self.frame_b, out, dither_size, algorithm, &colors.colors())?,
            EffectKind::Rainbow { intensity } => {
                rainbow::apply(&self.frame_b, out, intensity, colors)?
            }
        }

        // Pass 4: markers, unbuffered, always last.
        if self.show_markers && !set.is_empty() {
            markers::draw(out, set.source_points(orientation), colors);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshgrad_core::{ColorSpace, DitherAlgorithm, Rgba};

    fn corner_colors() -> [Rgba; 4] {
        [
            Rgba::from_hex("#ff0000").unwrap(),
            Rgba::from_hex("#00ff00").unwrap(),
            Rgba::from_hex("#0000ff").unwrap(),
            Rgba::from_hex("#ffff00").unwrap(),
        ]
    }

    fn square_set() -> CorrespondenceSet {
        let mut set = CorrespondenceSet::new();
        for (x, y) in [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)] {
            set.add(x, y, x, y, false).unwrap();
        }
        set
    }

    #[test]
    fn test_draw_fills_output() {
        let set = square_set();
        let colors = ColorField::new(corner_colors(), 1.0);
        let mut compositor = Compositor::new(32, 32).unwrap();
        compositor.set_show_markers(false);
        let mut out = Frame::new(32, 32).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
            .unwrap();

        // Every pixel was written by the gradient (opaque, finite).
        for (_, _, px) in out.pixels() {
            assert!(px.is_finite());
            assert_eq!(px.a, 1.0);
        }
        // Top-left leans to the TL corner color.
        let tl = out.pixel(1, 1);
        assert!(tl.dist2_rgb(corner_colors()[0]) < tl.dist2_rgb(corner_colors()[3]));
    }

    #[test]
    fn test_empty_set_renders_unwarped_colors() {
        // Below the minimum the gradient still shows, unwarped.
        let set = CorrespondenceSet::new();
        let colors = ColorField::new(corner_colors(), 1.0);
        let mut compositor = Compositor::new(16, 16).unwrap();
        let mut out = Frame::new(16, 16).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
            .unwrap();

        let tl = out.pixel(0, 0);
        let br = out.pixel(15, 15);
        assert!(tl.dist2_rgb(corner_colors()[0]) < 0.05);
        assert!(br.dist2_rgb(corner_colors()[3]) < 0.05);
    }

    #[test]
    fn test_none_effect_equals_levels_only() {
        let set = square_set();
        let colors = ColorField::new(corner_colors(), 1.0);
        let config = RenderConfig::default();

        let mut compositor = Compositor::new(24, 24).unwrap();
        compositor.set_show_markers(false);
        let mut plain = Frame::new(24, 24).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &config, &mut plain)
            .unwrap();

        // Pixelate at size 1 must reproduce the identity pipeline.
        let pixelated_config = RenderConfig {
            effect: EffectKind::Pixelate { pixel_size: 1 },
            ..config
        };
        let mut pixelated = Frame::new(24, 24).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &pixelated_config, &mut pixelated)
            .unwrap();

        assert_eq!(plain, pixelated);
    }

    #[test]
    fn test_dither_draw_closure() {
        let set = square_set();
        let palette = corner_colors();
        let colors = ColorField::new(palette, 1.0);
        let config = RenderConfig {
            color_space: ColorSpace::Oklab,
            effect: EffectKind::Dither {
                dither_size: 2,
                algorithm: DitherAlgorithm::Ordered,
            },
            ..RenderConfig::default()
        };

        let mut compositor = Compositor::new(32, 32).unwrap();
        compositor.set_show_markers(false);
        let mut out = Frame::new(32, 32).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &config, &mut out)
            .unwrap();

        for (_, _, px) in out.pixels() {
            assert!(palette.iter().any(|&p| px.dist2_rgb(p) == 0.0));
        }
    }

    #[test]
    fn test_markers_drawn_when_enabled() {
        let mut set = CorrespondenceSet::new();
        set.add(0.0, 0.0, 0.0, 0.0, false).unwrap();
        // Park anchors outside the frame so only the warp marker shows.
        let colors = ColorField::with_positions(corner_colors(), [Vec2::new(5.0, 5.0); 4]);

        let mut compositor = Compositor::new(64, 64).unwrap();
        let mut out = Frame::new(64, 64).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
            .unwrap();
        assert_eq!(out.pixel(32, 32), markers::WARP_POINT_COLOR);

        compositor.set_show_markers(false);
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
            .unwrap();
        assert_ne!(out.pixel(32, 32), markers::WARP_POINT_COLOR);
    }

    #[test]
    fn test_draw_resizes_to_output() {
        let set = square_set();
        let colors = ColorField::new(corner_colors(), 1.0);
        let mut compositor = Compositor::new(8, 8).unwrap();
        let mut out = Frame::new(20, 10).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut out)
            .unwrap();
        assert_eq!(compositor.width(), 20);
        assert_eq!(compositor.height(), 10);
        assert_eq!(compositor.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_orientations_render_differently() {
        let mut set = CorrespondenceSet::new();
        for (x, y) in [(-0.5, -0.5), (-0.5, 0.5), (0.5, -0.5), (0.5, 0.5)] {
            set.add(x, y, x * 0.3, y * 0.3, false).unwrap();
        }
        let colors = ColorField::new(corner_colors(), 1.0);

        let mut compositor = Compositor::new(16, 16).unwrap();
        compositor.set_show_markers(false);
        let mut forward = Frame::new(16, 16).unwrap();
        let mut inverse = Frame::new(16, 16).unwrap();
        compositor
            .draw(&set, Orientation::Forward, &colors, &RenderConfig::default(), &mut forward)
            .unwrap();
        compositor
            .draw(&set, Orientation::Inverse, &colors, &RenderConfig::default(), &mut inverse)
            .unwrap();

        assert_ne!(forward, inverse);
    }
}
