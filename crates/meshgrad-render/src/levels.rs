//! Levels adjustment pass.
//!
//! Remaps the input range `[low, high]` to `[0, 1]` with clamping,
//! then applies the midtone exponent `1 / mid` per channel. Alpha is
//! passed through. `{low: 0, mid: 1, high: 1}` is the identity and
//! doubles as the plain-copy path of the effect stage.

use meshgrad_core::{Frame, Levels, Result, Rgba};
use meshgrad_math::saturate;

/// Applies one channel of the levels curve.
#[inline]
fn level(value: f32, low: f32, high: f32, gamma: f32) -> f32 {
    let remapped = saturate((value - low) / (high - low));
    if gamma == 1.0 {
        remapped
    } else {
        remapped.powf(gamma)
    }
}

/// Applies the levels adjustment from `src` into `dst`.
///
/// # Errors
///
/// Returns [`meshgrad_core::Error::DimensionMismatch`] when the frames
/// disagree on size.
pub fn apply(src: &Frame, dst: &mut Frame, levels: Levels) -> Result<()> {
    src.check_same_size(dst)?;

    let gamma = 1.0 / levels.mid;
    for (s, d) in src.data().iter().zip(dst.data_mut()) {
        *d = Rgba::new(
            level(s.r, levels.low, levels.high, gamma),
            level(s.g, levels.low, levels.high, gamma),
            level(s.b, levels.low, levels.high, gamma),
            s.a,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame() -> Frame {
        let mut frame = Frame::new(8, 1).unwrap();
        for x in 0..8 {
            let v = x as f32 / 7.0;
            frame.set_pixel(x, 0, Rgba::new(v, v * 0.5, 1.0 - v, 0.8));
        }
        frame
    }

    #[test]
    fn test_identity_passthrough() {
        let src = gradient_frame();
        let mut dst = Frame::new(8, 1).unwrap();
        apply(&src, &mut dst, Levels::IDENTITY).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn test_low_high_remap() {
        let src = Frame::filled(2, 2, Rgba::rgb(0.5, 0.25, 0.75)).unwrap();
        let mut dst = Frame::new(2, 2).unwrap();
        apply(&src, &mut dst, Levels::new(0.25, 1.0, 0.75)).unwrap();

        let px = dst.pixel(0, 0);
        assert!((px.r - 0.5).abs() < 1e-6);
        assert!((px.g - 0.0).abs() < 1e-6); // clamped below low
        assert!((px.b - 1.0).abs() < 1e-6); // clamped above high
    }

    #[test]
    fn test_mid_gamma() {
        let src = Frame::filled(1, 1, Rgba::rgb(0.25, 0.25, 0.25)).unwrap();
        let mut dst = Frame::new(1, 1).unwrap();
        // mid = 2 -> gamma 0.5 -> sqrt
        apply(&src, &mut dst, Levels::new(0.0, 2.0, 1.0)).unwrap();
        assert!((dst.pixel(0, 0).r - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_alpha_preserved() {
        let src = Frame::filled(1, 1, Rgba::new(0.5, 0.5, 0.5, 0.3)).unwrap();
        let mut dst = Frame::new(1, 1).unwrap();
        apply(&src, &mut dst, Levels::new(0.1, 1.5, 0.9)).unwrap();
        assert_eq!(dst.pixel(0, 0).a, 0.3);
    }

    #[test]
    fn test_dimension_mismatch() {
        let src = Frame::new(2, 2).unwrap();
        let mut dst = Frame::new(3, 2).unwrap();
        assert!(apply(&src, &mut dst, Levels::IDENTITY).is_err());
    }
}
