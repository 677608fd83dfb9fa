//! OKLAB color space conversions.
//!
//! Closed-form matrices with the cube-root/cube nonlinearity per the
//! standard OKLAB definition. The polar form (lightness, chroma, hue)
//! drives the LCh interpolation mode; hue is wrapped to `[0, 2*pi)`.
//!
//! Input RGB is treated as the working space directly (no transfer
//! function), matching the rendering pipeline these conversions serve.

use std::f32::consts::TAU;

/// Converts RGB to OKLAB.
pub fn rgb_to_oklab(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;

    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    ]
}

/// Converts OKLAB back to RGB.
///
/// Saturated inputs can land slightly outside [0, 1]; callers clamp at
/// display time.
pub fn oklab_to_rgb(lab: [f32; 3]) -> [f32; 3] {
    let [l, a, b] = lab;

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    [
        4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3,
        -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3,
        -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3,
    ]
}

/// Converts RGB to the OKLAB polar form (lightness, chroma, hue).
///
/// Hue is in radians, wrapped to `[0, 2*pi)`.
pub fn rgb_to_lch(rgb: [f32; 3]) -> [f32; 3] {
    let [l, a, b] = rgb_to_oklab(rgb);
    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a);
    if h < 0.0 {
        h += TAU;
    }
    [l, c, h]
}

/// Converts the OKLAB polar form back to RGB.
pub fn lch_to_rgb(lch: [f32; 3]) -> [f32; 3] {
    let [l, c, h] = lch;
    oklab_to_rgb([l, c * h.cos(), c * h.sin()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_close(a: [f32; 3], b: [f32; 3], tol: f32) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = tol);
        }
    }

    #[test]
    fn test_white_is_achromatic() {
        let lab = rgb_to_oklab([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(lab[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_black_is_zero() {
        let lab = rgb_to_oklab([0.0, 0.0, 0.0]);
        assert_rgb_close(lab, [0.0, 0.0, 0.0], 1e-6);
    }

    #[test]
    fn test_oklab_roundtrip() {
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.25, 0.5, 0.75],
            [0.9, 0.9, 0.1],
        ] {
            let back = oklab_to_rgb(rgb_to_oklab(rgb));
            assert_rgb_close(back, rgb, 1e-4);
        }
    }

    #[test]
    fn test_lch_roundtrip() {
        for rgb in [[1.0, 0.0, 0.0], [0.3, 0.6, 0.2], [0.5, 0.5, 0.5]] {
            let back = lch_to_rgb(rgb_to_lch(rgb));
            assert_rgb_close(back, rgb, 1e-4);
        }
    }

    #[test]
    fn test_lch_hue_range() {
        for rgb in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]] {
            let [_, c, h] = rgb_to_lch(rgb);
            assert!(c > 0.0);
            assert!((0.0..std::f32::consts::TAU).contains(&h), "h = {}", h);
        }
    }
}
