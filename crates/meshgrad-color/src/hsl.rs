//! HSL color space conversions.
//!
//! Hue, saturation, and lightness all normalized to [0, 1]. Grays keep
//! hue 0 and saturation 0.

/// Converts RGB to HSL.
pub fn rgb_to_hsl(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    if delta <= 0.0 {
        return [0.0, 0.0, l];
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let delta_r = (((max - r) / 6.0) + (delta / 2.0)) / delta;
    let delta_g = (((max - g) / 6.0) + (delta / 2.0)) / delta;
    let delta_b = (((max - b) / 6.0) + (delta / 2.0)) / delta;

    let mut h = if r == max {
        delta_b - delta_g
    } else if g == max {
        (1.0 / 3.0) + delta_r - delta_b
    } else {
        (2.0 / 3.0) + delta_g - delta_r
    };

    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    [h, s, l]
}

/// One channel of the HSL-to-RGB reconstruction.
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL back to RGB.
pub fn hsl_to_rgb(hsl: [f32; 3]) -> [f32; 3] {
    let [h, s, l] = hsl;
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}
