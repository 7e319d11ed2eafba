//! Color helpers shared by the mode renderers.
//!
//! Hues are given in degrees and wrapped into [0, 360); values and
//! scale factors are clamped to the unit interval, so every helper is
//! total over arbitrary float inputs (NaN maps to 0).

use libm::floorf;
use smart_leds::hsv::{hsv2rgb, Hsv};
use smart_leds::RGB8;

/// Clamp to the unit interval. NaN maps to 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else if x >= 0.0 {
        x
    } else {
        0.0
    }
}

/// Fully saturated hue (degrees, any value) at `value` brightness in [0, 1].
pub fn hue_deg_to_rgb(hue_deg: f32, value: f32) -> RGB8 {
    let wrapped = hue_deg - 360.0 * floorf(hue_deg / 360.0);
    // NaN/infinite hue degrades to 0 via the saturating cast.
    let hue = (wrapped * (256.0 / 360.0)) as u8;
    let val = (clamp01(value) * 255.0) as u8;
    hsv2rgb(Hsv { hue, sat: 255, val })
}

/// Scale each channel of `c` by `k` clamped to [0, 1].
pub fn scale(c: RGB8, k: f32) -> RGB8 {
    let k = clamp01(k);
    RGB8::new(
        (c.r as f32 * k) as u8,
        (c.g as f32 * k) as u8,
        (c.b as f32 * k) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(0.4), 0.4);
        assert_eq!(clamp01(7.5), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(f32::INFINITY), 1.0);
    }

    #[test]
    fn hue_zero_is_red() {
        let c = hue_deg_to_rgb(0.0, 1.0);
        assert!(c.r > c.g && c.r > c.b, "expected red-dominant, got {:?}", c);
    }

    #[test]
    fn hue_240_is_blue() {
        let c = hue_deg_to_rgb(240.0, 1.0);
        assert!(c.b > c.r && c.b > c.g, "expected blue-dominant, got {:?}", c);
    }

    #[test]
    fn hue_wraps_and_accepts_negatives() {
        assert_eq!(hue_deg_to_rgb(-120.0, 1.0), hue_deg_to_rgb(240.0, 1.0));
        assert_eq!(hue_deg_to_rgb(480.0, 1.0), hue_deg_to_rgb(120.0, 1.0));
    }

    #[test]
    fn zero_value_is_black() {
        let c = hue_deg_to_rgb(90.0, 0.0);
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
    }

    #[test]
    fn wild_inputs_do_not_panic() {
        for hue in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1e20, -1e20] {
            for val in [f32::NAN, f32::INFINITY, -5.0, 5.0] {
                let _ = hue_deg_to_rgb(hue, val);
            }
        }
    }

    #[test]
    fn scale_clamps_factor() {
        let c = RGB8::new(100, 200, 50);
        assert_eq!(scale(c, 2.0), c);
        assert_eq!(scale(c, -1.0), RGB8::new(0, 0, 0));
        let half = scale(c, 0.5);
        assert_eq!((half.r, half.g, half.b), (50, 100, 25));
    }
}
