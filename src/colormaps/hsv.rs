//! HSV to RGB conversion.
//!
//! Hue is a fraction of a full revolution, so any real hue is reduced modulo
//! 1 before conversion. Saturation 0 yields a gray of the given value.

use ndarray::{Array1, Zip};
use palette::{Clamp, FromColor, Hsv, Srgb};

use super::colormap::Rgb;

/// Convert a single HSV sample to RGB
pub fn hsv_to_rgb_pixel(h: f64, s: f64, v: f64) -> Rgb {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(h.rem_euclid(1.0) * 360.0, s, v);
    let rgb: Srgb<f64> = Srgb::from_color(hsv).clamp();
    [rgb.red, rgb.green, rgb.blue]
}

/// Convert whole hue, saturation and value trajectories to RGB in one pass
pub fn hsv_to_rgb(hue: &Array1<f64>, saturation: &Array1<f64>, value: &Array1<f64>) -> Vec<Rgb> {
    Zip::from(hue)
        .and(saturation)
        .and(value)
        .map_collect(|&h, &s, &v| hsv_to_rgb_pixel(h, s, v))
        .into_raw_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_eq(actual: Rgb, expected: Rgb) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb_eq(hsv_to_rgb_pixel(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_rgb_eq(hsv_to_rgb_pixel(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_rgb_eq(hsv_to_rgb_pixel(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
        assert_rgb_eq(hsv_to_rgb_pixel(1.0 / 6.0, 1.0, 1.0), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_hue_is_circular() {
        assert_rgb_eq(hsv_to_rgb_pixel(1.0, 1.0, 1.0), hsv_to_rgb_pixel(0.0, 1.0, 1.0));
        assert_rgb_eq(
            hsv_to_rgb_pixel(-0.25, 0.7, 0.8),
            hsv_to_rgb_pixel(0.75, 0.7, 0.8),
        );
    }

    #[test]
    fn test_achromatic() {
        assert_rgb_eq(hsv_to_rgb_pixel(0.42, 0.0, 0.6), [0.6, 0.6, 0.6]);
    }

    #[test]
    fn test_output_stays_in_unit_cube() {
        for i in 0..=36 {
            let h = i as f64 / 36.0 - 0.5;
            for (s, v) in [(1.0, 1.0), (0.5, 0.25), (0.0, 1.0), (1.0, 0.0)] {
                let rgb = hsv_to_rgb_pixel(h, s, v);
                assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", rgb);
            }
        }
    }

    #[test]
    fn test_batch_matches_pixelwise() {
        let h = Array1::from(vec![0.1, 0.5, 0.9]);
        let s = Array1::from(vec![0.3, 0.6, 0.9]);
        let v = Array1::from(vec![0.4, 0.7, 1.0]);

        let rgb = hsv_to_rgb(&h, &s, &v);

        assert_eq!(rgb.len(), 3);
        for i in 0..3 {
            assert_rgb_eq(rgb[i], hsv_to_rgb_pixel(h[i], s[i], v[i]));
        }
    }
}
