//! Colormap trait and utilities.
//!
//! This module defines the common interface renderers use to evaluate a
//! colormap at a normalized position.

/// An RGB triple with components in [0, 1]
pub type Rgb = [f64; 3];

/// An RGBA quadruple with components in [0, 1]
pub type Rgba = [f64; 4];

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> Rgba;

    /// Map a normalized value to an 8-bit RGBA pixel
    fn map_rgba8(&self, value: f64) -> [u8; 4] {
        let rgba = self.map_normalized(value);
        [
            to_u8(rgba[0]),
            to_u8(rgba[1]),
            to_u8(rgba[2]),
            to_u8(rgba[3]),
        ]
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    [
        c1[0] * (1.0 - t) + c2[0] * t,
        c1[1] * (1.0 - t) + c2[1] * t,
        c1[2] * (1.0 - t) + c2[2] * t,
    ]
}

/// Quantize a unit-interval channel to a byte
pub fn to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color() {
        let black = [0.0, 0.0, 0.0];
        let white = [1.0, 1.0, 1.0];

        let mid = lerp_color(black, white, 0.5);
        assert_eq!(mid, [0.5, 0.5, 0.5]);
        assert_eq!(lerp_color(black, white, 0.0), black);
        assert_eq!(lerp_color(black, white, 1.0), white);
    }

    #[test]
    fn test_to_u8() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(-0.2), 0);
        assert_eq!(to_u8(1.7), 255);
    }
}
