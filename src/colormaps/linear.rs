//! Piecewise-linear colormaps backed by discrete RGB samples.
//!
//! A [`LinearColormap`] is the artifact produced by generation and by loading
//! a saved colormap: a name plus an ordered list of RGB samples spread evenly
//! over [0, 1]. Evaluating it at `t` interpolates between the two samples
//! around `t * (len - 1)`.

use super::colormap::{lerp_color, Colormap, Rgb, Rgba};
use crate::error::{ColorStripesError, Result};
use crate::interpolation::common::segment;
use crate::interpolation::positions;

/// A named, continuous colormap over [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColormap {
    name: String,
    colors: Vec<Rgb>,
}

impl LinearColormap {
    /// Create a colormap from at least one RGB sample.
    ///
    /// Every channel must be finite and inside [0, 1].
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ColorStripesError::InvalidColormap {
                message: "a colormap needs at least one color".to_string(),
            });
        }
        if let Some((index, rgb)) = colors
            .iter()
            .enumerate()
            .find(|(_, rgb)| !rgb.iter().all(|c| (0.0..=1.0).contains(c)))
        {
            return Err(ColorStripesError::InvalidColormap {
                message: format!(
                    "RGB values must be within 0-1, color {} is {:?}",
                    index, rgb
                ),
            });
        }
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    /// The RGB samples backing this colormap
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty sample lists
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evaluate the RGB color at `t`, clamping `t` into [0, 1]
    pub fn map_rgb(&self, t: f64) -> Rgb {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let (left, frac) = segment(t.clamp(0.0, 1.0) * (n - 1) as f64, n);
        lerp_color(self.colors[left], self.colors[left + 1], frac)
    }

    /// Resample the colormap at `n` equally spaced positions
    pub fn sample(&self, n: usize) -> Vec<Rgb> {
        positions(n).iter().map(|&t| self.map_rgb(t)).collect()
    }
}

impl Colormap for LinearColormap {
    fn map_normalized(&self, value: f64) -> Rgba {
        if !value.is_finite() {
            // Transparent black for NaN/missing values
            return [0.0, 0.0, 0.0, 0.0];
        }
        let [r, g, b] = self.map_rgb(value);
        [r, g, b, 1.0]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> LinearColormap {
        LinearColormap::new(
            "ramp",
            vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.0], [1.0, 1.0, 1.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            LinearColormap::new("empty", vec![]),
            Err(ColorStripesError::InvalidColormap { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_channels() {
        for bad in [[1.5, 0.0, 0.0], [0.0, -0.01, 0.0], [0.0, 0.0, f64::NAN]] {
            assert!(matches!(
                LinearColormap::new("bad", vec![[0.0, 0.0, 0.0], bad]),
                Err(ColorStripesError::InvalidColormap { .. })
            ));
        }
        assert!(LinearColormap::new("edges", vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]).is_ok());
    }

    #[test]
    fn test_map_hits_samples_and_midpoints() {
        let cmap = ramp();
        assert_eq!(cmap.map_rgb(0.0), [0.0, 0.0, 0.0]);
        assert_eq!(cmap.map_rgb(0.5), [1.0, 0.5, 0.0]);
        assert_eq!(cmap.map_rgb(1.0), [1.0, 1.0, 1.0]);
        assert_eq!(cmap.map_rgb(0.25), [0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_map_clamps_out_of_range() {
        let cmap = ramp();
        assert_eq!(cmap.map_rgb(-3.0), cmap.map_rgb(0.0));
        assert_eq!(cmap.map_rgb(7.0), cmap.map_rgb(1.0));
    }

    #[test]
    fn test_map_normalized_alpha() {
        let cmap = ramp();
        assert_eq!(cmap.map_normalized(1.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(cmap.map_normalized(f64::NAN), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(cmap.map_rgba8(0.5), [255, 128, 0, 255]);
        assert_eq!(cmap.name(), "ramp");
    }

    #[test]
    fn test_single_color_is_constant() {
        let cmap = LinearColormap::new("flat", vec![[0.2, 0.4, 0.6]]).unwrap();
        assert_eq!(cmap.map_rgb(0.0), [0.2, 0.4, 0.6]);
        assert_eq!(cmap.map_rgb(0.73), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_sample_resamples_evenly() {
        let cmap = ramp();
        let samples = cmap.sample(5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], [0.0, 0.0, 0.0]);
        assert_eq!(samples[2], [1.0, 0.5, 0.0]);
        assert_eq!(samples[4], [1.0, 1.0, 1.0]);
    }
}
