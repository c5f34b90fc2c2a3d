//! Tunable generation parameters.
//!
//! Every field has a serde default so a JSON config file only needs to name
//! what it changes. Ranges are `(min, max)` pairs, written as two-element
//! arrays in JSON.

use serde::{Deserialize, Serialize};

use crate::error::{ColorStripesError, Result};

/// Default frequency variation of the hue stripe signal
pub const DEFAULT_HUE_FREQUENCY_VARIATION: f64 = 0.5;

/// Default frequency variation of the value stripe signal
pub const DEFAULT_VALUE_FREQUENCY_VARIATION: f64 = 0.3;

/// Parameters for a single colormap generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of control points of the smooth base
    #[serde(default = "default_control_points")]
    pub n_control_points: usize,

    /// Range of hues (0-1) to use
    #[serde(default = "default_hue_range")]
    pub hue_range: (f64, f64),

    /// Range of saturation values
    #[serde(default = "default_saturation_range")]
    pub saturation_range: (f64, f64),

    /// Range of value/brightness values
    #[serde(default = "default_value_range")]
    pub value_range: (f64, f64),

    /// Base frequency of stripes, in cycles over the whole colormap
    #[serde(default = "default_stripe_frequency")]
    pub stripe_frequency: f64,

    /// Frequency variation applied to both stripe signals.
    ///
    /// When unset the hue stripes use 0.5 and the value stripes 0.3.
    #[serde(default)]
    pub frequency_variation: Option<f64>,

    /// Amplitude range of the hue stripes
    #[serde(default = "default_hue_stripe_amplitude")]
    pub hue_stripe_amplitude: (f64, f64),

    /// Amplitude range of the value stripes
    #[serde(default = "default_val_stripe_amplitude")]
    pub val_stripe_amplitude: (f64, f64),
}

impl GenerationParams {
    /// Frequency variation used for the hue stripe signal
    pub fn hue_frequency_variation(&self) -> f64 {
        self.frequency_variation
            .unwrap_or(DEFAULT_HUE_FREQUENCY_VARIATION)
    }

    /// Frequency variation used for the value stripe signal
    pub fn value_frequency_variation(&self) -> f64 {
        self.frequency_variation
            .unwrap_or(DEFAULT_VALUE_FREQUENCY_VARIATION)
    }

    /// Validate all parameters, failing on the first problem found
    pub fn validate(&self) -> Result<()> {
        validate_control_points(self.n_control_points)?;
        validate_unit_range("hue_range", self.hue_range)?;
        validate_unit_range("saturation_range", self.saturation_range)?;
        validate_unit_range("value_range", self.value_range)?;
        validate_positive("stripe_frequency", self.stripe_frequency)?;
        if let Some(variation) = self.frequency_variation {
            validate_finite("frequency_variation", variation)?;
        }
        validate_range("hue_stripe_amplitude", self.hue_stripe_amplitude)?;
        validate_range("val_stripe_amplitude", self.val_stripe_amplitude)?;
        Ok(())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            n_control_points: default_control_points(),
            hue_range: default_hue_range(),
            saturation_range: default_saturation_range(),
            value_range: default_value_range(),
            stripe_frequency: default_stripe_frequency(),
            frequency_variation: None,
            hue_stripe_amplitude: default_hue_stripe_amplitude(),
            val_stripe_amplitude: default_val_stripe_amplitude(),
        }
    }
}

/// Reject fewer than two control points; interpolation needs both ends
pub(crate) fn validate_control_points(n_control_points: usize) -> Result<()> {
    if n_control_points < 2 {
        return Err(ColorStripesError::invalid_parameter(
            "n_control_points",
            format!("must be at least 2, got {}", n_control_points),
        ));
    }
    Ok(())
}

/// Require a finite range with `min <= max`
pub(crate) fn validate_range(param: &str, (min, max): (f64, f64)) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ColorStripesError::InvalidRange {
            param: param.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Require a valid range lying inside [0, 1]
pub(crate) fn validate_unit_range(param: &str, range: (f64, f64)) -> Result<()> {
    validate_range(param, range)?;
    if range.0 < 0.0 || range.1 > 1.0 {
        return Err(ColorStripesError::InvalidRange {
            param: param.to_string(),
            min: range.0,
            max: range.1,
        });
    }
    Ok(())
}

pub(crate) fn validate_finite(param: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ColorStripesError::invalid_parameter(
            param,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

pub(crate) fn validate_positive(param: &str, value: f64) -> Result<()> {
    validate_finite(param, value)?;
    if value <= 0.0 {
        return Err(ColorStripesError::invalid_parameter(
            param,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

// Default value functions for serde
fn default_control_points() -> usize {
    5
}

fn default_hue_range() -> (f64, f64) {
    (0.0, 1.0)
}

fn default_saturation_range() -> (f64, f64) {
    (0.3, 0.9)
}

fn default_value_range() -> (f64, f64) {
    (0.4, 0.95)
}

fn default_stripe_frequency() -> f64 {
    50.0
}

fn default_hue_stripe_amplitude() -> (f64, f64) {
    (0.02, 0.08)
}

fn default_val_stripe_amplitude() -> (f64, f64) {
    (0.05, 0.15)
}
