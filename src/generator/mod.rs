//! Colormap generation.
//!
//! [`ColormapGenerator`] owns the random source and composes the smooth base
//! with two independent stripe signals:
//!
//! 1. draw the base hue, saturation and value trajectories
//! 2. draw a hue stripe signal and a denser value stripe signal
//! 3. add the hue stripes and wrap hue modulo 1
//! 4. add the value stripes and clip value to [0, 1]
//! 5. add a fixed saturation ripple and clip saturation to [0, 1]
//! 6. convert every sample to RGB
//!
//! Given a seed, the whole sequence of draws is reproducible.

pub mod base;
pub mod params;
pub mod stripes;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use tracing::debug;

use crate::colormaps::{hsv_to_rgb, LinearColormap};
use crate::error::{ColorStripesError, Result};
use crate::interpolation::positions;
use crate::render::{render_swatch, Swatch};

pub use base::HsvTrajectory;
pub use params::GenerationParams;
pub use stripes::{StripeComponent, Waveform};

use params::{
    validate_control_points, validate_finite, validate_positive, validate_range,
    validate_unit_range,
};

/// Default number of samples per colormap
pub const DEFAULT_RESOLUTION: usize = 256;

/// Value stripes run this much denser than hue stripes
const VALUE_STRIPE_FREQUENCY_SCALE: f64 = 1.5;

/// Amplitude of the decorative saturation ripple
const SATURATION_RIPPLE_AMPLITUDE: f64 = 0.05;

/// Cycles of the saturation ripple over [0, 1]
const SATURATION_RIPPLE_CYCLES: f64 = 10.0;

/// Generate complex colormaps with background transitions and stripe patterns
#[derive(Debug, Clone)]
pub struct ColormapGenerator<R = StdRng> {
    resolution: usize,
    rng: R,
}

impl ColormapGenerator<StdRng> {
    /// Create a generator with `resolution` samples per colormap.
    ///
    /// With a seed every subsequent call is reproducible; without one the
    /// generator is seeded from the operating system.
    pub fn new(resolution: usize, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::from_rng(resolution, rng)
    }
}

impl<R: Rng> ColormapGenerator<R> {
    /// Create a generator drawing from an existing random source
    pub fn from_rng(resolution: usize, rng: R) -> Result<Self> {
        validate_resolution(resolution)?;
        Ok(Self { resolution, rng })
    }

    /// Number of samples in every generated trajectory
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Generate smooth background hue, saturation and value trajectories
    pub fn generate_base(
        &mut self,
        n_control_points: usize,
        hue_range: (f64, f64),
        saturation_range: (f64, f64),
        value_range: (f64, f64),
    ) -> Result<HsvTrajectory> {
        validate_control_points(n_control_points)?;
        validate_unit_range("hue_range", hue_range)?;
        validate_unit_range("saturation_range", saturation_range)?;
        validate_unit_range("value_range", value_range)?;

        Ok(base::smooth_base(
            &mut self.rng,
            self.resolution,
            n_control_points,
            hue_range,
            saturation_range,
            value_range,
        ))
    }

    /// Generate a stripe signal with varying widths and intensities
    pub fn generate_stripes(
        &mut self,
        base_frequency: f64,
        frequency_variation: f64,
        amplitude_range: (f64, f64),
    ) -> Result<Array1<f64>> {
        validate_positive("base_frequency", base_frequency)?;
        validate_finite("frequency_variation", frequency_variation)?;
        validate_range("amplitude_range", amplitude_range)?;

        Ok(stripes::stripe_signal(
            &mut self.rng,
            self.resolution,
            base_frequency,
            frequency_variation,
            amplitude_range,
        ))
    }

    /// Generate a complete colormap
    pub fn generate_colormap(
        &mut self,
        name: &str,
        params: &GenerationParams,
    ) -> Result<LinearColormap> {
        params.validate()?;
        debug!(
            name = name,
            resolution = self.resolution,
            n_control_points = params.n_control_points,
            stripe_frequency = params.stripe_frequency,
            "Generating colormap"
        );

        let HsvTrajectory {
            mut hue,
            mut saturation,
            mut value,
        } = self.generate_base(
            params.n_control_points,
            params.hue_range,
            params.saturation_range,
            params.value_range,
        )?;

        let hue_stripes = self.generate_stripes(
            params.stripe_frequency,
            params.hue_frequency_variation(),
            params.hue_stripe_amplitude,
        )?;
        let value_stripes = self.generate_stripes(
            params.stripe_frequency * VALUE_STRIPE_FREQUENCY_SCALE,
            params.value_frequency_variation(),
            params.val_stripe_amplitude,
        )?;

        hue.zip_mut_with(&hue_stripes, |h, &s| *h = wrap_unit(*h + s));
        value.zip_mut_with(&value_stripes, |v, &s| *v = (*v + s).clamp(0.0, 1.0));

        let x = positions(self.resolution);
        saturation.zip_mut_with(&x, |s, &xi| {
            let ripple =
                SATURATION_RIPPLE_AMPLITUDE * (SATURATION_RIPPLE_CYCLES * TAU * xi).sin();
            *s = (*s + ripple).clamp(0.0, 1.0);
        });

        let rgb = hsv_to_rgb(&hue, &saturation, &value);
        LinearColormap::new(name, rgb)
    }

    /// Create a swatch pixel grid of a colormap
    pub fn create_swatch(
        &self,
        cmap: &LinearColormap,
        width: usize,
        height: usize,
    ) -> Result<Swatch> {
        render_swatch(cmap, width, height)
    }
}

fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(ColorStripesError::invalid_parameter(
            "resolution",
            format!("must be at least 2, got {}", resolution),
        ));
    }
    Ok(())
}

/// Uniform draw from `[low, high)`; a degenerate range yields `low`
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}

/// Wrap a hue into [0, 1)
pub(crate) fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
