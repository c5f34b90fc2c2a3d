//! Stripe pattern synthesis.
//!
//! A stripe signal is the sum of three to six wave components. Each component
//! has its own frequency, phase and amplitude envelope, and a slow frequency
//! modulation that squeezes and stretches stripes along the axis. About half
//! of the components are pushed through `tanh` for harder, square-ish edges.
//!
//! The summed signal is not normalized; callers clip or wrap after adding it.

use ndarray::{Array1, Zip};
use rand::Rng;
use std::f64::consts::TAU;
use tracing::trace;

use super::uniform;
use crate::interpolation::{linspace, positions};

/// Inclusive bounds on the number of wave components
const COMPONENT_COUNT: (usize, usize) = (3, 6);

/// Depth of the frequency modulation
const FM_DEPTH: f64 = 0.3;

/// Range of the frequency-modulation rate, in cycles over [0, 1]
const FM_RATE: (f64, f64) = (0.5, 2.0);

/// Gain inside `tanh` for saturated components
const SATURATION_GAIN: f64 = 5.0;

/// Shape of a single wave component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Plain sinusoid
    Sine,
    /// Soft-clipped sinusoid with sharper band edges
    Saturated,
}

/// One randomly parameterized wave component
#[derive(Debug, Clone, PartialEq)]
pub struct StripeComponent {
    pub frequency: f64,
    pub phase: f64,
    pub amplitude_start: f64,
    pub amplitude_end: f64,
    pub fm_rate: f64,
    pub waveform: Waveform,
}

impl StripeComponent {
    /// Draw a component around `base_frequency`
    pub(crate) fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        base_frequency: f64,
        frequency_variation: f64,
        amplitude_range: (f64, f64),
    ) -> Self {
        let frequency =
            base_frequency * uniform(rng, 1.0 - frequency_variation, 1.0 + frequency_variation);
        let phase = uniform(rng, 0.0, TAU);
        let amplitude_start = uniform(rng, amplitude_range.0, amplitude_range.1);
        let amplitude_end = uniform(rng, amplitude_range.0, amplitude_range.1);
        let fm_rate = uniform(rng, FM_RATE.0, FM_RATE.1);
        let waveform = if rng.random::<f64>() > 0.5 {
            Waveform::Saturated
        } else {
            Waveform::Sine
        };

        Self {
            frequency,
            phase,
            amplitude_start,
            amplitude_end,
            fm_rate,
            waveform,
        }
    }

    /// Evaluate this component at the normalized positions `x`
    pub fn render(&self, x: &Array1<f64>) -> Array1<f64> {
        let amplitude = linspace(self.amplitude_start, self.amplitude_end, x.len());

        Zip::from(x).and(&amplitude).map_collect(|&xi, &amp| {
            let fm = 1.0 + FM_DEPTH * (TAU * xi * self.fm_rate).sin();
            let wave = amp * (TAU * self.frequency * fm * xi + self.phase).sin();
            match self.waveform {
                Waveform::Sine => wave,
                Waveform::Saturated => amp * (SATURATION_GAIN * wave).tanh(),
            }
        })
    }
}

/// Draw and sum a stripe signal of length `resolution`
pub(crate) fn stripe_signal<R: Rng + ?Sized>(
    rng: &mut R,
    resolution: usize,
    base_frequency: f64,
    frequency_variation: f64,
    amplitude_range: (f64, f64),
) -> Array1<f64> {
    let x = positions(resolution);
    let n_components = rng.random_range(COMPONENT_COUNT.0..=COMPONENT_COUNT.1);

    let mut stripes = Array1::<f64>::zeros(resolution);
    for _ in 0..n_components {
        let component =
            StripeComponent::draw(rng, base_frequency, frequency_variation, amplitude_range);
        trace!(
            frequency = component.frequency,
            waveform = ?component.waveform,
            "Stripe component drawn"
        );
        stripes += &component.render(&x);
    }

    stripes
}
