//! Smooth background color transitions.
//!
//! Saturation and value are drawn independently at a few equally spaced
//! control points. Hue follows a normalized random walk so neighbouring
//! control points keep a sense of direction. All three are expanded to full
//! resolution by linear interpolation and the hue gets one slow sine wobble.

use ndarray::Array1;
use rand::Rng;
use std::f64::consts::TAU;
use tracing::trace;

use super::{uniform, wrap_unit};
use crate::interpolation::{interp, linspace, positions};

/// Largest hue random-walk step between control points
const HUE_STEP: f64 = 0.3;

/// Guards the random-walk normalization when every step is identical
const NORMALIZE_EPSILON: f64 = 1e-8;

/// Amplitude range of the hue wobble
const WOBBLE_AMPLITUDE: (f64, f64) = (0.05, 0.15);

/// Frequency range of the hue wobble, in cycles over [0, 1]
const WOBBLE_FREQUENCY: (f64, f64) = (1.0, 4.0);

/// Hue ranges narrower than this are clipped instead of wrapped
const WRAP_THRESHOLD: f64 = 0.8;

/// Hue, saturation and value trajectories of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct HsvTrajectory {
    pub hue: Array1<f64>,
    pub saturation: Array1<f64>,
    pub value: Array1<f64>,
}

impl HsvTrajectory {
    /// Number of samples per channel
    pub fn len(&self) -> usize {
        self.hue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hue.is_empty()
    }
}

/// Draw a smooth base trajectory. Ranges must already be validated.
pub(crate) fn smooth_base<R: Rng + ?Sized>(
    rng: &mut R,
    resolution: usize,
    n_control_points: usize,
    hue_range: (f64, f64),
    saturation_range: (f64, f64),
    value_range: (f64, f64),
) -> HsvTrajectory {
    let x_control = linspace(0.0, 1.0, n_control_points).to_vec();

    let sat_control = draw_controls(rng, n_control_points, saturation_range);
    let val_control = draw_controls(rng, n_control_points, value_range);
    let hue_control = hue_walk(rng, n_control_points, hue_range);

    let x = positions(resolution);
    let mut hue = interp(&x, &x_control, &hue_control);
    let saturation = interp(&x, &x_control, &sat_control);
    let value = interp(&x, &x_control, &val_control);

    let frequency = uniform(rng, WOBBLE_FREQUENCY.0, WOBBLE_FREQUENCY.1);
    let phase = uniform(rng, 0.0, TAU);
    let amplitude = uniform(rng, WOBBLE_AMPLITUDE.0, WOBBLE_AMPLITUDE.1);
    trace!(frequency, phase, amplitude, "Hue wobble drawn");

    hue.zip_mut_with(&x, |h, &xi| {
        *h += amplitude * (frequency * TAU * xi + phase).sin();
    });

    if hue_range.1 - hue_range.0 < WRAP_THRESHOLD {
        hue.mapv_inplace(|h| h.clamp(0.0, 1.0));
    } else {
        hue.mapv_inplace(wrap_unit);
    }

    HsvTrajectory {
        hue,
        saturation,
        value,
    }
}

fn draw_controls<R: Rng + ?Sized>(rng: &mut R, n: usize, (low, high): (f64, f64)) -> Vec<f64> {
    (0..n).map(|_| uniform(rng, low, high)).collect()
}

/// Cumulative random walk, min-max normalized and mapped into `hue_range`
fn hue_walk<R: Rng + ?Sized>(rng: &mut R, n: usize, (low, high): (f64, f64)) -> Vec<f64> {
    let mut position = 0.0;
    let walk: Vec<f64> = (0..n)
        .map(|_| {
            position += uniform(rng, -HUE_STEP, HUE_STEP);
            position
        })
        .collect();

    let min = walk.iter().copied().fold(f64::INFINITY, f64::min);
    let max = walk.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min + NORMALIZE_EPSILON;

    walk.into_iter()
        .map(|step| (step - min) / span * (high - low) + low)
        .collect()
}
