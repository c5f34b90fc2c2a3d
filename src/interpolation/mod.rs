//! One-dimensional interpolation over the normalized position axis.
//!
//! Trajectories are sampled at equally spaced positions across [0, 1] and
//! sparse control sequences are expanded onto them by piecewise-linear
//! interpolation.

pub mod common;
pub mod linear;

pub use common::{clamp_index, linear_weight};
pub use linear::{interp, linspace, positions};
