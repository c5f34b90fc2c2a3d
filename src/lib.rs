//! # colorstripes
//!
//! Randomized colormaps with smooth background transitions and stripe patterns.
//!
//! A colormap is built from a low-frequency hue/saturation/value background,
//! drawn from a handful of random control points, overlaid with additive
//! stripe signals made of several modulated waves. The result is converted to
//! RGB and packaged as a named, continuous colormap over [0, 1].
//!
//! ## Key Features
//!
//! - **Reproducible generation**: every draw comes from one seeded random source
//! - **Layered composition**: smooth base, hue stripes, value stripes and a saturation ripple
//! - **Persistence**: JSON color data and PNG gradient strips
//!
//! ## Architecture
//!
//! - **Generator**: base and stripe synthesis plus composition
//! - **Colormaps**: the sample-backed colormap and HSV conversion
//! - **Render/Export**: swatch pixel grids, images and the JSON format

pub mod colormaps;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod interpolation;
pub mod logging;
pub mod render;

pub use colormaps::{Colormap, LinearColormap};
pub use config::Config;
pub use error::{ColorStripesError, Result};
pub use export::{
    load_colormap_from_json, save_colormap, save_colormap_tagged, ColormapData, OutputFormat,
};
pub use generator::{ColormapGenerator, GenerationParams, HsvTrajectory};
pub use logging::{
    init_tracing, log_error, log_generation_end, log_generation_start, log_saved,
    log_timed_generation,
};
pub use render::{render_swatch, Swatch};
