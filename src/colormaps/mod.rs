//! Colormap types and color conversion.
//!
//! This module provides the colormap interface used for rendering, the
//! sample-backed colormap produced by the generator, and HSV to RGB conversion.

pub mod colormap;
pub mod hsv;
pub mod linear;

pub use colormap::{lerp_color, Colormap, Rgb, Rgba};
pub use hsv::{hsv_to_rgb, hsv_to_rgb_pixel};
pub use linear::LinearColormap;
