//! Swatch rendering.
//!
//! A swatch is a horizontal strip: the colormap evaluated at `width` equally
//! spaced positions across [0, 1], repeated on every row. Rendering is pure;
//! writing the strip to disk goes through the `image` crate.

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::{Array3, Axis};
use std::path::Path;
use tracing::debug;

use crate::colormaps::colormap::to_u8;
use crate::colormaps::Colormap;
use crate::error::{ColorStripesError, Result};
use crate::interpolation::positions;

/// Default swatch dimensions
pub const SWATCH_WIDTH: usize = 800;
pub const SWATCH_HEIGHT: usize = 60;

/// Dimensions of the gradient strip saved alongside colormap data
pub const GRADIENT_WIDTH: usize = 1000;
pub const GRADIENT_HEIGHT: usize = 100;

/// RGBA pixel grid of shape (height, width, 4) with channels in [0, 1]
pub type Swatch = Array3<f64>;

/// Render a colormap into a (height, width, 4) pixel grid
pub fn render_swatch(colormap: &dyn Colormap, width: usize, height: usize) -> Result<Swatch> {
    if width == 0 || height == 0 {
        return Err(ColorStripesError::invalid_parameter(
            "swatch",
            format!("dimensions must be non-zero, got {}x{}", width, height),
        ));
    }

    let row: Vec<[f64; 4]> = if width == 1 {
        vec![colormap.map_normalized(0.0)]
    } else {
        positions(width)
            .iter()
            .map(|&t| colormap.map_normalized(t))
            .collect()
    };

    Ok(Array3::from_shape_fn((height, width, 4), |(_, x, c)| {
        row[x][c]
    }))
}

/// Convert a pixel grid to an 8-bit RGBA image
pub fn swatch_image(swatch: &Swatch) -> Result<RgbaImage> {
    let (height, width, channels) = swatch.dim();
    if channels != 4 {
        return Err(ColorStripesError::invalid_parameter(
            "swatch",
            format!("expected 4 channels, got {}", channels),
        ));
    }

    let width = u32::try_from(width)
        .map_err(|_| ColorStripesError::invalid_parameter("swatch", "width too large"))?;
    let height = u32::try_from(height)
        .map_err(|_| ColorStripesError::invalid_parameter("swatch", "height too large"))?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = swatch
            .index_axis(Axis(0), y as usize)
            .index_axis_move(Axis(0), x as usize);
        Rgba([
            to_u8(pixel[0]),
            to_u8(pixel[1]),
            to_u8(pixel[2]),
            to_u8(pixel[3]),
        ])
    }))
}

/// Render a colormap and write it as a PNG file
pub fn save_swatch_png(
    colormap: &dyn Colormap,
    path: &Path,
    width: usize,
    height: usize,
) -> Result<()> {
    let swatch = render_swatch(colormap, width, height)?;
    let img = swatch_image(&swatch)?;
    img.save_with_format(path, image::ImageFormat::Png)?;

    debug!(
        colormap = colormap.name(),
        path = %path.display(),
        width = width,
        height = height,
        "Swatch written"
    );
    Ok(())
}

/// One line of 24-bit ANSI background cells previewing the colormap
pub fn terminal_preview(colormap: &dyn Colormap, width: usize) -> String {
    let mut line = String::with_capacity(width * 20 + 4);
    for t in positions(width.max(2)).iter().take(width) {
        let [r, g, b, _] = colormap.map_rgba8(*t);
        line.push_str(&format!("\x1b[48;2;{};{};{}m ", r, g, b));
    }
    line.push_str("\x1b[0m");
    line
}
