//! Image utilities for testing.
//!
//! This module provides helper functions for loading and checking written images.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Check if an image has the expected dimensions
///
/// # Returns
///
/// * `Ok(())` if the image has the expected dimensions
/// * `Err(String)` with an error message if the dimensions differ
pub fn assert_image_dimensions(
    image: &DynamicImage,
    expected_width: u32,
    expected_height: u32,
) -> Result<(), String> {
    let (actual_width, actual_height) = image.dimensions();

    if actual_width != expected_width || actual_height != expected_height {
        return Err(format!(
            "Image dimensions differ: actual = {}x{}, expected = {}x{}",
            actual_width, actual_height, expected_width, expected_height
        ));
    }

    Ok(())
}

/// Check that a file on disk is a PNG
pub fn assert_png_file(path: &Path) -> Result<(), String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    match detect_image_format(&bytes) {
        Some(ImageFormat::Png) => Ok(()),
        other => Err(format!(
            "Image format differs: actual = {:?}, expected = Png",
            other
        )),
    }
}
