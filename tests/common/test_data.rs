//! Test data generation utilities.
//!
//! This module provides seeded colormaps and scratch files with known contents.

use colorstripes::{ColormapGenerator, GenerationParams, LinearColormap};
use std::path::{Path, PathBuf};

/// Generate a seeded colormap with default parameters
pub fn sample_colormap(name: &str, seed: u64, resolution: usize) -> LinearColormap {
    let mut generator =
        ColormapGenerator::new(resolution, Some(seed)).expect("valid resolution");
    generator
        .generate_colormap(name, &GenerationParams::default())
        .expect("default parameters are valid")
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write test file");
    path
}
