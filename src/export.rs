//! Saving and loading colormaps.
//!
//! The data format is a JSON object
//! `{"name": ..., "colors": [[r, g, b], ...], "n_colors": 256}`. Export always
//! resamples the colormap at 256 equally spaced positions; loading keeps
//! however many colors the file holds.
//!
//! Output paths are given without an extension. `.json` and `.png` are
//! appended to the base path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::colormaps::{Colormap, LinearColormap, Rgb};
use crate::error::{ColorStripesError, Result};
use crate::render::{save_swatch_png, GRADIENT_HEIGHT, GRADIENT_WIDTH};

/// Number of colors written to the data format
pub const EXPORT_COLORS: usize = 256;

/// Name used when a loaded file carries none
pub const DEFAULT_NAME: &str = "custom";

/// Which files to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Gradient image only
    #[value(alias = "image")]
    Png,
    /// Color data only
    #[value(alias = "data")]
    Json,
    /// Both image and data
    Both,
}

impl OutputFormat {
    pub fn wants_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    pub fn wants_png(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = ColorStripesError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" | "image" => Ok(OutputFormat::Png),
            "json" | "data" => Ok(OutputFormat::Json),
            "both" => Ok(OutputFormat::Both),
            _ => Err(ColorStripesError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Serialized form of a colormap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColormapData {
    pub name: String,
    pub colors: Vec<Rgb>,
    pub n_colors: usize,
}

impl ColormapData {
    /// Resample a colormap for export
    pub fn from_colormap(cmap: &LinearColormap) -> Self {
        let colors = cmap.sample(EXPORT_COLORS);
        Self {
            name: cmap.name().to_string(),
            n_colors: colors.len(),
            colors,
        }
    }
}

/// Serialize a colormap to pretty-printed JSON
pub fn to_json_string(cmap: &LinearColormap) -> Result<String> {
    let data = ColormapData::from_colormap(cmap);
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Parse a colormap from JSON text.
///
/// Unparsable text is a [`ColorStripesError::Parse`]; valid JSON without a
/// `colors` key is a [`ColorStripesError::MissingField`].
pub fn from_json_str(json: &str) -> Result<LinearColormap> {
    let value: Value = serde_json::from_str(json).map_err(|e| ColorStripesError::Parse {
        message: e.to_string(),
    })?;

    let object = value
        .as_object()
        .ok_or_else(|| ColorStripesError::InvalidColormap {
            message: "expected a JSON object".to_string(),
        })?;

    let colors = object
        .get("colors")
        .ok_or_else(|| ColorStripesError::MissingField {
            field: "colors".to_string(),
        })?;
    let colors: Vec<Rgb> =
        serde_json::from_value(colors.clone()).map_err(|e| ColorStripesError::InvalidColormap {
            message: format!("colors must be a list of [r, g, b] triples: {}", e),
        })?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_NAME);

    LinearColormap::new(name, colors)
}

/// Load a colormap from a JSON file
pub fn load_colormap_from_json(path: &Path) -> Result<LinearColormap> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Write the JSON data file for a colormap
pub fn save_json(cmap: &LinearColormap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ColormapData::from_colormap(cmap))?;
    writer.flush()?;
    Ok(())
}

/// Save a colormap in the given format(s), returning the written paths
pub fn save_colormap(
    cmap: &LinearColormap,
    output_path: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if format.wants_json() {
        let json_path = with_extension_suffix(output_path, ".json");
        save_json(cmap, &json_path)?;
        debug!(path = %json_path.display(), "Saved colormap data");
        written.push(json_path);
    }

    if format.wants_png() {
        let png_path = with_extension_suffix(output_path, ".png");
        save_swatch_png(cmap, &png_path, GRADIENT_WIDTH, GRADIENT_HEIGHT)?;
        debug!(path = %png_path.display(), "Saved colormap gradient");
        written.push(png_path);
    }

    Ok(written)
}

/// Save a colormap selecting the format by tag.
///
/// Unrecognized tags write nothing and do not fail; a warning is logged.
pub fn save_colormap_tagged(
    cmap: &LinearColormap,
    output_path: &Path,
    format: &str,
) -> Result<Vec<PathBuf>> {
    match format.parse::<OutputFormat>() {
        Ok(format) => save_colormap(cmap, output_path, format),
        Err(e) => {
            warn!(format = format, error = %e, "Ignoring unrecognized output format");
            Ok(Vec::new())
        }
    }
}

/// Append `suffix` to a path without replacing any existing extension
pub fn with_extension_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}
