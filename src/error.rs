//! Error types for colorstripes.
//!
//! This module defines the error enum shared by generation, rendering and
//! persistence. Configuration problems fail at the public entry points instead
//! of being clamped, and the two ways a colormap file can be broken (unparsable
//! vs. missing a required key) are kept as separate variants.

use thiserror::Error;

/// The main error type for colorstripes operations.
#[derive(Error, Debug)]
pub enum ColorStripesError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Inverted or non-finite numeric ranges
    #[error("Invalid range for {param}: ({min}, {max})")]
    InvalidRange { param: String, min: f64, max: f64 },

    /// Source data could not be parsed at all
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Source data parsed but lacks a required field
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// Colormap payload with the wrong shape
    #[error("Invalid colormap: {message}")]
    InvalidColormap { message: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Unknown export format tag
    #[error("Unsupported format: {format}. Must be one of: png, json, both")]
    UnsupportedFormat { format: String },
}

/// Convenience type alias for Results with ColorStripesError
pub type Result<T> = std::result::Result<T, ColorStripesError>;

impl ColorStripesError {
    pub(crate) fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        ColorStripesError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }
}
