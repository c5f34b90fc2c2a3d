//! Configuration management for colorstripes.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ColorStripesError, Result};
use crate::export::OutputFormat;
use crate::generator::{GenerationParams, DEFAULT_RESOLUTION};

/// Command-line arguments for colorstripes
#[derive(Parser, Debug, Default)]
#[command(name = "colorstripes")]
#[command(
    author,
    version,
    about = "Generate randomized colormaps with smooth transitions and stripe patterns.",
    long_about = None
)]
pub struct Args {
    /// Name for the colormap
    #[arg(short, long, env = "COLORSTRIPES_NAME")]
    pub name: Option<String>,

    /// Random seed for reproducibility
    #[arg(short, long, env = "COLORSTRIPES_SEED")]
    pub seed: Option<u64>,

    /// Output file path (without extension)
    #[arg(short, long, env = "COLORSTRIPES_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "COLORSTRIPES_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of points in colormap
    #[arg(long, env = "COLORSTRIPES_N_POINTS")]
    pub n_points: Option<usize>,

    /// Base frequency of stripes
    #[arg(long, env = "COLORSTRIPES_STRIPE_FREQUENCY")]
    pub stripe_frequency: Option<f64>,

    /// How much stripe frequencies vary (0-1)
    #[arg(long, env = "COLORSTRIPES_FREQUENCY_VARIATION")]
    pub frequency_variation: Option<f64>,

    /// Number of control points of the smooth background
    #[arg(long, env = "COLORSTRIPES_CONTROL_POINTS")]
    pub control_points: Option<usize>,

    /// Number of colormaps to generate
    #[arg(long, env = "COLORSTRIPES_COUNT")]
    pub count: Option<usize>,

    /// Print a preview of the colormap to the terminal (`--show false` turns it off)
    #[arg(
        long,
        env = "COLORSTRIPES_SHOW",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub show: Option<bool>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "COLORSTRIPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COLORSTRIPES_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base output path; nothing is written when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Which files to write
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Number of colormaps to generate
    #[serde(default = "default_count")]
    pub count: usize,

    /// Print a terminal preview
    #[serde(default)]
    pub show: bool,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name for the colormap
    #[serde(default = "default_name")]
    pub name: String,

    /// Random seed; unseeded runs draw from the OS
    #[serde(default)]
    pub seed: Option<u64>,

    /// Samples per colormap
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Generation parameters
    #[serde(default)]
    pub params: GenerationParams,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(name) = args.name {
            config.name = name;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        if let Some(resolution) = args.n_points {
            config.resolution = resolution;
        }
        if let Some(frequency) = args.stripe_frequency {
            config.params.stripe_frequency = frequency;
        }
        if args.frequency_variation.is_some() {
            config.params.frequency_variation = args.frequency_variation;
        }
        if let Some(n) = args.control_points {
            config.params.n_control_points = n;
        }
        if args.output.is_some() {
            config.output.path = args.output;
        }
        if let Some(format) = args.format {
            config.output.format = format;
        }
        if let Some(count) = args.count {
            config.output.count = count;
        }
        if let Some(show) = args.show {
            config.output.show = show;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| ColorStripesError::Config {
            message: format!("Invalid config file {}: {}", path.display(), e),
        })?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.name = other.name;
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        self.resolution = other.resolution;
        self.params = other.params;
        if other.output.path.is_some() {
            self.output.path = other.output.path;
        }
        self.output.format = other.output.format;
        self.output.count = other.output.count;
        self.output.show = other.output.show;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ColorStripesError::Config {
                message: "Colormap name cannot be empty".to_string(),
            });
        }

        if self.resolution < 2 {
            return Err(ColorStripesError::Config {
                message: format!(
                    "Resolution must be at least 2, got {}",
                    self.resolution
                ),
            });
        }

        if self.output.count == 0 {
            return Err(ColorStripesError::Config {
                message: "Count must be at least 1".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ColorStripesError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.params.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            seed: None,
            resolution: default_resolution(),
            params: GenerationParams::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: default_format(),
            count: default_count(),
            show: false,
        }
    }
}

// Default value functions for serde
fn default_name() -> String {
    "custom".to_string()
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_format() -> OutputFormat {
    OutputFormat::Both
}

fn default_count() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}
