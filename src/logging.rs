//! Logging utilities for colorstripes.
//!
//! This module provides structured logging helpers so generation and export
//! runs leave searchable, timed records.

use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::ColorStripesError;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// stays free for command output.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log the start of a generation run
pub fn log_generation_start(name: &str, resolution: usize, count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => info!(
            colormap = name,
            resolution = resolution,
            count = count,
            seed = seed,
            "Starting generation"
        ),
        None => info!(
            colormap = name,
            resolution = resolution,
            count = count,
            "Starting unseeded generation"
        ),
    }
}

/// Log the end of a generation run
pub fn log_generation_end(name: &str, generated: usize, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            colormap = name,
            generated = generated,
            duration_ms = duration_ms,
            "Generation completed"
        );
    } else {
        warn!(
            colormap = name,
            generated = generated,
            duration_ms = duration_ms,
            "Generation stopped with errors"
        );
    }
}

/// Time a single colormap build, tagging both records with one operation id
pub fn log_timed_generation<F, T>(name: &str, resolution: usize, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let operation_id = generate_operation_id();

    debug!(
        colormap = name,
        resolution = resolution,
        operation_id = %operation_id,
        "Building colormap"
    );

    let result = f();

    debug!(
        colormap = name,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Colormap built"
    );

    result
}

/// Log every file written for a colormap
pub fn log_saved(name: &str, paths: &[PathBuf]) {
    for path in paths {
        info!(colormap = name, path = %path.display(), "Saved");
    }
}

/// Log an error with context
pub fn log_error(error: &ColorStripesError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}

/// Generate a unique operation ID
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}
