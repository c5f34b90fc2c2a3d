//! colorstripes - Generate randomized colormaps with smooth transitions and stripe patterns
//!
//! This is the main entry point for the colorstripes command.

use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

use colorstripes::export::with_extension_suffix;
use colorstripes::render::{save_swatch_png, terminal_preview, SWATCH_HEIGHT, SWATCH_WIDTH};
use colorstripes::{
    init_tracing, log_error, log_generation_end, log_generation_start, log_saved,
    log_timed_generation, save_colormap, ColormapGenerator, Config,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting colorstripes v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let start = Instant::now();
    log_generation_start(
        &config.name,
        config.resolution,
        config.output.count,
        config.seed,
    );

    let mut generated = 0;
    let result = run(&config, &mut generated);
    if let Err(e) = &result {
        log_error(e, "generate");
    }
    log_generation_end(&config.name, generated, start, result.is_ok());

    Ok(result?)
}

fn run(config: &Config, generated: &mut usize) -> colorstripes::Result<()> {
    let mut generator = ColormapGenerator::new(config.resolution, config.seed)?;
    let batch = config.output.count > 1;

    for index in 0..config.output.count {
        let name = if batch {
            format!("{}_{}", config.name, index)
        } else {
            config.name.clone()
        };

        let cmap = log_timed_generation(&name, config.resolution, || {
            generator.generate_colormap(&name, &config.params)
        })?;
        *generated += 1;

        if config.output.show {
            println!("{}", name);
            println!("{}", terminal_preview(&cmap, 80));
        }

        let Some(output) = &config.output.path else {
            continue;
        };
        let base: PathBuf = if batch {
            with_extension_suffix(output, &format!("_{}", index))
        } else {
            output.clone()
        };

        let written = save_colormap(&cmap, &base, config.output.format)?;
        log_saved(&name, &written);
        for path in &written {
            println!("Saved {}", path.display());
        }

        if config.output.format.wants_png() {
            let swatch_path = with_extension_suffix(&base, "_swatch.png");
            save_swatch_png(&cmap, &swatch_path, SWATCH_WIDTH, SWATCH_HEIGHT)?;
            println!("Saved swatch to {}", swatch_path.display());
        }
    }

    Ok(())
}
