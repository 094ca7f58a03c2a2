//! Main entry point for the mlang demo.

use anyhow::Context;
use clap::Parser;
use mlang_config::{ConfigLoader, ConfigValidator};
use mlang_demo::{Args, Demo, TableSource, TextDecoder};
use std::io::Write;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration. The log level comes from it, so the loader runs
    // before any subscriber exists; its source is reported below.
    let mut config =
        ConfigLoader::load(args.config.as_deref()).context("failed to load configuration")?;
    args.apply(&mut config);
    ConfigValidator::validate(&config).context("invalid command-line override")?;

    // Initialize tracing
    mlang_demo::init_logging(&config).context("failed to initialize logging")?;

    match ConfigLoader::resolve_path(args.config.as_deref()) {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    info!(
        "Looking up message {} in language {}",
        config.lookup.message, config.lookup.language
    );

    let source = TableSource::from_config(&config).context("failed to load packed table")?;
    let decoder =
        TextDecoder::from_config(&config, args.text).context("failed to load character list")?;
    let demo = Demo::new(config, decoder, args.all);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo.run(&source, &mut out) {
        error!("Lookup failed: {}", e);
        return Err(e.into());
    }
    out.flush()?;

    Ok(())
}
