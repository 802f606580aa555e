//! Logging setup.

use anyhow::{Context, Result};
use finplan_config::LoggingConfig;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global subscriber from the `[logging]` section of the
/// app config. `RUST_LOG`, when set, overrides the configured level.
pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);
    let json = config.format.eq_ignore_ascii_case("json");

    match &config.file {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to open log file {}", path))?;
            let writer = Arc::new(file);
            if json {
                registry.with(fmt::layer().json().with_writer(writer)).init();
            } else {
                registry
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init();
            }
        }
        None if json => registry.with(fmt::layer().json()).init(),
        None => registry.with(fmt::layer().pretty()).init(),
    }
    Ok(())
}
