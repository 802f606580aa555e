//! Config validation command implementation.

use anyhow::{Context, Result};
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let config = finplan_config::load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    config.validate()?;
    println!("Configuration OK: {}", config_path.display());
    Ok(())
}
