//! Command implementations.

pub mod allocate;
pub mod profile;
pub mod rebalance;
pub mod simulate;
pub mod validate;

use anyhow::{Context, Result};
use finplan_config::AppConfig;
use std::path::Path;

/// Load the config file when it exists, otherwise fall back to defaults.
pub(crate) fn load_config_or_default(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let config = finplan_config::load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    } else {
        Ok(AppConfig::default())
    }
}
