//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `FINPLAN__` prefix with `__` separators,
/// e.g. `FINPLAN__SIMULATION__TRIAL_COUNT=5000`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("FINPLAN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
