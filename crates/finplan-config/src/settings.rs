//! Configuration structures.

use finplan_allocation::{AllocationTables, HorizonConfig, RebalanceConfig};
use finplan_core::EngineResult;
use finplan_profile::ScoringConfig;
use finplan_simulation::{MetricsConfig, ReturnAssumptions, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub allocation_tables: AllocationTables,
    #[serde(default)]
    pub horizon: HorizonConfig,
    #[serde(default)]
    pub rebalance: RebalanceConfig,
    #[serde(default)]
    pub return_assumptions: ReturnAssumptions,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Cross-field validation: allocation tables must sum to 100 and
    /// return assumptions must be well-formed.
    pub fn validate(&self) -> EngineResult<()> {
        self.allocation_tables.validate()?;
        self.return_assumptions.validate()
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "finplan".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
