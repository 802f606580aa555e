//! Investment planning CLI application.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use finplan_config::AppConfig;
use logging::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // validate-config does its own strict load and reports the outcome.
    let config = match cli.command {
        Commands::ValidateConfig => AppConfig::default(),
        _ => cli::commands::load_config_or_default(&cli.config)?,
    };

    let mut log_config = config.logging.clone();
    if let Some(level) = &cli.log_level {
        log_config.level = level.as_str().to_string();
    }
    if cli.json_logs {
        log_config.format = "json".to_string();
    }
    setup_logging(&log_config)?;

    match cli.command {
        Commands::Profile(args) => cli::commands::profile::run(args, config),
        Commands::Allocate(args) => cli::commands::allocate::run(args, config),
        Commands::Simulate(args) => cli::commands::simulate::run(args, config),
        Commands::Rebalance(args) => cli::commands::rebalance::run(args, config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
