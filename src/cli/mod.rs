//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use finplan_core::RiskCategory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finplan")]
#[command(author, version, about = "Investment risk profiling and portfolio simulation")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level override; defaults to the configured level
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Risk category as a CLI value.
#[derive(Clone, Copy, ValueEnum)]
pub enum Category {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<Category> for RiskCategory {
    fn from(value: Category) -> Self {
        match value {
            Category::Conservative => RiskCategory::Conservative,
            Category::Moderate => RiskCategory::Moderate,
            Category::Aggressive => RiskCategory::Aggressive,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a risk profile from questionnaire answers and behavioral factors
    Profile(ProfileArgs),
    /// Resolve a target allocation for a category and horizon
    Allocate(AllocateArgs),
    /// Run a Monte Carlo goal simulation
    Simulate(SimulateArgs),
    /// Check an actual allocation against a target for drift
    Rebalance(RebalanceArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ProfileArgs {
    /// JSON file with questionnaire responses
    #[arg(short, long)]
    pub responses: PathBuf,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Months of expenses covered by emergency fund
    #[arg(long, default_value = "3")]
    pub emergency_fund: f64,

    /// Debt-to-income ratio
    #[arg(long, default_value = "0.3")]
    pub debt_to_income: f64,

    /// Years of investment experience
    #[arg(long, default_value = "0")]
    pub experience: f64,

    /// Income stability, 0-10
    #[arg(long, default_value = "5")]
    pub income_stability: f64,

    /// Spending volatility, 0-10
    #[arg(long, default_value = "0")]
    pub spending_volatility: f64,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct AllocateArgs {
    /// Risk category
    #[arg(short = 'C', long)]
    pub category: Category,

    /// Years to the goal
    #[arg(short, long)]
    pub years: f64,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Risk category used to resolve the allocation
    #[arg(short = 'C', long)]
    pub category: Category,

    /// Target amount
    #[arg(short, long)]
    pub target: f64,

    /// Target date (YYYY-MM-DD); mutually exclusive with --months
    #[arg(long, conflicts_with = "months")]
    pub target_date: Option<String>,

    /// Months to simulate
    #[arg(long)]
    pub months: Option<u32>,

    /// Current invested amount
    #[arg(long, default_value = "0")]
    pub current: f64,

    /// Monthly contribution
    #[arg(long, default_value = "0")]
    pub monthly: f64,

    /// RNG seed; omit for a non-reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override configured trial count
    #[arg(long)]
    pub trials: Option<usize>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct RebalanceArgs {
    /// Current weights: six comma-separated percentages
    /// (domestic,international,bonds,real_estate,commodities,cash)
    #[arg(long, value_delimiter = ',')]
    pub current: Vec<f64>,

    /// Risk category used to resolve the target allocation
    #[arg(short = 'C', long)]
    pub category: Category,

    /// Years to the goal
    #[arg(short, long)]
    pub years: f64,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
