//! Simulation outputs.

use serde::{Deserialize, Serialize};

/// Cross-trial distribution of portfolio value at one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthProjection {
    /// 1-based month index.
    pub month: u32,
    pub median: f64,
    pub percentile_10: f64,
    pub percentile_90: f64,
}

/// Risk metrics derived from the full trial set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Coefficient of variation of final outcomes.
    pub volatility: f64,
    /// Worst peak-to-trough decline observed on any single trial path.
    pub max_drawdown: f64,
    /// Annualized excess return over the risk-free rate, per unit volatility.
    pub sharpe_ratio: f64,
    /// 5th-percentile final value (floor-index order statistic).
    pub value_at_risk_5: f64,
}

/// Distribution of outcomes from one Monte Carlo run.
///
/// Ephemeral: produced per call and never retained by the engine. Callers
/// own any persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of trials whose final value reached the target amount.
    pub probability_of_success: f64,
    pub median_outcome: f64,
    pub percentile_10: f64,
    pub percentile_90: f64,
    /// One projection per simulated month, in order.
    pub monthly_projections: Vec<MonthProjection>,
    pub risk_metrics: RiskMetrics,
}
