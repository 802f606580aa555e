//! Risk metrics derived from trial trajectories.

use finplan_core::{EngineError, EngineResult, RiskMetrics};
use serde::{Deserialize, Serialize};

use crate::percentile::percentile;

/// Metrics configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Annualized risk-free rate used for the Sharpe ratio.
    pub risk_free_rate: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.03,
        }
    }
}

/// Derives volatility, drawdown, Sharpe ratio, and Value-at-Risk from a
/// complete set of trial trajectories.
///
/// Any ratio whose denominator is zero is returned as a zero sentinel
/// instead of NaN or infinity.
#[derive(Debug, Clone, Default)]
pub struct RiskMetricsComputer {
    config: MetricsConfig,
}

impl RiskMetricsComputer {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute metrics over all trials.
    ///
    /// `total_invested` is initial investment plus the sum of all monthly
    /// contributions; `months_total` is the trajectory length.
    pub fn compute(
        &self,
        trajectories: &[Vec<f64>],
        total_invested: f64,
        months_total: u32,
    ) -> EngineResult<RiskMetrics> {
        if trajectories.is_empty() {
            return Err(EngineError::invalid_input(
                "cannot compute risk metrics over zero trials",
            ));
        }
        if trajectories.iter().any(|t| t.is_empty()) {
            return Err(EngineError::invalid_input(
                "cannot compute risk metrics over an empty trajectory",
            ));
        }

        let final_values: Vec<f64> = trajectories.iter().map(|t| t[t.len() - 1]).collect();
        let n = final_values.len() as f64;
        let mean = final_values.iter().sum::<f64>() / n;
        let variance = final_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        // Coefficient of variation; zero-mean outcomes yield the sentinel.
        let volatility = if mean != 0.0 { std_dev / mean } else { 0.0 };

        let max_drawdown = worst_trial_drawdown(trajectories);

        let mut sorted = final_values;
        sorted.sort_by(f64::total_cmp);
        let value_at_risk_5 = percentile(&sorted, 0.05);

        let sharpe_ratio = self.sharpe_ratio(mean, volatility, total_invested, months_total);

        Ok(RiskMetrics {
            volatility,
            max_drawdown,
            sharpe_ratio,
            value_at_risk_5,
        })
    }

    /// Excess annualized return over the risk-free rate, per unit
    /// volatility. The annualized return is implied by the mean final
    /// value against total invested capital.
    fn sharpe_ratio(
        &self,
        mean_final: f64,
        volatility: f64,
        total_invested: f64,
        months_total: u32,
    ) -> f64 {
        if total_invested <= 0.0 || months_total == 0 || volatility == 0.0 {
            return 0.0;
        }
        let growth = mean_final / total_invested;
        if growth <= 0.0 {
            return 0.0;
        }
        let annualized_return = growth.powf(12.0 / f64::from(months_total)) - 1.0;
        (annualized_return - self.config.risk_free_rate) / volatility
    }
}

/// Worst peak-to-trough decline over any single trial's trajectory.
///
/// Each trial tracks its own running peak; the reported figure is the
/// maximum across all trials, i.e. the worst observed path rather than an
/// average-case drawdown.
fn worst_trial_drawdown(trajectories: &[Vec<f64>]) -> f64 {
    let mut worst: f64 = 0.0;
    for trajectory in trajectories {
        let mut peak = f64::MIN;
        for &value in trajectory {
            if value > peak {
                peak = value;
            }
            if peak > 0.0 {
                let drawdown = (peak - value) / peak;
                if drawdown > worst {
                    worst = drawdown;
                }
            }
        }
    }
    worst
}
