//! Monte Carlo trajectory engine.

use finplan_core::{
    AllocationMix, EngineError, EngineResult, MonthProjection, SimulationResult,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::metrics::RiskMetricsComputer;
use crate::percentile::percentile;
use crate::sampler::ReturnSampler;

/// Simulation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent trials.
    pub trial_count: usize,
    /// Log progress every this many trials; 0 disables progress logging.
    pub progress_log_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: 1000,
            progress_log_interval: 250,
        }
    }
}

/// One simulation call's inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Target allocation the portfolio is assumed to hold throughout.
    pub allocation: AllocationMix,
    /// Starting portfolio value. Must be non-negative.
    pub initial_investment: f64,
    /// Contribution added at the start of each month. Must be non-negative.
    pub monthly_contribution: f64,
    /// Number of months to simulate. Must be at least 1.
    pub months_total: u32,
    /// Final value at or above which a trial counts as a success.
    pub target_amount: f64,
}

impl SimulationRequest {
    fn validate(&self) -> EngineResult<()> {
        self.allocation.validate()?;
        if self.initial_investment < 0.0 || !self.initial_investment.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "initial_investment must be non-negative, got {}",
                self.initial_investment
            )));
        }
        if self.monthly_contribution < 0.0 || !self.monthly_contribution.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "monthly_contribution must be non-negative, got {}",
                self.monthly_contribution
            )));
        }
        if self.months_total == 0 {
            return Err(EngineError::invalid_input(
                "months_total must be at least 1",
            ));
        }
        if self.target_amount <= 0.0 || !self.target_amount.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "target_amount must be positive, got {}",
                self.target_amount
            )));
        }
        Ok(())
    }
}

/// Runs independent contribution-and-compounding trials and aggregates
/// the outcome distribution.
///
/// Trials are statistically independent; with a fixed seed and fixed
/// inputs, repeated runs produce bit-identical results.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloSimulator {
    sampler: ReturnSampler,
    metrics: RiskMetricsComputer,
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    pub fn new(
        sampler: ReturnSampler,
        metrics: RiskMetricsComputer,
        config: SimulationConfig,
    ) -> Self {
        Self {
            sampler,
            metrics,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the full simulation.
    ///
    /// The caller supplies the RNG (seeded for reproducibility) and may
    /// supply a [`CancelToken`]; a cancelled run fails with `Cancelled`
    /// rather than returning partial output.
    pub fn run<R: Rng>(
        &self,
        request: &SimulationRequest,
        rng: &mut R,
        cancel: Option<&CancelToken>,
    ) -> EngineResult<SimulationResult> {
        request.validate()?;
        self.sampler.assumptions().validate()?;
        if self.config.trial_count < 1 {
            return Err(EngineError::invalid_input("trial_count must be at least 1"));
        }

        let trials = self.config.trial_count;
        let months = request.months_total as usize;

        info!(
            trials,
            months,
            target_amount = request.target_amount,
            "running Monte Carlo simulation"
        );

        let mut trajectories: Vec<Vec<f64>> = Vec::with_capacity(trials);
        for trial in 0..trials {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(EngineError::Cancelled(format!(
                        "simulation cancelled after {} of {} trials",
                        trial, trials
                    )));
                }
            }

            trajectories.push(self.run_trial(request, months, rng));

            if self.config.progress_log_interval > 0
                && (trial + 1) % self.config.progress_log_interval == 0
            {
                debug!(completed = trial + 1, trials, "simulation progress");
            }
        }

        self.aggregate(request, &trajectories)
    }

    /// One trial: contribute, then compound by the blended monthly return.
    fn run_trial<R: Rng>(
        &self,
        request: &SimulationRequest,
        months: usize,
        rng: &mut R,
    ) -> Vec<f64> {
        let mut trajectory = Vec::with_capacity(months);
        let mut value = request.initial_investment;

        for _ in 0..months {
            value += request.monthly_contribution;

            // Independent draw per asset class, blended by weight.
            let mut blended_return = 0.0;
            for (class, weight) in request.allocation.weights() {
                blended_return +=
                    weight / 100.0 * self.sampler.sample_monthly_return(class, rng);
            }

            value *= 1.0 + blended_return;
            trajectory.push(value);
        }

        trajectory
    }

    /// Sort-and-floor-index aggregation over the complete trial set. The
    /// same rule serves the final-value distribution and every month's
    /// cross-trial distribution, so results do not depend on trial order.
    fn aggregate(
        &self,
        request: &SimulationRequest,
        trajectories: &[Vec<f64>],
    ) -> EngineResult<SimulationResult> {
        let trials = trajectories.len();
        let months = request.months_total as usize;

        let mut final_values: Vec<f64> =
            trajectories.iter().map(|t| t[months - 1]).collect();
        let successes = final_values
            .iter()
            .filter(|&&v| v >= request.target_amount)
            .count();
        let probability_of_success = successes as f64 / trials as f64;

        final_values.sort_by(f64::total_cmp);
        let median_outcome = percentile(&final_values, 0.5);
        let percentile_10 = percentile(&final_values, 0.1);
        let percentile_90 = percentile(&final_values, 0.9);

        let mut monthly_projections = Vec::with_capacity(months);
        let mut column = vec![0.0f64; trials];
        for month in 0..months {
            for (i, trajectory) in trajectories.iter().enumerate() {
                column[i] = trajectory[month];
            }
            column.sort_by(f64::total_cmp);
            monthly_projections.push(MonthProjection {
                month: month as u32 + 1,
                median: percentile(&column, 0.5),
                percentile_10: percentile(&column, 0.1),
                percentile_90: percentile(&column, 0.9),
            });
        }

        let total_invested = request.initial_investment
            + request.monthly_contribution * months as f64;
        let risk_metrics =
            self.metrics
                .compute(trajectories, total_invested, request.months_total)?;

        info!(
            probability_of_success,
            median_outcome, "Monte Carlo simulation complete"
        );

        Ok(SimulationResult {
            probability_of_success,
            median_outcome,
            percentile_10,
            percentile_90,
            monthly_projections,
            risk_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn moderate_mix() -> AllocationMix {
        AllocationMix::new([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]).unwrap()
    }

    fn request(months_total: u32, monthly_contribution: f64) -> SimulationRequest {
        SimulationRequest {
            allocation: moderate_mix(),
            initial_investment: 50_000.0,
            monthly_contribution,
            months_total,
            target_amount: 1_000_000.0,
        }
    }

    fn simulator(trial_count: usize) -> MonteCarloSimulator {
        MonteCarloSimulator::new(
            ReturnSampler::default(),
            RiskMetricsComputer::default(),
            SimulationConfig {
                trial_count,
                progress_log_interval: 0,
            },
        )
    }

    #[test]
    fn test_fixed_seed_is_bit_identical() {
        let sim = simulator(50);
        let req = request(24, 1_000.0);

        let a = sim
            .run(&req, &mut StdRng::seed_from_u64(42), None)
            .unwrap();
        let b = sim
            .run(&req, &mut StdRng::seed_from_u64(42), None)
            .unwrap();

        // Serialized form captures every f64 bit-exactly.
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_degenerate_single_trial_single_month() {
        let sim = simulator(1);
        let req = request(1, 1_000.0);
        let result = sim
            .run(&req, &mut StdRng::seed_from_u64(7), None)
            .unwrap();

        assert_eq!(result.monthly_projections.len(), 1);
        assert_eq!(result.percentile_10, result.median_outcome);
        assert_eq!(result.percentile_90, result.median_outcome);
        assert!(result.probability_of_success == 0.0 || result.probability_of_success == 1.0);
    }

    #[test]
    fn test_percentile_ordering() {
        let sim = simulator(200);
        let req = request(36, 1_000.0);
        let result = sim
            .run(&req, &mut StdRng::seed_from_u64(9), None)
            .unwrap();

        assert!(result.percentile_10 <= result.median_outcome);
        assert!(result.median_outcome <= result.percentile_90);
        for projection in &result.monthly_projections {
            assert!(projection.percentile_10 <= projection.median);
            assert!(projection.median <= projection.percentile_90);
        }
    }

    #[test]
    fn test_success_probability_monotone_in_contribution() {
        let sim = simulator(100);
        let mut last = -1.0;
        for contribution in [0.0, 500.0, 1_000.0, 5_000.0] {
            let mut req = request(120, contribution);
            req.target_amount = 250_000.0;
            // Same seed: identical return draws, only contributions differ.
            let result = sim
                .run(&req, &mut StdRng::seed_from_u64(42), None)
                .unwrap();
            assert!(result.probability_of_success >= last);
            last = result.probability_of_success;
        }
    }

    #[test]
    fn test_zero_contribution_zero_initial_stays_at_zero() {
        let sim = simulator(10);
        let mut req = request(12, 0.0);
        req.initial_investment = 0.0;
        let result = sim
            .run(&req, &mut StdRng::seed_from_u64(3), None)
            .unwrap();
        assert_eq!(result.median_outcome, 0.0);
        assert_eq!(result.probability_of_success, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let sim = simulator(10);
        let mut rng = StdRng::seed_from_u64(1);

        let mut req = request(0, 1_000.0);
        assert!(matches!(
            sim.run(&req, &mut rng, None),
            Err(EngineError::InvalidInput(_))
        ));

        req = request(12, -1.0);
        assert!(sim.run(&req, &mut rng, None).is_err());

        req = request(12, 1_000.0);
        req.target_amount = 0.0;
        assert!(sim.run(&req, &mut rng, None).is_err());

        req = request(12, 1_000.0);
        req.initial_investment = -5.0;
        assert!(sim.run(&req, &mut rng, None).is_err());

        let empty = simulator(0);
        assert!(empty
            .run(&request(12, 1_000.0), &mut rng, None)
            .is_err());
    }

    #[test]
    fn test_cancelled_run_reports_cancellation() {
        let sim = simulator(100);
        let token = CancelToken::new();
        token.cancel();

        let err = sim
            .run(
                &request(12, 1_000.0),
                &mut StdRng::seed_from_u64(1),
                Some(&token),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Cancelled(_)));
    }

    /// The frozen 30-year retirement scenario: $1M target, $50k start,
    /// $1k/month over 360 months at the moderate mix, 1000 trials.
    ///
    /// Seed and return assumptions are frozen, so the outcome is a pinned
    /// regression value: any change to the sampler, the draw order, or the
    /// aggregation rule shows up as a changed probability.
    #[test]
    fn test_thirty_year_scenario_regression() {
        let sim = simulator(1000);
        let req = request(360, 1_000.0);

        let a = sim
            .run(&req, &mut StdRng::seed_from_u64(20240101), None)
            .unwrap();
        let b = sim
            .run(&req, &mut StdRng::seed_from_u64(20240101), None)
            .unwrap();

        assert_eq!(a.probability_of_success, b.probability_of_success);
        assert_eq!(
            a.median_outcome.to_bits(),
            b.median_outcome.to_bits()
        );

        assert_eq!(a.probability_of_success, 0.972);
        assert!((a.median_outcome - 2_167_385.53).abs() < 0.01);

        assert_eq!(a.monthly_projections.len(), 360);
        assert!(a.risk_metrics.volatility > 0.0);
        assert!(a.risk_metrics.max_drawdown > 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_percentiles_ordered_for_any_seed(
            seed in any::<u64>(),
            trials in 1usize..40,
            months in 1u32..18,
        ) {
            let sim = simulator(trials);
            let req = request(months, 500.0);
            let result = sim
                .run(&req, &mut StdRng::seed_from_u64(seed), None)
                .unwrap();

            prop_assert!(result.percentile_10 <= result.median_outcome);
            prop_assert!(result.median_outcome <= result.percentile_90);
            prop_assert!((0.0..=1.0).contains(&result.probability_of_success));
        }
    }
}
