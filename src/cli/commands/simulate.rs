//! Simulate command implementation.

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use finplan_allocation::AllocationResolver;
use finplan_config::AppConfig;
use finplan_core::InvestmentGoal;
use finplan_simulation::{
    MonteCarloSimulator, ReturnSampler, RiskMetricsComputer, SimulationConfig, SimulationRequest,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::cli::SimulateArgs;

pub fn run(args: SimulateArgs, config: AppConfig) -> Result<()> {
    let months = resolve_months(&args)?;
    let years = f64::from(months) / 12.0;

    let resolver = AllocationResolver::new(config.allocation_tables, config.horizon);
    let allocation = resolver.resolve(args.category.into(), years)?;

    let sim_config = SimulationConfig {
        trial_count: args.trials.unwrap_or(config.simulation.trial_count),
        ..config.simulation
    };
    let simulator = MonteCarloSimulator::new(
        ReturnSampler::new(config.return_assumptions),
        RiskMetricsComputer::new(config.metrics),
        sim_config,
    );

    let request = SimulationRequest {
        allocation,
        initial_investment: args.current,
        monthly_contribution: args.monthly,
        months_total: months,
        target_amount: args.target,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(months, seed = ?args.seed, "starting simulation");
    let result = simulator.run(&request, &mut rng, None)?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            println!(
                "Simulated {} months x {} trials",
                months, simulator.config().trial_count
            );
            println!(
                "  Probability of success: {:.1}%",
                result.probability_of_success * 100.0
            );
            println!("  Median outcome:  ${:>14.2}", result.median_outcome);
            println!("  10th percentile: ${:>14.2}", result.percentile_10);
            println!("  90th percentile: ${:>14.2}", result.percentile_90);
            println!(
                "  Volatility {:.3}  Max drawdown {:.1}%  Sharpe {:.2}  VaR(5%) ${:.2}",
                result.risk_metrics.volatility,
                result.risk_metrics.max_drawdown * 100.0,
                result.risk_metrics.sharpe_ratio,
                result.risk_metrics.value_at_risk_5
            );
        }
    }

    Ok(())
}

/// Months either given directly or derived from a target date.
fn resolve_months(args: &SimulateArgs) -> Result<u32> {
    if let Some(months) = args.months {
        return Ok(months);
    }
    let date_str = args
        .target_date
        .as_deref()
        .context("provide either --months or --target-date")?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("invalid target date '{}'", date_str))?;
    let target_date = Utc
        .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());

    let goal = InvestmentGoal {
        target_amount: args.target,
        target_date,
        current_amount: args.current,
        monthly_contribution: args.monthly,
    };
    goal.validate()?;
    Ok(goal.months_until(Utc::now())?)
}
