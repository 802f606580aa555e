//! Rebalance command implementation.

use anyhow::Result;
use finplan_allocation::{AllocationResolver, RebalancingAlertGenerator};
use finplan_config::AppConfig;
use finplan_core::AllocationMix;

use crate::cli::RebalanceArgs;

pub fn run(args: RebalanceArgs, config: AppConfig) -> Result<()> {
    if args.current.len() != 6 {
        anyhow::bail!(
            "expected six comma-separated weights, got {}",
            args.current.len()
        );
    }
    let mut weights = [0.0f64; 6];
    weights.copy_from_slice(&args.current);
    let current = AllocationMix::new(weights)?;

    let resolver = AllocationResolver::new(config.allocation_tables, config.horizon);
    let target = resolver.resolve(args.category.into(), args.years)?;

    let generator = RebalancingAlertGenerator::new(config.rebalance);
    let alerts = generator.check(&current, &target)?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&alerts)?),
        _ => {
            if alerts.is_empty() {
                println!("Allocation is within tolerance; no rebalancing needed.");
            } else {
                println!("{} class(es) out of band:", alerts.len());
                for alert in &alerts {
                    println!(
                        "  [{:?}] {} drifted {:.1} points ({:?}): {}",
                        alert.urgency,
                        alert.asset_class,
                        alert.deviation,
                        alert.direction,
                        alert.suggested_action
                    );
                }
            }
        }
    }

    Ok(())
}
