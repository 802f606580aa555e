//! Allocate command implementation.

use anyhow::Result;
use finplan_allocation::AllocationResolver;
use finplan_config::AppConfig;

use crate::cli::AllocateArgs;

pub fn run(args: AllocateArgs, config: AppConfig) -> Result<()> {
    let resolver = AllocationResolver::new(config.allocation_tables, config.horizon);
    let mix = resolver.resolve(args.category.into(), args.years)?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&mix)?),
        _ => {
            println!("Target allocation ({:.1} years to goal)", args.years);
            for (class, weight) in mix.weights() {
                println!("  {:<22} {:>5.1}%", class.to_string(), weight);
            }
        }
    }

    Ok(())
}
