//! Profile command implementation.

use anyhow::{Context, Result};
use finplan_config::AppConfig;
use finplan_core::{BehavioralFactors, QuestionResponse};
use finplan_profile::RiskProfileCalculator;
use tracing::info;

use crate::cli::ProfileArgs;

pub fn run(args: ProfileArgs, config: AppConfig) -> Result<()> {
    let raw = std::fs::read_to_string(&args.responses)
        .with_context(|| format!("failed to read {}", args.responses.display()))?;
    let responses: Vec<QuestionResponse> =
        serde_json::from_str(&raw).context("failed to parse questionnaire responses")?;

    let factors = BehavioralFactors {
        age: args.age,
        emergency_fund_ratio: args.emergency_fund,
        debt_to_income_ratio: args.debt_to_income,
        investment_experience_years: args.experience,
        income_stability: args.income_stability,
        spending_volatility: args.spending_volatility,
    };

    let calculator = RiskProfileCalculator::new(config.scoring);
    let profile = calculator.calculate(&responses, &factors)?;

    info!(score = profile.overall_score, category = %profile.category, "profiled");

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&profile)?),
        _ => {
            println!("Risk profile");
            println!("  Overall score: {}/100", profile.overall_score);
            println!("  Category:      {}", profile.category);
            println!("  Confidence:    {}%", profile.confidence_score);
        }
    }

    Ok(())
}
