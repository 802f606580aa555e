//! Scoring constants.

use serde::{Deserialize, Serialize};

/// Tunable constants for risk scoring.
///
/// Every behavioral adjustment and boundary lives here rather than as a
/// scattered literal, so boundary values can be unit tested and tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Share of the overall score taken from the questionnaire.
    pub questionnaire_blend: f64,
    /// Share of the overall score taken from behavioral factors.
    pub behavioral_blend: f64,

    /// Neutral starting point for the behavioral score.
    pub behavioral_baseline: f64,
    pub behavioral_floor: f64,
    pub behavioral_ceiling: f64,

    /// Age at or below which the age bonus applies.
    pub young_age_cutoff: u32,
    pub young_age_bonus: f64,
    /// Age above which the age penalty applies.
    pub old_age_cutoff: u32,
    pub old_age_penalty: f64,

    /// Months of emergency fund at or above which the bonus applies.
    pub emergency_fund_strong_months: f64,
    pub emergency_fund_bonus: f64,
    /// Months of emergency fund below which the penalty applies.
    pub emergency_fund_weak_months: f64,
    pub emergency_fund_penalty: f64,

    /// Debt-to-income above which the penalty applies.
    pub high_debt_ratio: f64,
    pub high_debt_penalty: f64,
    /// Debt-to-income below which the bonus applies.
    pub low_debt_ratio: f64,
    pub low_debt_bonus: f64,

    /// Midpoint of the 0-10 income stability scale.
    pub income_stability_midpoint: f64,
    /// Points per stability unit above/below the midpoint.
    pub income_stability_factor: f64,

    /// Points per year of investment experience.
    pub experience_factor: f64,
    /// Cap on the total experience bonus.
    pub experience_cap: f64,

    /// Points subtracted per spending volatility unit.
    pub spending_volatility_factor: f64,

    /// Highest overall score still classified conservative.
    pub conservative_max_score: u32,
    /// Highest overall score still classified moderate.
    pub moderate_max_score: u32,

    pub confidence_baseline: f64,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    /// Sub-score standard deviation above which answers look inconsistent.
    pub high_variance_stddev: f64,
    pub high_variance_penalty: f64,
    pub moderate_variance_stddev: f64,
    pub moderate_variance_penalty: f64,
    /// Sub-score standard deviation below which answers look consistent.
    pub consistency_stddev: f64,
    pub consistency_bonus: f64,
    /// Age below which behavioral data is considered thin.
    pub thin_data_age: u32,
    /// Experience years below which behavioral data is considered thin.
    pub thin_data_experience_years: f64,
    /// Experience years at or above which the confidence bonus applies.
    pub seasoned_experience_years: f64,
    pub seasoned_experience_bonus: f64,
    /// Debt-to-income above which the confidence penalty applies.
    pub thin_data_debt_ratio: f64,
    /// Emergency fund months below which the confidence penalty applies.
    pub thin_data_emergency_months: f64,
    /// Penalty per thin-data signal.
    pub thin_data_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            questionnaire_blend: 0.7,
            behavioral_blend: 0.3,

            behavioral_baseline: 50.0,
            behavioral_floor: 10.0,
            behavioral_ceiling: 90.0,

            young_age_cutoff: 35,
            young_age_bonus: 10.0,
            old_age_cutoff: 60,
            old_age_penalty: 10.0,

            emergency_fund_strong_months: 6.0,
            emergency_fund_bonus: 8.0,
            emergency_fund_weak_months: 3.0,
            emergency_fund_penalty: 8.0,

            high_debt_ratio: 0.4,
            high_debt_penalty: 10.0,
            low_debt_ratio: 0.2,
            low_debt_bonus: 5.0,

            income_stability_midpoint: 5.0,
            income_stability_factor: 1.5,

            experience_factor: 0.8,
            experience_cap: 8.0,

            spending_volatility_factor: 0.8,

            conservative_max_score: 40,
            moderate_max_score: 70,

            confidence_baseline: 85.0,
            confidence_floor: 60.0,
            confidence_ceiling: 95.0,
            high_variance_stddev: 25.0,
            high_variance_penalty: 10.0,
            moderate_variance_stddev: 15.0,
            moderate_variance_penalty: 5.0,
            consistency_stddev: 5.0,
            consistency_bonus: 5.0,
            thin_data_age: 21,
            thin_data_experience_years: 1.0,
            seasoned_experience_years: 10.0,
            seasoned_experience_bonus: 5.0,
            thin_data_debt_ratio: 0.6,
            thin_data_emergency_months: 0.5,
            thin_data_penalty: 5.0,
        }
    }
}
