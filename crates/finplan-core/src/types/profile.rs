//! Risk profiling inputs and outputs.

use serde::{Deserialize, Serialize};

/// A single answered questionnaire item.
///
/// `sub_score` is the pre-mapped risk score for the selected answer (0-100);
/// `weight` is the item's share of the questionnaire score, and weights
/// across a completed questionnaire must sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub answer: String,
    pub sub_score: f64,
    pub weight: f64,
}

/// Behavioral signals drawn from the user's financial situation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralFactors {
    /// Age in years.
    pub age: u32,
    /// Months of expenses covered by liquid savings.
    pub emergency_fund_ratio: f64,
    /// Total debt payments over income (0-1+).
    pub debt_to_income_ratio: f64,
    pub investment_experience_years: f64,
    /// 0 (precarious) to 10 (very stable).
    pub income_stability: f64,
    /// 0 (steady) to 10 (erratic). Higher values reduce risk capacity.
    pub spending_volatility: f64,
}

/// Risk tolerance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Conservative,
    Moderate,
    Aggressive,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Conservative => f.write_str("conservative"),
            RiskCategory::Moderate => f.write_str("moderate"),
            RiskCategory::Aggressive => f.write_str("aggressive"),
        }
    }
}

/// Scored classification of an investor's risk tolerance.
///
/// Immutable snapshot of one completed assessment: a new assessment
/// produces a new profile rather than mutating an old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Blended questionnaire + behavioral score, always in [0, 100].
    pub overall_score: u32,
    pub category: RiskCategory,
    /// How much to trust the score, in [60, 95].
    pub confidence_score: u32,
    /// The responses this profile was derived from.
    pub responses: Vec<QuestionResponse>,
    /// The behavioral factors this profile was derived from.
    pub factors: BehavioralFactors,
}
