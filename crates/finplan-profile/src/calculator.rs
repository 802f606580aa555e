//! Risk profile calculator.

use finplan_core::{
    BehavioralFactors, EngineError, EngineResult, QuestionResponse, RiskCategory, RiskProfile,
};
use tracing::debug;

use crate::scoring::ScoringConfig;

/// Tolerance on the questionnaire weight-sum invariant.
const QUESTION_WEIGHT_TOLERANCE: f64 = 0.001;

/// Scores a completed questionnaire plus behavioral factors into a
/// [`RiskProfile`].
///
/// Pure and stateless: every call scores its inputs from scratch.
#[derive(Debug, Clone, Default)]
pub struct RiskProfileCalculator {
    config: ScoringConfig,
}

impl RiskProfileCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one completed assessment.
    pub fn calculate(
        &self,
        responses: &[QuestionResponse],
        factors: &BehavioralFactors,
    ) -> EngineResult<RiskProfile> {
        self.validate_responses(responses)?;

        let questionnaire_score: f64 = responses.iter().map(|r| r.sub_score * r.weight).sum();
        let behavioral_score = self.behavioral_score(factors);

        let blended = self.config.questionnaire_blend * questionnaire_score
            + self.config.behavioral_blend * behavioral_score;
        let overall_score = blended.round().clamp(0.0, 100.0) as u32;

        let category = self.categorize(overall_score);
        let confidence_score = self.confidence_score(responses, factors);

        debug!(
            questionnaire_score,
            behavioral_score,
            overall_score,
            %category,
            confidence_score,
            "scored risk profile"
        );

        Ok(RiskProfile {
            overall_score,
            category,
            confidence_score,
            responses: responses.to_vec(),
            factors: factors.clone(),
        })
    }

    /// Map an overall score to its category.
    ///
    /// Boundaries are inclusive on the lower category: 40 is still
    /// conservative, 70 is still moderate.
    pub fn categorize(&self, overall_score: u32) -> RiskCategory {
        if overall_score <= self.config.conservative_max_score {
            RiskCategory::Conservative
        } else if overall_score <= self.config.moderate_max_score {
            RiskCategory::Moderate
        } else {
            RiskCategory::Aggressive
        }
    }

    fn validate_responses(&self, responses: &[QuestionResponse]) -> EngineResult<()> {
        if responses.is_empty() {
            return Err(EngineError::invalid_input("questionnaire has no responses"));
        }
        for r in responses {
            if !(0.0..=100.0).contains(&r.sub_score) {
                return Err(EngineError::invalid_input(format!(
                    "sub_score {} for question '{}' outside [0, 100]",
                    r.sub_score, r.question_id
                )));
            }
            if !(0.0..=1.0).contains(&r.weight) {
                return Err(EngineError::invalid_input(format!(
                    "weight {} for question '{}' outside [0, 1]",
                    r.weight, r.question_id
                )));
            }
        }
        let weight_sum: f64 = responses.iter().map(|r| r.weight).sum();
        if (weight_sum - 1.0).abs() > QUESTION_WEIGHT_TOLERANCE {
            return Err(EngineError::invalid_input(format!(
                "question weights sum to {:.4}, expected 1",
                weight_sum
            )));
        }
        Ok(())
    }

    /// Bounded, signed adjustments around a neutral baseline, clamped to
    /// the configured floor/ceiling.
    fn behavioral_score(&self, factors: &BehavioralFactors) -> f64 {
        let cfg = &self.config;
        let mut score = cfg.behavioral_baseline;

        if factors.age <= cfg.young_age_cutoff {
            score += cfg.young_age_bonus;
        } else if factors.age > cfg.old_age_cutoff {
            score -= cfg.old_age_penalty;
        }

        if factors.emergency_fund_ratio >= cfg.emergency_fund_strong_months {
            score += cfg.emergency_fund_bonus;
        } else if factors.emergency_fund_ratio < cfg.emergency_fund_weak_months {
            score -= cfg.emergency_fund_penalty;
        }

        if factors.debt_to_income_ratio > cfg.high_debt_ratio {
            score -= cfg.high_debt_penalty;
        } else if factors.debt_to_income_ratio < cfg.low_debt_ratio {
            score += cfg.low_debt_bonus;
        }

        score +=
            (factors.income_stability - cfg.income_stability_midpoint) * cfg.income_stability_factor;

        score += (factors.investment_experience_years * cfg.experience_factor)
            .min(cfg.experience_cap);

        score -= factors.spending_volatility * cfg.spending_volatility_factor;

        score.clamp(cfg.behavioral_floor, cfg.behavioral_ceiling)
    }

    /// Confidence in the score: starts at the baseline, drops with
    /// inconsistent answers and thin behavioral data, rises with very
    /// consistent answers and long experience.
    fn confidence_score(
        &self,
        responses: &[QuestionResponse],
        factors: &BehavioralFactors,
    ) -> u32 {
        let cfg = &self.config;
        let mut confidence = cfg.confidence_baseline;

        let stddev = sub_score_stddev(responses);
        if stddev > cfg.high_variance_stddev {
            confidence -= cfg.high_variance_penalty;
        } else if stddev > cfg.moderate_variance_stddev {
            confidence -= cfg.moderate_variance_penalty;
        } else if stddev < cfg.consistency_stddev {
            confidence += cfg.consistency_bonus;
        }

        if factors.age < cfg.thin_data_age {
            confidence -= cfg.thin_data_penalty;
        }
        if factors.investment_experience_years < cfg.thin_data_experience_years {
            confidence -= cfg.thin_data_penalty;
        } else if factors.investment_experience_years >= cfg.seasoned_experience_years {
            confidence += cfg.seasoned_experience_bonus;
        }
        if factors.debt_to_income_ratio > cfg.thin_data_debt_ratio {
            confidence -= cfg.thin_data_penalty;
        }
        if factors.emergency_fund_ratio < cfg.thin_data_emergency_months {
            confidence -= cfg.thin_data_penalty;
        }

        confidence
            .clamp(cfg.confidence_floor, cfg.confidence_ceiling)
            .round() as u32
    }
}

/// Population standard deviation of the response sub-scores.
fn sub_score_stddev(responses: &[QuestionResponse]) -> f64 {
    let n = responses.len() as f64;
    let mean: f64 = responses.iter().map(|r| r.sub_score).sum::<f64>() / n;
    let variance: f64 = responses
        .iter()
        .map(|r| (r.sub_score - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str, sub_score: f64, weight: f64) -> QuestionResponse {
        QuestionResponse {
            question_id: id.to_string(),
            answer: format!("answer-{}", id),
            sub_score,
            weight,
        }
    }

    /// Factors chosen so every behavioral adjustment is zero.
    fn neutral_factors() -> BehavioralFactors {
        BehavioralFactors {
            age: 40,
            emergency_fund_ratio: 4.0,
            debt_to_income_ratio: 0.3,
            investment_experience_years: 0.0,
            income_stability: 5.0,
            spending_volatility: 0.0,
        }
    }

    #[test]
    fn test_empty_responses_rejected() {
        let calc = RiskProfileCalculator::default();
        let err = calc.calculate(&[], &neutral_factors()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let calc = RiskProfileCalculator::default();
        let responses = vec![response("q1", 50.0, 0.5), response("q2", 50.0, 0.3)];
        let err = calc.calculate(&responses, &neutral_factors()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_sub_score_out_of_range_rejected() {
        let calc = RiskProfileCalculator::default();
        let responses = vec![response("q1", 120.0, 1.0)];
        assert!(calc.calculate(&responses, &neutral_factors()).is_err());
    }

    #[test]
    fn test_neutral_behavioral_score_tracks_questionnaire() {
        let calc = RiskProfileCalculator::default();
        // Neutral behavioral score is exactly 50, so overall = 0.7q + 15.
        let responses = vec![response("q1", 50.0, 0.6), response("q2", 50.0, 0.4)];
        let profile = calc.calculate(&responses, &neutral_factors()).unwrap();
        assert_eq!(profile.overall_score, 50);
        assert_eq!(profile.category, RiskCategory::Moderate);
    }

    #[test]
    fn test_category_boundaries_inclusive_on_lower_side() {
        let calc = RiskProfileCalculator::default();
        assert_eq!(calc.categorize(40), RiskCategory::Conservative);
        assert_eq!(calc.categorize(41), RiskCategory::Moderate);
        assert_eq!(calc.categorize(70), RiskCategory::Moderate);
        assert_eq!(calc.categorize(71), RiskCategory::Aggressive);
    }

    #[test]
    fn test_overall_score_within_bounds() {
        let calc = RiskProfileCalculator::default();
        let risky = BehavioralFactors {
            age: 25,
            emergency_fund_ratio: 12.0,
            debt_to_income_ratio: 0.05,
            investment_experience_years: 20.0,
            income_stability: 10.0,
            spending_volatility: 0.0,
        };
        let cautious = BehavioralFactors {
            age: 70,
            emergency_fund_ratio: 0.0,
            debt_to_income_ratio: 0.9,
            investment_experience_years: 0.0,
            income_stability: 0.0,
            spending_volatility: 10.0,
        };
        for (factors, subs) in [(risky, 100.0), (cautious, 0.0)] {
            let profile = calc
                .calculate(&[response("q1", subs, 1.0)], &factors)
                .unwrap();
            assert!(profile.overall_score <= 100);
        }
    }

    #[test]
    fn test_behavioral_adjustments_move_score() {
        let calc = RiskProfileCalculator::default();
        let responses = vec![response("q1", 50.0, 1.0)];

        let young = BehavioralFactors {
            age: 25,
            ..neutral_factors()
        };
        let old = BehavioralFactors {
            age: 70,
            ..neutral_factors()
        };
        let young_profile = calc.calculate(&responses, &young).unwrap();
        let old_profile = calc.calculate(&responses, &old).unwrap();
        assert!(young_profile.overall_score > old_profile.overall_score);
    }

    #[test]
    fn test_confidence_bounds() {
        let calc = RiskProfileCalculator::default();

        // Inconsistent answers and thin data push confidence to the floor.
        let thin = BehavioralFactors {
            age: 19,
            emergency_fund_ratio: 0.0,
            debt_to_income_ratio: 0.8,
            investment_experience_years: 0.0,
            income_stability: 5.0,
            spending_volatility: 5.0,
        };
        let scattered = vec![
            response("q1", 0.0, 0.25),
            response("q2", 100.0, 0.25),
            response("q3", 0.0, 0.25),
            response("q4", 100.0, 0.25),
        ];
        let profile = calc.calculate(&scattered, &thin).unwrap();
        assert_eq!(profile.confidence_score, 60);

        // Consistent answers plus long experience reach the ceiling.
        let seasoned = BehavioralFactors {
            investment_experience_years: 15.0,
            ..neutral_factors()
        };
        let consistent = vec![response("q1", 60.0, 0.5), response("q2", 60.0, 0.5)];
        let profile = calc.calculate(&consistent, &seasoned).unwrap();
        assert_eq!(profile.confidence_score, 95);
    }

    #[test]
    fn test_profile_snapshot_retains_inputs() {
        let calc = RiskProfileCalculator::default();
        let responses = vec![response("q1", 80.0, 1.0)];
        let profile = calc.calculate(&responses, &neutral_factors()).unwrap();
        assert_eq!(profile.responses.len(), 1);
        assert_eq!(profile.responses[0].question_id, "q1");
        assert_eq!(profile.factors.age, 40);
    }
}
