//! Rebalancing alert generation.

use finplan_core::{
    AlertUrgency, AllocationDrift, AllocationMix, EngineResult, RebalancingAlert,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds for drift detection, in percentage points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalanceConfig {
    /// Deviation above which an alert fires. The boundary is exclusive:
    /// a deviation exactly at the threshold is still in band.
    pub deviation_threshold: f64,
    /// Deviation above which urgency is medium.
    pub medium_urgency_threshold: f64,
    /// Deviation above which urgency is high.
    pub high_urgency_threshold: f64,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: 5.0,
            medium_urgency_threshold: 7.0,
            high_urgency_threshold: 10.0,
        }
    }
}

/// Compares an actual allocation against a target and emits one alert per
/// asset class that has drifted out of band.
#[derive(Debug, Clone, Default)]
pub struct RebalancingAlertGenerator {
    config: RebalanceConfig,
}

impl RebalancingAlertGenerator {
    pub fn new(config: RebalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RebalanceConfig {
        &self.config
    }

    /// Emit alerts for every class whose deviation strictly exceeds the
    /// threshold, sorted by deviation descending.
    pub fn check(
        &self,
        current: &AllocationMix,
        target: &AllocationMix,
    ) -> EngineResult<Vec<RebalancingAlert>> {
        current.validate()?;
        target.validate()?;

        let mut alerts = Vec::new();
        for (class, current_weight) in current.weights() {
            let target_weight = target.weight(class);
            let deviation = (current_weight - target_weight).abs();
            if deviation <= self.config.deviation_threshold {
                continue;
            }

            let urgency = if deviation > self.config.high_urgency_threshold {
                AlertUrgency::High
            } else if deviation > self.config.medium_urgency_threshold {
                AlertUrgency::Medium
            } else {
                AlertUrgency::Low
            };

            let direction = if current_weight > target_weight {
                AllocationDrift::Overweight
            } else {
                AllocationDrift::Underweight
            };

            let suggested_action = match direction {
                AllocationDrift::Overweight => format!(
                    "Reduce {} by {:.1} percentage points ({:.1}% -> {:.1}%)",
                    class, deviation, current_weight, target_weight
                ),
                AllocationDrift::Underweight => format!(
                    "Increase {} by {:.1} percentage points ({:.1}% -> {:.1}%)",
                    class, deviation, current_weight, target_weight
                ),
            };

            alerts.push(RebalancingAlert {
                asset_class: class,
                current_weight,
                target_weight,
                deviation,
                urgency,
                direction,
                suggested_action,
            });
        }

        alerts.sort_by(|a, b| b.deviation.total_cmp(&a.deviation));

        debug!(alert_count = alerts.len(), "checked allocation drift");
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finplan_core::AssetClass;

    fn mix(weights: [f64; 6]) -> AllocationMix {
        AllocationMix::new(weights).unwrap()
    }

    #[test]
    fn test_no_alerts_when_on_target() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);
        let alerts = gen.check(&target, &target).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);

        // Exactly 5 points of drift on stocks_domestic vs bonds: in band.
        let at_threshold = mix([65.0, 20.0, 10.0, 3.0, 1.0, 1.0]);
        assert!(gen.check(&at_threshold, &target).unwrap().is_empty());

        // Just past the threshold: both classes alert.
        let past_threshold = mix([65.01, 20.0, 9.99, 3.0, 1.0, 1.0]);
        let alerts = gen.check(&past_threshold, &target).unwrap();
        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn test_urgency_tiers() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);

        // stocks_domestic drifts +6 (low), bonds -8 (medium), cash +13 (high),
        // international absorbs -11 (high).
        let current = mix([66.0, 9.0, 7.0, 3.0, 1.0, 14.0]);
        let alerts = gen.check(&current, &target).unwrap();
        assert_eq!(alerts.len(), 4);

        let by_class = |class: AssetClass| {
            alerts
                .iter()
                .find(|a| a.asset_class == class)
                .unwrap()
        };
        assert_eq!(by_class(AssetClass::StocksDomestic).urgency, AlertUrgency::Low);
        assert_eq!(by_class(AssetClass::Bonds).urgency, AlertUrgency::Medium);
        assert_eq!(by_class(AssetClass::Cash).urgency, AlertUrgency::High);
        assert_eq!(
            by_class(AssetClass::StocksInternational).urgency,
            AlertUrgency::High
        );
    }

    #[test]
    fn test_direction_and_action_text() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);
        let current = mix([70.0, 10.0, 15.0, 3.0, 1.0, 1.0]);
        let alerts = gen.check(&current, &target).unwrap();

        let dom = alerts
            .iter()
            .find(|a| a.asset_class == AssetClass::StocksDomestic)
            .unwrap();
        assert_eq!(dom.direction, AllocationDrift::Overweight);
        assert!(dom.suggested_action.starts_with("Reduce"));

        let intl = alerts
            .iter()
            .find(|a| a.asset_class == AssetClass::StocksInternational)
            .unwrap();
        assert_eq!(intl.direction, AllocationDrift::Underweight);
        assert!(intl.suggested_action.starts_with("Increase"));
    }

    #[test]
    fn test_alerts_sorted_by_deviation_descending() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);
        let current = mix([66.0, 9.0, 7.0, 3.0, 1.0, 14.0]);
        let alerts = gen.check(&current, &target).unwrap();

        for pair in alerts.windows(2) {
            assert!(pair[0].deviation >= pair[1].deviation);
        }
        assert_eq!(alerts[0].asset_class, AssetClass::Cash);
    }

    #[test]
    fn test_invalid_mix_rejected() {
        let gen = RebalancingAlertGenerator::default();
        let target = mix([60.0, 20.0, 15.0, 3.0, 1.0, 1.0]);
        let bad = AllocationMix {
            stocks_domestic: 60.0,
            stocks_international: 20.0,
            bonds: 15.0,
            real_estate: 3.0,
            commodities: 1.0,
            cash: 5.0,
        };
        assert!(gen.check(&bad, &target).is_err());
    }
}
