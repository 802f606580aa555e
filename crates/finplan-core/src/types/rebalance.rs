//! Rebalancing alerts.

use serde::{Deserialize, Serialize};

use super::AssetClass;

/// How far out of band a position has drifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertUrgency {
    Low,
    Medium,
    High,
}

/// Direction of the drift relative to the target weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationDrift {
    Overweight,
    Underweight,
}

/// One asset class whose actual weight has drifted past the threshold.
///
/// Alerts are ephemeral output; dismissal and follow-up are the caller's
/// responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalancingAlert {
    pub asset_class: AssetClass,
    /// Actual weight, percentage points.
    pub current_weight: f64,
    /// Target weight, percentage points.
    pub target_weight: f64,
    /// Absolute gap between current and target, percentage points.
    pub deviation: f64,
    pub urgency: AlertUrgency,
    pub direction: AllocationDrift,
    pub suggested_action: String,
}
