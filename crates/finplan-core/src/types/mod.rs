//! Core data types for the planning engine.

mod allocation;
mod goal;
mod profile;
mod rebalance;
mod simulation;

pub use allocation::{AllocationMix, AssetClass, WEIGHT_SUM_TOLERANCE};
pub use goal::InvestmentGoal;
pub use profile::{BehavioralFactors, QuestionResponse, RiskCategory, RiskProfile};
pub use rebalance::{AlertUrgency, AllocationDrift, RebalancingAlert};
pub use simulation::{MonthProjection, RiskMetrics, SimulationResult};
