//! Risk profiling.
//!
//! Turns questionnaire answers plus behavioral signals into a scored
//! risk category with a confidence estimate.

mod calculator;
mod scoring;

pub use calculator::RiskProfileCalculator;
pub use scoring::ScoringConfig;
