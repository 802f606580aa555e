//! Core types and errors for the investment planning engine.
//!
//! This crate provides the shared data model:
//! - Risk profiling inputs and outputs (questionnaire, behavioral factors, profile)
//! - Asset classes and allocation mixes
//! - Investment goals
//! - Simulation results and risk metrics
//! - Rebalancing alerts

pub mod types;
pub mod error;

pub use error::{EngineError, EngineResult};
pub use types::*;
