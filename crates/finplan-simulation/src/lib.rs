//! Monte Carlo portfolio simulation.
//!
//! Draws per-asset-class monthly returns from configured assumptions,
//! compounds contribution plus growth over many independent trials, and
//! derives outcome percentiles and risk metrics from the trial set.
//!
//! Everything here is pure compute: the randomness source is injected by
//! the caller, so a fixed seed reproduces bit-identical results.

mod assumptions;
mod cancel;
mod metrics;
mod monte_carlo;
mod percentile;
mod sampler;

pub use assumptions::{ClassAssumption, ReturnAssumptions};
pub use cancel::CancelToken;
pub use metrics::{MetricsConfig, RiskMetricsComputer};
pub use monte_carlo::{MonteCarloSimulator, SimulationConfig, SimulationRequest};
pub use percentile::percentile;
pub use sampler::ReturnSampler;
