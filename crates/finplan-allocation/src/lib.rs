//! Allocation resolution and rebalancing.
//!
//! Maps a risk category and time horizon to a target asset mix, and
//! compares actual holdings against a target to flag drift.

mod rebalance;
mod resolver;

pub use rebalance::{RebalanceConfig, RebalancingAlertGenerator};
pub use resolver::{AllocationResolver, AllocationTables, HorizonConfig};
