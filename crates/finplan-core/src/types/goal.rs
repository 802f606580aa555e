//! Investment goals.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A savings target supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentGoal {
    /// Amount to reach by `target_date`. Must be positive.
    pub target_amount: f64,
    /// Must be strictly after "now" at simulation time.
    pub target_date: DateTime<Utc>,
    /// Current invested amount. Must be non-negative.
    pub current_amount: f64,
    /// Planned monthly contribution. Must be non-negative.
    pub monthly_contribution: f64,
}

impl InvestmentGoal {
    /// Check the goal's amount constraints.
    pub fn validate(&self) -> EngineResult<()> {
        if self.target_amount <= 0.0 {
            return Err(EngineError::invalid_input(format!(
                "target_amount must be positive, got {}",
                self.target_amount
            )));
        }
        if self.current_amount < 0.0 {
            return Err(EngineError::invalid_input(format!(
                "current_amount must be non-negative, got {}",
                self.current_amount
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(EngineError::invalid_input(format!(
                "monthly_contribution must be non-negative, got {}",
                self.monthly_contribution
            )));
        }
        Ok(())
    }

    /// Whole months from `now` to the target date.
    ///
    /// Fails with `InvalidInput` when the target date is not strictly in
    /// the future; a past goal never silently yields a negative or zero
    /// month count.
    pub fn months_until(&self, now: DateTime<Utc>) -> EngineResult<u32> {
        if self.target_date <= now {
            return Err(EngineError::invalid_input(format!(
                "target_date {} is not after {}",
                self.target_date, now
            )));
        }

        let mut months = (self.target_date.year() - now.year()) * 12
            + (self.target_date.month() as i32 - now.month() as i32);
        if self.target_date.day() < now.day() {
            months -= 1;
        }

        // A goal due within the current month still simulates one month.
        Ok(months.max(1) as u32)
    }

    /// Fractional years from `now` to the target date.
    pub fn years_until(&self, now: DateTime<Utc>) -> EngineResult<f64> {
        Ok(f64::from(self.months_until(now)?) / 12.0)
    }
}
