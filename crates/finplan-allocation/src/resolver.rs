//! Target allocation resolver.

use finplan_core::{AllocationMix, EngineError, EngineResult, RiskCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base six-weight tables per risk category. Each table sums to exactly 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationTables {
    pub conservative: AllocationMix,
    pub moderate: AllocationMix,
    pub aggressive: AllocationMix,
}

impl Default for AllocationTables {
    fn default() -> Self {
        Self {
            conservative: AllocationMix {
                stocks_domestic: 25.0,
                stocks_international: 10.0,
                bonds: 45.0,
                real_estate: 5.0,
                commodities: 3.0,
                cash: 12.0,
            },
            moderate: AllocationMix {
                stocks_domestic: 60.0,
                stocks_international: 20.0,
                bonds: 15.0,
                real_estate: 3.0,
                commodities: 1.0,
                cash: 1.0,
            },
            aggressive: AllocationMix {
                stocks_domestic: 70.0,
                stocks_international: 25.0,
                bonds: 2.0,
                real_estate: 2.0,
                commodities: 1.0,
                cash: 0.0,
            },
        }
    }
}

impl AllocationTables {
    pub fn base(&self, category: RiskCategory) -> AllocationMix {
        match category {
            RiskCategory::Conservative => self.conservative,
            RiskCategory::Moderate => self.moderate,
            RiskCategory::Aggressive => self.aggressive,
        }
    }

    /// Check every table against the 100-point sum invariant.
    pub fn validate(&self) -> EngineResult<()> {
        self.conservative.validate()?;
        self.moderate.validate()?;
        self.aggressive.validate()
    }
}

/// Time-horizon adjustment constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Horizons shorter than this shift weight out of stocks.
    pub short_horizon_years: f64,
    /// Percentage points moved from stocks into bonds and cash.
    pub short_horizon_shift: f64,
    /// Horizons longer than this shift weight out of bonds.
    pub long_horizon_years: f64,
    /// Percentage points moved from bonds into stocks.
    pub long_horizon_shift: f64,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            short_horizon_years: 3.0,
            short_horizon_shift: 15.0,
            long_horizon_years: 20.0,
            long_horizon_shift: 10.0,
        }
    }
}

/// Resolves a risk category and time horizon to a target allocation.
#[derive(Debug, Clone, Default)]
pub struct AllocationResolver {
    tables: AllocationTables,
    horizon: HorizonConfig,
}

impl AllocationResolver {
    pub fn new(tables: AllocationTables, horizon: HorizonConfig) -> Self {
        Self { tables, horizon }
    }

    pub fn tables(&self) -> &AllocationTables {
        &self.tables
    }

    /// Resolve the target mix for a category and a (possibly fractional)
    /// number of years to the goal.
    pub fn resolve(
        &self,
        category: RiskCategory,
        years_to_goal: f64,
    ) -> EngineResult<AllocationMix> {
        if !years_to_goal.is_finite() || years_to_goal < 0.0 {
            return Err(EngineError::invalid_input(format!(
                "years_to_goal must be non-negative, got {}",
                years_to_goal
            )));
        }

        let mut mix = self.tables.base(category);

        if years_to_goal < self.horizon.short_horizon_years {
            self.shift_to_defensive(&mut mix);
        } else if years_to_goal > self.horizon.long_horizon_years {
            self.shift_to_growth(&mut mix);
        }

        // Clamp and rescale proportionally so the invariant holds exactly.
        mix.renormalize()?;

        debug!(%category, years_to_goal, ?mix, "resolved target allocation");
        Ok(mix)
    }

    /// Move weight from domestic/international stocks into bonds and cash,
    /// taking from each stock class in proportion to its current weight.
    fn shift_to_defensive(&self, mix: &mut AllocationMix) {
        let shift = self.horizon.short_horizon_shift;
        let stocks = mix.stocks_domestic + mix.stocks_international;
        if stocks <= 0.0 {
            return;
        }
        let taken = shift.min(stocks);
        mix.stocks_domestic -= taken * (mix.stocks_domestic / stocks);
        mix.stocks_international -= taken * (mix.stocks_international / stocks);
        mix.bonds += taken / 2.0;
        mix.cash += taken / 2.0;
    }

    /// Move weight from bonds into domestic/international stocks, splitting
    /// by the current stock proportions.
    fn shift_to_growth(&self, mix: &mut AllocationMix) {
        let shift = self.horizon.long_horizon_shift.min(mix.bonds);
        if shift <= 0.0 {
            return;
        }
        mix.bonds -= shift;
        let stocks = mix.stocks_domestic + mix.stocks_international;
        if stocks > 0.0 {
            mix.stocks_domestic += shift * (mix.stocks_domestic / stocks);
            mix.stocks_international += shift * (mix.stocks_international / stocks);
        } else {
            mix.stocks_domestic += shift / 2.0;
            mix.stocks_international += shift / 2.0;
        }
    }
}
