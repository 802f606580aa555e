//! Return assumptions per asset class.

use finplan_core::{AssetClass, EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Assumed annualized return statistics for one asset class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassAssumption {
    /// Annualized mean return, as a fraction (0.10 = 10%).
    pub annual_mean: f64,
    /// Annualized volatility, as a fraction.
    pub annual_volatility: f64,
}

/// Assumed (mean, volatility) table for all six asset classes.
///
/// These are model assumptions for simulation, not forecasts. Lifted into
/// configuration so the table can be tuned and frozen for regression tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnAssumptions {
    pub stocks_domestic: ClassAssumption,
    pub stocks_international: ClassAssumption,
    pub bonds: ClassAssumption,
    pub real_estate: ClassAssumption,
    pub commodities: ClassAssumption,
    pub cash: ClassAssumption,
}

impl Default for ReturnAssumptions {
    fn default() -> Self {
        Self {
            stocks_domestic: ClassAssumption {
                annual_mean: 0.10,
                annual_volatility: 0.15,
            },
            stocks_international: ClassAssumption {
                annual_mean: 0.09,
                annual_volatility: 0.17,
            },
            bonds: ClassAssumption {
                annual_mean: 0.04,
                annual_volatility: 0.05,
            },
            real_estate: ClassAssumption {
                annual_mean: 0.07,
                annual_volatility: 0.12,
            },
            commodities: ClassAssumption {
                annual_mean: 0.05,
                annual_volatility: 0.18,
            },
            cash: ClassAssumption {
                annual_mean: 0.02,
                annual_volatility: 0.005,
            },
        }
    }
}

impl ReturnAssumptions {
    pub fn get(&self, class: AssetClass) -> ClassAssumption {
        match class {
            AssetClass::StocksDomestic => self.stocks_domestic,
            AssetClass::StocksInternational => self.stocks_international,
            AssetClass::Bonds => self.bonds,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Commodities => self.commodities,
            AssetClass::Cash => self.cash,
        }
    }

    /// Reject non-finite means and negative volatilities.
    pub fn validate(&self) -> EngineResult<()> {
        for class in AssetClass::ALL {
            let a = self.get(class);
            if !a.annual_mean.is_finite() || !a.annual_volatility.is_finite() {
                return Err(EngineError::invalid_input(format!(
                    "non-finite return assumption for {}",
                    class
                )));
            }
            if a.annual_volatility < 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "negative volatility {} for {}",
                    a.annual_volatility, class
                )));
            }
        }
        Ok(())
    }
}
