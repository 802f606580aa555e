//! Asset classes and allocation mixes.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tolerance on the 100-point weight-sum invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// The six asset classes tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    StocksDomestic,
    StocksInternational,
    Bonds,
    RealEstate,
    Commodities,
    Cash,
}

impl AssetClass {
    /// All asset classes in canonical order.
    pub const ALL: [AssetClass; 6] = [
        AssetClass::StocksDomestic,
        AssetClass::StocksInternational,
        AssetClass::Bonds,
        AssetClass::RealEstate,
        AssetClass::Commodities,
        AssetClass::Cash,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            AssetClass::StocksDomestic => "domestic stocks",
            AssetClass::StocksInternational => "international stocks",
            AssetClass::Bonds => "bonds",
            AssetClass::RealEstate => "real estate",
            AssetClass::Commodities => "commodities",
            AssetClass::Cash => "cash",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Percentage split of a portfolio across the six asset classes.
///
/// Weights are expressed in percentage points and must sum to 100 within
/// [`WEIGHT_SUM_TOLERANCE`]. The invariant is re-checked after every
/// resolution or adjustment step rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationMix {
    pub stocks_domestic: f64,
    pub stocks_international: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub commodities: f64,
    pub cash: f64,
}

impl AllocationMix {
    /// Build a mix from explicit weights, validating the sum invariant.
    pub fn new(weights: [f64; 6]) -> EngineResult<Self> {
        let mix = Self {
            stocks_domestic: weights[0],
            stocks_international: weights[1],
            bonds: weights[2],
            real_estate: weights[3],
            commodities: weights[4],
            cash: weights[5],
        };
        mix.validate()?;
        Ok(mix)
    }

    /// Convert raw per-class currency amounts into percentage weights.
    ///
    /// Fails with `ArithmeticDomain` when the total is zero (a percentage
    /// split of an empty portfolio is undefined) and with `InvalidInput`
    /// on negative amounts.
    pub fn from_amounts(amounts: &[(AssetClass, f64)]) -> EngineResult<Self> {
        let mut mix = Self {
            stocks_domestic: 0.0,
            stocks_international: 0.0,
            bonds: 0.0,
            real_estate: 0.0,
            commodities: 0.0,
            cash: 0.0,
        };
        for (class, amount) in amounts {
            if *amount < 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "negative holding amount {} for {}",
                    amount, class
                )));
            }
            *mix.weight_mut(*class) += *amount;
        }

        let total = mix.total();
        if total <= 0.0 {
            return Err(EngineError::arithmetic(
                "cannot derive allocation percentages from zero total holdings",
            ));
        }

        for class in AssetClass::ALL {
            *mix.weight_mut(class) *= 100.0 / total;
        }
        mix.validate()?;
        Ok(mix)
    }

    /// Weight for a single asset class, in percentage points.
    pub fn weight(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::StocksDomestic => self.stocks_domestic,
            AssetClass::StocksInternational => self.stocks_international,
            AssetClass::Bonds => self.bonds,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Commodities => self.commodities,
            AssetClass::Cash => self.cash,
        }
    }

    /// Mutable weight for a single asset class.
    pub fn weight_mut(&mut self, class: AssetClass) -> &mut f64 {
        match class {
            AssetClass::StocksDomestic => &mut self.stocks_domestic,
            AssetClass::StocksInternational => &mut self.stocks_international,
            AssetClass::Bonds => &mut self.bonds,
            AssetClass::RealEstate => &mut self.real_estate,
            AssetClass::Commodities => &mut self.commodities,
            AssetClass::Cash => &mut self.cash,
        }
    }

    /// Iterate over (class, weight) pairs in canonical order.
    pub fn weights(&self) -> impl Iterator<Item = (AssetClass, f64)> + '_ {
        AssetClass::ALL.iter().map(move |&c| (c, self.weight(c)))
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        AssetClass::ALL.iter().map(|&c| self.weight(c)).sum()
    }

    /// Check the non-negativity and 100-point sum invariants.
    pub fn validate(&self) -> EngineResult<()> {
        for (class, weight) in self.weights() {
            if weight < 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "negative weight {:.4} for {}",
                    weight, class
                )));
            }
            if !weight.is_finite() {
                return Err(EngineError::arithmetic(format!(
                    "non-finite weight for {}",
                    class
                )));
            }
        }
        let total = self.total();
        if (total - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::invalid_input(format!(
                "allocation weights sum to {:.4}, expected 100",
                total
            )));
        }
        Ok(())
    }

    /// Clamp every weight at zero, then scale the whole mix proportionally
    /// so the weights sum to exactly 100.
    pub fn renormalize(&mut self) -> EngineResult<()> {
        for class in AssetClass::ALL {
            let w = self.weight_mut(class);
            if *w < 0.0 {
                *w = 0.0;
            }
        }
        let total = self.total();
        if total <= 0.0 {
            return Err(EngineError::arithmetic(
                "cannot renormalize an all-zero allocation",
            ));
        }
        let scale = 100.0 / total;
        for class in AssetClass::ALL {
            *self.weight_mut(class) *= scale;
        }
        self.validate()
    }
}
