//! Fix-and-flip assumptions

use super::{check_amount, check_fraction, parse_f64, parse_u32};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipAssumptions {
    /// Down payment as a fraction of purchase price
    pub down_payment: f64,

    /// Buy-side closing costs as a fraction of purchase price
    pub buy_closing_cost: f64,

    /// Sell-side closing costs as a fraction of the sale price (ARV)
    pub sell_closing_cost: f64,

    /// Rehab budget (currency)
    pub rehab_budget: f64,

    /// Months from purchase to sale
    pub holding_months: u32,

    /// Annual rate on the acquisition loan
    pub interest_rate: f64,

    /// Utilities paid while holding (currency per month)
    pub monthly_utilities: f64,
}

impl Default for FlipAssumptions {
    fn default() -> Self {
        Self {
            down_payment: 0.20,
            buy_closing_cost: 0.03,
            sell_closing_cost: 0.06,
            rehab_budget: 20_000.0,
            holding_months: 6,
            interest_rate: 0.10,
            monthly_utilities: 0.0,
        }
    }
}

impl FlipAssumptions {
    pub(crate) fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "down_payment" => self.down_payment = parse_f64(field, value)?,
            "buy_closing_cost" => self.buy_closing_cost = parse_f64(field, value)?,
            "sell_closing_cost" => self.sell_closing_cost = parse_f64(field, value)?,
            "rehab_budget" => self.rehab_budget = parse_f64(field, value)?,
            "holding_months" => self.holding_months = parse_u32(field, value)?,
            "interest_rate" => self.interest_rate = parse_f64(field, value)?,
            "monthly_utilities" => self.monthly_utilities = parse_f64(field, value)?,
            _ => {
                return Err(Error::UnknownField {
                    strategy: "flip".to_string(),
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_fraction("flip.down_payment", self.down_payment)?;
        check_fraction("flip.buy_closing_cost", self.buy_closing_cost)?;
        check_fraction("flip.sell_closing_cost", self.sell_closing_cost)?;
        check_amount("flip.rehab_budget", self.rehab_budget)?;
        check_fraction("flip.interest_rate", self.interest_rate)?;
        check_amount("flip.monthly_utilities", self.monthly_utilities)
    }
}
