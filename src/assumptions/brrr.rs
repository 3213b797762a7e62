//! Buy, Rehab, Rent, Refinance, Repeat assumptions

use super::{check_amount, check_fraction, check_term, parse_f64, parse_u32, OperatingExpenses};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrrrAssumptions {
    /// Down payment as a fraction of purchase price
    pub down_payment: f64,

    /// Buy-side closing costs as a fraction of purchase price
    pub closing_cost: f64,

    /// Rehab budget (currency)
    pub rehab_budget: f64,

    /// Months between purchase and refinance
    pub holding_months: u32,

    #[serde(flatten)]
    pub operating: OperatingExpenses,

    /// Annual rate on the acquisition loan (interest-only carry)
    pub acquisition_rate: f64,

    /// Annual rate on the refinance loan
    pub refi_rate: f64,

    /// Refinance loan-to-value against the ARV
    pub refi_ltv: f64,

    /// Refinance amortization term in years
    pub refi_years: u32,

    /// Refinance closing costs as a fraction of the new loan
    pub refi_closing_cost: f64,
}

impl Default for BrrrAssumptions {
    fn default() -> Self {
        Self {
            down_payment: 0.25,
            closing_cost: 0.03,
            rehab_budget: 20_000.0,
            holding_months: 6,
            operating: OperatingExpenses::default(),
            acquisition_rate: 0.10,
            refi_rate: 0.07,
            refi_ltv: 0.75,
            refi_years: 30,
            refi_closing_cost: 0.03,
        }
    }
}

impl BrrrAssumptions {
    pub(crate) fn set(&mut self, field: &str, value: &str) -> Result<()> {
        if self.operating.set(field, value)? {
            return Ok(());
        }
        match field {
            "down_payment" => self.down_payment = parse_f64(field, value)?,
            "closing_cost" => self.closing_cost = parse_f64(field, value)?,
            "rehab_budget" => self.rehab_budget = parse_f64(field, value)?,
            "holding_months" => self.holding_months = parse_u32(field, value)?,
            "acquisition_rate" => self.acquisition_rate = parse_f64(field, value)?,
            "refi_rate" => self.refi_rate = parse_f64(field, value)?,
            "refi_ltv" => self.refi_ltv = parse_f64(field, value)?,
            "refi_years" => self.refi_years = parse_u32(field, value)?,
            "refi_closing_cost" => self.refi_closing_cost = parse_f64(field, value)?,
            _ => {
                return Err(Error::UnknownField {
                    strategy: "brrr".to_string(),
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_fraction("brrr.down_payment", self.down_payment)?;
        check_fraction("brrr.closing_cost", self.closing_cost)?;
        check_amount("brrr.rehab_budget", self.rehab_budget)?;
        self.operating.validate("brrr")?;
        check_fraction("brrr.acquisition_rate", self.acquisition_rate)?;
        check_fraction("brrr.refi_rate", self.refi_rate)?;
        check_fraction("brrr.refi_ltv", self.refi_ltv)?;
        check_term("brrr.refi_years", self.refi_years)?;
        check_fraction("brrr.refi_closing_cost", self.refi_closing_cost)
    }
}
