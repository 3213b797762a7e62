//! Buy & Hold rental assumptions

use super::{check_fraction, check_term, parse_f64, parse_u32, OperatingExpenses};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldAssumptions {
    /// Down payment as a fraction of purchase price
    pub down_payment: f64,

    /// Closing costs as a fraction of purchase price
    pub closing_cost: f64,

    /// Annual mortgage rate
    pub interest_rate: f64,

    /// Amortization term in years
    pub loan_years: u32,

    #[serde(flatten)]
    pub operating: OperatingExpenses,
}

impl Default for HoldAssumptions {
    fn default() -> Self {
        Self {
            down_payment: 0.20,
            closing_cost: 0.03,
            interest_rate: 0.08,
            loan_years: 30,
            operating: OperatingExpenses::default(),
        }
    }
}

impl HoldAssumptions {
    pub(crate) fn set(&mut self, field: &str, value: &str) -> Result<()> {
        if self.operating.set(field, value)? {
            return Ok(());
        }
        match field {
            "down_payment" => self.down_payment = parse_f64(field, value)?,
            "closing_cost" => self.closing_cost = parse_f64(field, value)?,
            "interest_rate" => self.interest_rate = parse_f64(field, value)?,
            "loan_years" => self.loan_years = parse_u32(field, value)?,
            _ => {
                return Err(Error::UnknownField {
                    strategy: "hold".to_string(),
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_fraction("hold.down_payment", self.down_payment)?;
        check_fraction("hold.closing_cost", self.closing_cost)?;
        check_fraction("hold.interest_rate", self.interest_rate)?;
        check_term("hold.loan_years", self.loan_years)?;
        self.operating.validate("hold")
    }
}
