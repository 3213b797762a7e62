//! Operating expense ratios shared by the rental strategies

use super::{check_fraction, parse_f64};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Expense ratios applied to gross annual rent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingExpenses {
    /// Vacancy loss as a fraction of gross rent
    pub vacancy: f64,
    pub maintenance: f64,
    /// Capital expenditure reserve
    pub capex: f64,
    /// Property management fee
    pub management: f64,
}

impl Default for OperatingExpenses {
    fn default() -> Self {
        Self {
            vacancy: 0.05,
            maintenance: 0.05,
            capex: 0.05,
            management: 0.10,
        }
    }
}

impl OperatingExpenses {
    /// Maintenance + capex + management (vacancy is tracked separately)
    pub fn expense_ratio(&self) -> f64 {
        self.maintenance + self.capex + self.management
    }

    /// Returns Ok(false) when the field is not an operating expense ratio
    pub(crate) fn set(&mut self, field: &str, value: &str) -> Result<bool> {
        let slot = match field {
            "vacancy" => &mut self.vacancy,
            "maintenance" => &mut self.maintenance,
            "capex" => &mut self.capex,
            "management" => &mut self.management,
            _ => return Ok(false),
        };
        *slot = parse_f64(field, value)?;
        Ok(true)
    }

    /// `strategy` prefixes field names in errors, e.g. "hold.vacancy"
    pub(crate) fn validate(&self, strategy: &str) -> Result<()> {
        check_fraction(&format!("{}.vacancy", strategy), self.vacancy)?;
        check_fraction(&format!("{}.maintenance", strategy), self.maintenance)?;
        check_fraction(&format!("{}.capex", strategy), self.capex)?;
        check_fraction(&format!("{}.management", strategy), self.management)
    }
}
