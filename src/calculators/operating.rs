//! Stabilised annual operating numbers for a rental

use crate::assumptions::OperatingExpenses;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingStatement {
    pub gross_annual_rent: f64,
    pub vacancy_loss: f64,
    /// Maintenance, capex and management
    pub operating_expenses: f64,
    /// Net operating income
    pub noi: f64,
}

impl OperatingStatement {
    pub fn from_rent(monthly_rent: f64, expenses: &OperatingExpenses) -> Self {
        let gross_annual_rent = monthly_rent * 12.0;
        let vacancy_loss = gross_annual_rent * expenses.vacancy;
        let operating_expenses = expenses.expense_ratio() * gross_annual_rent;

        Self {
            gross_annual_rent,
            vacancy_loss,
            operating_expenses,
            noi: gross_annual_rent - vacancy_loss - operating_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_statement() {
        let stmt = OperatingStatement::from_rent(1_500.0, &OperatingExpenses::default());

        assert_eq!(stmt.gross_annual_rent, 18_000.0);
        assert_abs_diff_eq!(stmt.vacancy_loss, 900.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stmt.operating_expenses, 3_600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stmt.noi, 13_500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_rent() {
        let stmt = OperatingStatement::from_rent(0.0, &OperatingExpenses::default());
        assert_eq!(stmt, OperatingStatement::default());
    }
}
