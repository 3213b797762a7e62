//! BRRR: buy, rehab, rent, refinance, repeat

use super::loan::payment_for_term;
use super::operating::OperatingStatement;
use super::safe_ratio;
use crate::assumptions::BrrrAssumptions;
use crate::valuation::PropertyInputs;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrrrResult {
    // Acquisition
    pub acquisition_loan: f64,
    pub down_payment: f64,
    pub buy_closing_cost: f64,
    /// Interest-only carry on the acquisition loan until refinance
    pub holding_cost: f64,
    pub cash_committed: f64,

    // Stabilised operations
    pub operating: OperatingStatement,

    // Refinance
    pub refi_loan: f64,
    pub refi_closing_cost: f64,
    /// Negative when the refinance does not cover the acquisition loan and rehab
    pub cash_returned: f64,
    /// Never negative
    pub cash_left_in: f64,
    pub monthly_debt_service: f64,
    pub annual_debt_service: f64,

    // Returns
    pub annual_cash_flow: f64,
    pub cash_on_cash_return: f64,
}

/// Run the BRRR strategy. ARV is the refinance appraisal.
pub fn calculate_brrr(inputs: &PropertyInputs, a: &BrrrAssumptions) -> BrrrResult {
    let price = inputs.purchase_price;

    let acquisition_loan = price * (1.0 - a.down_payment);
    let down_payment = price * a.down_payment;
    let buy_closing_cost = price * a.closing_cost;

    let holding_cost = a.acquisition_rate / 12.0 * acquisition_loan * a.holding_months as f64;
    let cash_committed = down_payment + buy_closing_cost + a.rehab_budget + holding_cost;

    let operating = OperatingStatement::from_rent(inputs.monthly_rent, &a.operating);

    let refi_loan = inputs.arv * a.refi_ltv;
    let refi_closing_cost = refi_loan * a.refi_closing_cost;
    let cash_returned = refi_loan - acquisition_loan - a.rehab_budget - refi_closing_cost;
    let cash_left_in = (cash_committed - cash_returned).max(0.0);

    let monthly_debt_service = payment_for_term(a.refi_rate, a.refi_years, refi_loan);
    let annual_debt_service = monthly_debt_service * 12.0;

    let annual_cash_flow = operating.noi - annual_debt_service;
    let cash_on_cash_return = safe_ratio(annual_cash_flow, cash_left_in);

    debug!(
        "brrr: committed={:.2} returned={:.2} left_in={:.2} cash_flow={:.2}",
        cash_committed, cash_returned, cash_left_in, annual_cash_flow
    );

    BrrrResult {
        acquisition_loan,
        down_payment,
        buy_closing_cost,
        holding_cost,
        cash_committed,
        operating,
        refi_loan,
        refi_closing_cost,
        cash_returned,
        cash_left_in,
        monthly_debt_service,
        annual_debt_service,
        annual_cash_flow,
        cash_on_cash_return,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scenario() -> (PropertyInputs, BrrrAssumptions) {
        let inputs = PropertyInputs::new(200_000.0, 260_000.0, 1_500.0);
        let assumptions = BrrrAssumptions {
            down_payment: 0.25,
            closing_cost: 0.03,
            rehab_budget: 20_000.0,
            holding_months: 6,
            acquisition_rate: 0.10,
            refi_ltv: 0.75,
            refi_closing_cost: 0.03,
            ..Default::default()
        };
        (inputs, assumptions)
    }

    #[test]
    fn test_worked_scenario() {
        let (inputs, a) = scenario();
        let r = calculate_brrr(&inputs, &a);

        assert_abs_diff_eq!(r.down_payment, 50_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.buy_closing_cost, 6_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.acquisition_loan, 150_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.holding_cost, 7_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.cash_committed, 83_500.0, epsilon = 1e-6);

        assert_abs_diff_eq!(r.refi_loan, 195_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.refi_closing_cost, 5_850.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.cash_returned, 19_150.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.cash_left_in, 64_350.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cash_flow_and_return() {
        let (inputs, a) = scenario();
        let r = calculate_brrr(&inputs, &a);

        // 195,000 at 7% over 30 years
        assert_abs_diff_eq!(r.monthly_debt_service, 1_297.34, epsilon = 0.01);
        assert_abs_diff_eq!(r.annual_debt_service, r.monthly_debt_service * 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.operating.noi, 13_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.annual_cash_flow, 13_500.0 - r.annual_debt_service, epsilon = 1e-9);
        assert_abs_diff_eq!(r.cash_on_cash_return, r.annual_cash_flow / 64_350.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cash_left_in_is_clamped() {
        // Big ARV bump: refinance pulls out more than was put in
        let inputs = PropertyInputs::new(100_000.0, 400_000.0, 2_000.0);
        let r = calculate_brrr(&inputs, &BrrrAssumptions::default());

        assert!(r.cash_returned > r.cash_committed);
        assert_eq!(r.cash_left_in, 0.0);
        // Infinite return is reported as 0, never inf
        assert_eq!(r.cash_on_cash_return, 0.0);
    }

    #[test]
    fn test_cash_left_in_identity() {
        let a = BrrrAssumptions::default();
        for &(price, arv) in &[(200_000.0, 150_000.0), (200_000.0, 260_000.0), (80_000.0, 300_000.0)] {
            let r = calculate_brrr(&PropertyInputs::new(price, arv, 1_200.0), &a);
            assert!(r.cash_left_in >= 0.0);
            assert_eq!(r.cash_left_in, (r.cash_committed - r.cash_returned).max(0.0));
        }
    }

    #[test]
    fn test_negative_cash_returned() {
        // ARV below price: owner must bring cash to the refinance
        let inputs = PropertyInputs::new(200_000.0, 180_000.0, 1_500.0);
        let r = calculate_brrr(&inputs, &BrrrAssumptions::default());

        assert!(r.cash_returned < 0.0);
        assert!(r.cash_left_in > r.cash_committed);
    }

    #[test]
    fn test_degenerate_inputs_stay_finite() {
        let a = BrrrAssumptions {
            rehab_budget: 0.0,
            refi_years: 0,
            ..Default::default()
        };
        let r = calculate_brrr(&PropertyInputs::new(0.0, 0.0, 0.0), &a);

        assert_eq!(r.cash_left_in, 0.0);
        assert_eq!(r.monthly_debt_service, 0.0);
        assert_eq!(r.cash_on_cash_return, 0.0);
        assert!(r.annual_cash_flow.is_finite());
    }
}
