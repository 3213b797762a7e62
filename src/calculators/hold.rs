//! Buy & Hold: finance the purchase and rent it out

use super::loan::payment_for_term;
use super::operating::OperatingStatement;
use super::safe_ratio;
use crate::assumptions::HoldAssumptions;
use crate::valuation::PropertyInputs;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldResult {
    pub loan: f64,
    pub down_payment: f64,
    pub closing_cost: f64,
    /// Monthly principal and interest
    pub monthly_payment: f64,

    pub operating: OperatingStatement,
    pub annual_debt_service: f64,
    pub annual_cash_flow: f64,

    pub total_cash_invested: f64,
    pub cash_on_cash_return: f64,
    /// NOI / purchase price
    pub cap_rate: f64,
}

/// Run the buy & hold strategy. Uses purchase price and rent; ARV is ignored.
pub fn calculate_hold(inputs: &PropertyInputs, a: &HoldAssumptions) -> HoldResult {
    let price = inputs.purchase_price;

    let loan = price * (1.0 - a.down_payment);
    let down_payment = price * a.down_payment;
    let closing_cost = price * a.closing_cost;

    let monthly_payment = payment_for_term(a.interest_rate, a.loan_years, loan);
    let operating = OperatingStatement::from_rent(inputs.monthly_rent, &a.operating);

    let annual_debt_service = monthly_payment * 12.0;
    let annual_cash_flow = operating.noi - annual_debt_service;

    let total_cash_invested = down_payment + closing_cost;
    let cash_on_cash_return = safe_ratio(annual_cash_flow, total_cash_invested);
    let cap_rate = safe_ratio(operating.noi, price);

    debug!(
        "hold: noi={:.2} debt_service={:.2} cash_flow={:.2} cap_rate={:.4}",
        operating.noi, annual_debt_service, annual_cash_flow, cap_rate
    );

    HoldResult {
        loan,
        down_payment,
        closing_cost,
        monthly_payment,
        operating,
        annual_debt_service,
        annual_cash_flow,
        total_cash_invested,
        cash_on_cash_return,
        cap_rate,
    }
}
