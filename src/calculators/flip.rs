//! Fix-and-flip: buy, renovate, sell at ARV

use super::safe_ratio;
use crate::assumptions::FlipAssumptions;
use crate::valuation::PropertyInputs;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlipResult {
    pub acquisition_loan: f64,
    pub down_payment: f64,
    pub buy_closing_cost: f64,

    /// Interest paid on the acquisition loan while holding
    pub interest_carry: f64,
    pub utilities_carry: f64,
    pub carrying_cost: f64,

    pub total_project_cost: f64,
    pub sell_closing_cost: f64,
    pub net_profit: f64,

    /// Capital put in by the investor; utilities are not part of it
    pub cash_invested: f64,
    pub roi: f64,
    pub annualized_roi: f64,
}

/// Run the flip strategy. ARV is the sale price.
pub fn calculate_flip(inputs: &PropertyInputs, a: &FlipAssumptions) -> FlipResult {
    let price = inputs.purchase_price;
    let sale_price = inputs.arv;
    let months = a.holding_months as f64;

    let acquisition_loan = price * (1.0 - a.down_payment);
    let down_payment = price * a.down_payment;
    let buy_closing_cost = price * a.buy_closing_cost;

    let monthly_interest = a.interest_rate / 12.0 * acquisition_loan;
    let interest_carry = monthly_interest * months;
    let utilities_carry = a.monthly_utilities * months;
    let carrying_cost = interest_carry + utilities_carry;

    let total_project_cost = price + buy_closing_cost + a.rehab_budget + carrying_cost;
    let sell_closing_cost = sale_price * a.sell_closing_cost;
    let net_profit = sale_price - sell_closing_cost - total_project_cost;

    // Utilities count against profit but are a pass-through, not invested capital
    let cash_invested = down_payment + buy_closing_cost + a.rehab_budget + interest_carry;

    let roi = safe_ratio(net_profit, cash_invested);
    let annualizing_months = if a.holding_months == 0 { 1 } else { a.holding_months };
    let annualized_roi = roi * (12.0 / annualizing_months as f64);

    debug!(
        "flip: project_cost={:.2} profit={:.2} invested={:.2} roi={:.4}",
        total_project_cost, net_profit, cash_invested, roi
    );

    FlipResult {
        acquisition_loan,
        down_payment,
        buy_closing_cost,
        interest_carry,
        utilities_carry,
        carrying_cost,
        total_project_cost,
        sell_closing_cost,
        net_profit,
        cash_invested,
        roi,
        annualized_roi,
    }
}
