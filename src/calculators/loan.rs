//! Amortizing loan payment math

use serde::{Deserialize, Serialize};

/// Fixed monthly payment on an amortizing loan.
///
/// # Arguments
/// * `annual_rate` - Nominal annual rate as a decimal (0.08 for 8%)
/// * `total_periods` - Number of monthly payments; must be > 0
/// * `principal` - Amount borrowed
///
/// A zero rate falls back to straight-line repayment, avoiding the 0/0 in
/// the annuity formula.
pub fn monthly_payment(annual_rate: f64, total_periods: u32, principal: f64) -> f64 {
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / total_periods as f64;
    }
    // Beyond i32::MAX periods the discount term is already 0
    let n = i32::try_from(total_periods).unwrap_or(i32::MAX);
    r * principal / (1.0 - (1.0 + r).powi(-n))
}

/// Monthly payment over a term given in years. A zero-year term has no
/// payment schedule and yields 0.
pub fn payment_for_term(annual_rate: f64, years: u32, principal: f64) -> f64 {
    if years == 0 {
        return 0.0;
    }
    monthly_payment(annual_rate, years.saturating_mul(12), principal)
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance remaining after this payment
    pub balance: f64,
}

/// Month-by-month split of each payment into interest and principal.
/// The last row repays whatever balance remains, and every balance is
/// clamped at 0, so the schedule always ends at exactly 0.
pub fn amortization_schedule(
    annual_rate: f64,
    total_periods: u32,
    principal: f64,
) -> Vec<AmortizationRow> {
    if total_periods == 0 {
        return Vec::new();
    }

    let payment = monthly_payment(annual_rate, total_periods, principal);
    let r = annual_rate / 12.0;
    let mut balance = principal;
    let mut rows = Vec::with_capacity(total_periods as usize);

    for period in 1..=total_periods {
        let interest = balance * r;
        let principal_paid = if period == total_periods {
            balance
        } else {
            payment - interest
        };
        balance = (balance - principal_paid).max(0.0);

        rows.push(AmortizationRow {
            period,
            payment: interest + principal_paid,
            interest,
            principal: principal_paid,
            balance,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        for &(n, p) in &[(1, 0.0), (12, 12_000.0), (360, 150_000.0), (7, 1_000.0)] {
            assert_eq!(monthly_payment(0.0, n, p), p / n as f64);
        }
    }

    #[test]
    fn test_known_mortgage_payments() {
        // Standard 30-year fixed quotes
        assert_abs_diff_eq!(monthly_payment(0.08, 360, 160_000.0), 1_174.02, epsilon = 0.01);
        assert_abs_diff_eq!(monthly_payment(0.08, 360, 200_000.0), 1_467.53, epsilon = 0.01);
        assert_abs_diff_eq!(monthly_payment(0.06, 180, 100_000.0), 843.86, epsilon = 0.01);
    }

    #[test]
    fn test_single_period_repays_with_one_month_interest() {
        let payment = monthly_payment(0.12, 1, 10_000.0);
        assert_abs_diff_eq!(payment, 10_100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_term() {
        assert_eq!(payment_for_term(0.07, 0, 195_000.0), 0.0);
        assert_eq!(payment_for_term(0.0, 0, 195_000.0), 0.0);
        assert!(amortization_schedule(0.07, 0, 195_000.0).is_empty());
    }

    #[test]
    fn test_oversized_terms_stay_finite() {
        // Above i32::MAX periods the payment converges to interest only
        let payment = monthly_payment(0.12, u32::MAX, 10_000.0);
        assert_abs_diff_eq!(payment, 100.0, epsilon = 1e-9);

        // years * 12 would overflow u32
        let payment = payment_for_term(0.12, 400_000_000, 10_000.0);
        assert!(payment.is_finite());
        assert_abs_diff_eq!(payment, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let rows = amortization_schedule(0.08, 360, 160_000.0);
        assert_eq!(rows.len(), 360);

        // First month interest = 160,000 * 0.08 / 12
        assert_abs_diff_eq!(rows[0].interest, 1_066.67, epsilon = 0.01);
        assert_abs_diff_eq!(rows[0].payment, 1_174.02, epsilon = 0.01);

        let total_principal: f64 = rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(total_principal, 160_000.0, epsilon = 1e-6);
        assert_eq!(rows.last().unwrap().balance, 0.0);

        // Balance is monotonically decreasing
        assert!(rows.windows(2).all(|w| w[1].balance <= w[0].balance));
    }

    #[test]
    fn test_schedule_zero_rate() {
        let rows = amortization_schedule(0.0, 10, 1_000.0);
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert_abs_diff_eq!(rows[4].balance, 500.0, epsilon = 1e-9);
        assert_eq!(rows[9].balance, 0.0);
    }
}
