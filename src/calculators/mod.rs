//! Investment return calculators
//!
//! Each strategy is a pure function of resolved property inputs and its own
//! assumption set. No calculator fails: a zero denominator yields a ratio of 0.

mod brrr;
mod flip;
mod hold;
pub mod loan;
mod operating;

pub use brrr::{calculate_brrr, BrrrResult};
pub use flip::{calculate_flip, FlipResult};
pub use hold::{calculate_hold, HoldResult};
pub use loan::{amortization_schedule, monthly_payment, payment_for_term, AmortizationRow};
pub use operating::OperatingStatement;

/// `numerator / denominator`, or 0 when the denominator is zero or the
/// quotient is not finite
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}
