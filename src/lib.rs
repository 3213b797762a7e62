//! CMA Analysis - investment return calculators for comparative market analysis
//!
//! This library provides:
//! - Valuation inputs (baseline estimate, after-repair value, rent) and their fallbacks
//! - Per-strategy assumptions with defaults, loadable from JSON or CSV
//! - BRRR, Flip and Buy & Hold return calculators
//! - Loan amortization helpers
//! - A runner for single properties, parallel batches and assumption sweeps

pub mod analysis;
pub mod assumptions;
pub mod calculators;
pub mod error;
pub mod valuation;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisRunner, InvestmentSummary, PropertyAnalysis};
pub use assumptions::{Assumptions, BrrrAssumptions, FlipAssumptions, HoldAssumptions};
pub use calculators::{BrrrResult, FlipResult, HoldResult};
pub use error::{Error, Result};
pub use valuation::{PropertyInputs, PropertyRecord};
