//! Analysis runner for single properties, batches and assumption sweeps
//!
//! Holds one assumption set and runs all three strategies against whatever
//! properties it is handed. Every run is a pure recomputation.

use crate::assumptions::Assumptions;
use crate::calculators::{
    calculate_brrr, calculate_flip, calculate_hold, BrrrResult, FlipResult, HoldResult,
};
use crate::error::Result;
use crate::valuation::{PropertyInputs, PropertyRecord};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Results of all three strategies for one property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub inputs: PropertyInputs,
    pub brrr: BrrrResult,
    pub flip: FlipResult,
    pub hold: HoldResult,
}

/// Summary tagged with the property it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnalysis {
    pub address: String,
    pub summary: InvestmentSummary,
}

/// Run every strategy once
pub fn analyze(inputs: &PropertyInputs, assumptions: &Assumptions) -> InvestmentSummary {
    InvestmentSummary {
        inputs: *inputs,
        brrr: calculate_brrr(inputs, &assumptions.brrr),
        flip: calculate_flip(inputs, &assumptions.flip),
        hold: calculate_hold(inputs, &assumptions.hold),
    }
}

/// Pre-loaded analysis runner
///
/// # Example
/// ```ignore
/// let runner = AnalysisRunner::from_path(Path::new("assumptions.json"))?;
///
/// for ltv in [0.70, 0.75, 0.80] {
///     let mut a = *runner.assumptions();
///     a.brrr.refi_ltv = ltv;
///     ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisRunner {
    assumptions: Assumptions,
}

impl AnalysisRunner {
    /// Create runner with default assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner from the default overrides file
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from a JSON or CSV assumptions file
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_path(path)?,
        })
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn run(&self, inputs: &PropertyInputs) -> InvestmentSummary {
        analyze(inputs, &self.assumptions)
    }

    /// Resolve fallbacks for one record and run it
    pub fn run_record(&self, record: &PropertyRecord) -> PropertyAnalysis {
        PropertyAnalysis {
            address: record.address().to_string(),
            summary: self.run(&record.inputs()),
        }
    }

    /// Run many properties in parallel. Output order matches input order.
    pub fn run_batch(&self, records: &[PropertyRecord]) -> Vec<PropertyAnalysis> {
        info!("analyzing {} properties", records.len());
        records.par_iter().map(|r| self.run_record(r)).collect()
    }

    /// Run one property under several assumption sets
    pub fn run_scenarios(
        &self,
        inputs: &PropertyInputs,
        scenarios: &[Assumptions],
    ) -> Vec<InvestmentSummary> {
        scenarios.iter().map(|a| analyze(inputs, a)).collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}
