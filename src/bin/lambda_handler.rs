//! AWS Lambda handler for the investment calculators
//!
//! Accepts a valuation snapshot, optional ARV and rent estimate, and optional
//! assumption overrides as JSON; returns all three strategy results.
//! Whether the caller may see the results is decided upstream.

use cma_analysis::valuation::{AdjustedValuationSnapshot, RentEstimate, ValuationSnapshot};
use cma_analysis::{analyze, Assumptions, InvestmentSummary, PropertyInputs};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::info;
use serde::{Deserialize, Serialize};

/// Input for one analysis
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub valuation: ValuationSnapshot,

    /// After-repair valuation (default: baseline estimate)
    #[serde(default)]
    pub adjusted: Option<AdjustedValuationSnapshot>,

    /// Rent estimate (default: no rent)
    #[serde(default)]
    pub rent: Option<RentEstimate>,

    /// Partial overrides; anything omitted keeps its default
    #[serde(default)]
    pub assumptions: Assumptions,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub address: String,
    pub summary: InvestmentSummary,
    pub execution_time_ms: u64,
}

async fn handler(event: LambdaEvent<AnalysisRequest>) -> Result<AnalysisResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    request.assumptions.validate()?;
    request.valuation.validate()?;
    if let Some(adjusted) = &request.adjusted {
        adjusted.validate()?;
    }
    if let Some(rent) = &request.rent {
        rent.validate()?;
    }

    let inputs = PropertyInputs::resolve(
        &request.valuation,
        request.adjusted.as_ref(),
        request.rent.as_ref(),
    );
    let summary = analyze(&inputs, &request.assumptions);

    let address = request.valuation.subject.address;
    info!("analyzed '{}' (request {})", address, event.context.request_id);

    Ok(AnalysisResponse {
        address,
        summary,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
