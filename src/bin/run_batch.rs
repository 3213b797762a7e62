//! Run all strategies for every property in a CSV batch
//!
//! Outputs one row of headline metrics per property

use anyhow::Context;
use clap::Parser;
use cma_analysis::valuation::load_properties;
use cma_analysis::{AnalysisRunner, PropertyAnalysis};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Analyze a CSV batch of properties")]
struct Args {
    /// Properties CSV
    #[arg(long, default_value = "data/sample_properties.csv")]
    input: PathBuf,

    /// Output CSV
    #[arg(long, default_value = "batch_analysis_output.csv")]
    output: PathBuf,

    /// Assumption overrides (.json or .csv)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

/// Flattened output row
#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    address: &'a str,
    purchase_price: f64,
    arv: f64,
    monthly_rent: f64,
    brrr_cash_left_in: f64,
    brrr_annual_cash_flow: f64,
    brrr_cash_on_cash: f64,
    flip_net_profit: f64,
    flip_roi: f64,
    flip_annualized_roi: f64,
    hold_annual_cash_flow: f64,
    hold_cash_on_cash: f64,
    hold_cap_rate: f64,
}

impl<'a> From<&'a PropertyAnalysis> for BatchRow<'a> {
    fn from(a: &'a PropertyAnalysis) -> Self {
        let s = &a.summary;
        Self {
            address: &a.address,
            purchase_price: s.inputs.purchase_price,
            arv: s.inputs.arv,
            monthly_rent: s.inputs.monthly_rent,
            brrr_cash_left_in: s.brrr.cash_left_in,
            brrr_annual_cash_flow: s.brrr.annual_cash_flow,
            brrr_cash_on_cash: s.brrr.cash_on_cash_return,
            flip_net_profit: s.flip.net_profit,
            flip_roi: s.flip.roi,
            flip_annualized_roi: s.flip.annualized_roi,
            hold_annual_cash_flow: s.hold.annual_cash_flow,
            hold_cash_on_cash: s.hold.cash_on_cash_return,
            hold_cap_rate: s.hold.cap_rate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading properties from {}...", args.input.display());

    let records = load_properties(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} properties in {:?}", records.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(path) => AnalysisRunner::from_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => AnalysisRunner::new(),
    };

    let run_start = Instant::now();
    let results = runner.run_batch(&records);
    println!("Analysis complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for analysis in &results {
        writer.serialize(BatchRow::from(analysis))?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    // Best deal per strategy
    let best = |key: fn(&PropertyAnalysis) -> f64| {
        results
            .iter()
            .max_by(|a, b| key(a).total_cmp(&key(b)))
            .map(|a| (a.address.as_str(), key(a)))
    };

    println!("\nBatch Summary:");
    if let Some((address, v)) = best(|a| a.summary.brrr.cash_on_cash_return) {
        println!("  Best BRRR cash-on-cash:  {:>7.2}%  {}", v * 100.0, address);
    }
    if let Some((address, v)) = best(|a| a.summary.flip.annualized_roi) {
        println!("  Best flip annualized ROI:{:>7.2}%  {}", v * 100.0, address);
    }
    if let Some((address, v)) = best(|a| a.summary.hold.cap_rate) {
        println!("  Best hold cap rate:      {:>7.2}%  {}", v * 100.0, address);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
