//! CMA Analysis CLI
//!
//! Runs the BRRR, Flip and Buy & Hold calculators for one property

use anyhow::Context;
use clap::Parser;
use cma_analysis::calculators::amortization_schedule;
use cma_analysis::valuation::{
    AdjustedValuationSnapshot, RentEstimate, SubjectAttributes, ValuationSnapshot,
};
use cma_analysis::{AnalysisRunner, InvestmentSummary, PropertyRecord};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cma_analysis", version, about = "Investment returns for a single property")]
struct Args {
    /// Baseline valuation estimate (purchase price)
    #[arg(long)]
    price: f64,

    /// After-repair value; defaults to the baseline estimate
    #[arg(long)]
    arv: Option<f64>,

    /// Monthly rent estimate; defaults to 0
    #[arg(long)]
    rent: Option<f64>,

    /// Post-improvement monthly rent, used over --rent when given
    #[arg(long)]
    improved_rent: Option<f64>,

    /// Property address, for labelling output
    #[arg(long, default_value = "subject property")]
    address: String,

    /// Assumption overrides (.json or .csv)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the full summary as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the buy & hold purchase-loan amortization schedule to this CSV
    #[arg(long)]
    schedule_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.assumptions {
        Some(path) => AnalysisRunner::from_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => AnalysisRunner::new(),
    };

    let valuation = ValuationSnapshot::new(args.price, SubjectAttributes::new(args.address.clone()));
    let adjusted = args.arv.map(AdjustedValuationSnapshot::new);
    let rent = match (args.rent, args.improved_rent) {
        (None, None) => None,
        (rent, improved) => Some(RentEstimate {
            monthly_rent: rent.unwrap_or(0.0),
            post_improvement_rent: improved,
        }),
    };

    let record = PropertyRecord { valuation, adjusted, rent };
    record.validate().context("invalid property figures")?;

    let inputs = record.inputs();
    let summary = runner.run(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&args.address, &summary);
    }

    if let Some(path) = &args.schedule_out {
        let hold = &runner.assumptions().hold;
        let rows = amortization_schedule(hold.interest_rate, hold.loan_years.saturating_mul(12), summary.hold.loan);

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        println!("\nAmortization schedule ({} months) written to: {}", rows.len(), path.display());
    }

    Ok(())
}

fn print_summary(address: &str, s: &InvestmentSummary) {
    println!("CMA Analysis v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Property: {}", address);
    println!("  Purchase Price: ${:.2}", s.inputs.purchase_price);
    println!("  ARV:            ${:.2}", s.inputs.arv);
    println!("  Monthly Rent:   ${:.2}", s.inputs.monthly_rent);
    println!();

    println!("{:<12} {:>16} {:>16} {:>16}", "Strategy", "Metric", "Metric", "Metric");
    println!("{}", "-".repeat(64));
    println!(
        "{:<12} {:>16} {:>16} {:>16}",
        "BRRR",
        format!("${:.0} left in", s.brrr.cash_left_in),
        format!("${:.0}/yr", s.brrr.annual_cash_flow),
        format!("{:.2}% CoC", s.brrr.cash_on_cash_return * 100.0),
    );
    println!(
        "{:<12} {:>16} {:>16} {:>16}",
        "Flip",
        format!("${:.0} profit", s.flip.net_profit),
        format!("{:.2}% ROI", s.flip.roi * 100.0),
        format!("{:.2}% ann.", s.flip.annualized_roi * 100.0),
    );
    println!(
        "{:<12} {:>16} {:>16} {:>16}",
        "Buy & Hold",
        format!("${:.0}/yr", s.hold.annual_cash_flow),
        format!("{:.2}% CoC", s.hold.cash_on_cash_return * 100.0),
        format!("{:.2}% cap", s.hold.cap_rate * 100.0),
    );

    println!("\nDetail:");
    println!("  BRRR cash committed: ${:.2}, returned at refi: ${:.2}", s.brrr.cash_committed, s.brrr.cash_returned);
    println!("  BRRR refi loan: ${:.2}, debt service: ${:.2}/mo", s.brrr.refi_loan, s.brrr.monthly_debt_service);
    println!("  Flip project cost: ${:.2}, cash invested: ${:.2}", s.flip.total_project_cost, s.flip.cash_invested);
    println!("  Hold NOI: ${:.2}, P&I: ${:.2}/mo", s.hold.operating.noi, s.hold.monthly_payment);
}
