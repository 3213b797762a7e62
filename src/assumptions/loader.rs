//! Assumption override loading (CSV key/value rows or JSON)

use super::Assumptions;
use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::io::Read;

/// Default path to the assumption overrides file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.csv";

#[derive(Debug, serde::Deserialize)]
struct OverrideRow {
    strategy: String,
    field: String,
    value: String,
}

/// Apply `strategy,field,value` rows to `assumptions`.
/// Later rows win when a field appears twice.
pub fn apply_csv_overrides<R: Read>(reader: R, assumptions: &mut Assumptions) -> Result<usize> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut applied = 0;

    for result in reader.deserialize() {
        let row: OverrideRow = result?;
        assumptions.set(&row.strategy, &row.field, &row.value)?;
        debug!("override {}.{} = {}", row.strategy, row.field, row.value);
        applied += 1;
    }

    Ok(applied)
}

/// Parse a JSON assumptions document. Sections and fields may be omitted.
pub fn load_json<R: Read>(reader: R) -> Result<Assumptions> {
    Ok(serde_json::from_reader(reader)?)
}
