//! Per-strategy calculator assumptions with documented defaults
//!
//! Percentages are fractions in [0, 1]; the ×100 conversion belongs to
//! whatever displays them.

mod brrr;
mod flip;
mod hold;
mod operating;
pub mod loader;

pub use brrr::BrrrAssumptions;
pub use flip::FlipAssumptions;
pub use hold::HoldAssumptions;
pub use operating::OperatingExpenses;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for the three independent assumption sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub brrr: BrrrAssumptions,
    pub flip: FlipAssumptions,
    pub hold: HoldAssumptions,
}

impl Assumptions {
    /// Load overrides from the default location (data/assumptions.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Apply `strategy,field,value` overrides from a CSV file on top of the defaults
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut assumptions = Self::default();
        loader::apply_csv_overrides(std::fs::File::open(path)?, &mut assumptions)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Load a (possibly partial) JSON document; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let assumptions = loader::load_json(std::fs::File::open(path)?)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Dispatch on file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_path(path),
            Some("csv") => Self::from_csv_path(path),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Override a single field by name
    pub fn set(&mut self, strategy: &str, field: &str, value: &str) -> Result<()> {
        match strategy.to_ascii_lowercase().as_str() {
            "brrr" => self.brrr.set(field, value),
            "flip" => self.flip.set(field, value),
            "hold" => self.hold.set(field, value),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }

    /// Range-check every field. Only the loaders call this; the
    /// calculators accept whatever they are given.
    pub fn validate(&self) -> Result<()> {
        self.brrr.validate()?;
        self.flip.validate()?;
        self.hold.validate()
    }
}

fn parse_f64(field: &str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| Error::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(field: &str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| Error::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn check_fraction(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field: field.to_string(),
            value,
            expected: "fraction in [0, 1]",
        })
    }
}

/// Longest amortization term accepted from overrides
pub const MAX_TERM_YEARS: u32 = 50;

fn check_term(field: &str, years: u32) -> Result<()> {
    if years <= MAX_TERM_YEARS {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field: field.to_string(),
            value: years as f64,
            expected: "term of at most 50 years",
        })
    }
}

pub(crate) fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field: field.to_string(),
            value,
            expected: "non-negative amount",
        })
    }
}
