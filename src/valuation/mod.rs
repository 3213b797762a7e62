//! Valuation snapshots, rent estimates and property batch loading

mod data;
pub mod loader;

pub use data::{
    AdjustedValuationSnapshot, PropertyCondition, PropertyInputs, PropertyRecord, RentEstimate,
    SubjectAttributes, ValuationAdjustments, ValuationSnapshot,
};
pub use loader::{load_properties, load_properties_from_reader};
