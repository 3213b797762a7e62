//! Load property batches from CSV
//!
//! Expected header:
//! `address,estimate,arv,rent,post_improvement_rent,beds,baths,sqft,year_built,property_type,as_of`
//!
//! Only `address` and `estimate` are required; blank cells mean the
//! collaborator had no figure for that property.

use super::{
    AdjustedValuationSnapshot, PropertyRecord, RentEstimate, SubjectAttributes, ValuationSnapshot,
};
use crate::error::Result;
use chrono::NaiveDate;
use csv::Reader;
use log::info;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    address: String,
    estimate: f64,
    #[serde(default)]
    arv: Option<f64>,
    #[serde(default)]
    rent: Option<f64>,
    #[serde(default)]
    post_improvement_rent: Option<f64>,
    #[serde(default)]
    beds: Option<u8>,
    #[serde(default)]
    baths: Option<f32>,
    #[serde(default)]
    sqft: Option<u32>,
    #[serde(default)]
    year_built: Option<u16>,
    #[serde(default)]
    property_type: Option<String>,
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

impl CsvRow {
    fn into_record(self) -> Result<PropertyRecord> {
        let subject = SubjectAttributes {
            address: self.address,
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            year_built: self.year_built,
            property_type: self.property_type.filter(|t| !t.is_empty()),
        };

        let rent = match (self.rent, self.post_improvement_rent) {
            (None, None) => None,
            (rent, post) => Some(RentEstimate {
                monthly_rent: rent.unwrap_or(0.0),
                post_improvement_rent: post,
            }),
        };

        let record = PropertyRecord {
            valuation: ValuationSnapshot {
                estimate: self.estimate,
                subject,
                as_of: self.as_of,
            },
            adjusted: self.arv.map(AdjustedValuationSnapshot::new),
            rent,
        };
        // csv happily parses "inf" and "NaN" as f64
        record.validate()?;
        Ok(record)
    }
}

/// Load all properties from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let records = read_all(reader)?;
    info!("loaded {} properties from {}", records.len(), path.display());
    Ok(records)
}

/// Load properties from any reader (e.g., string buffer, request body)
pub fn load_properties_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PropertyRecord>> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<PropertyRecord>> {
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.into_record()?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = "\
address,estimate,arv,rent,post_improvement_rent,beds,baths,sqft,year_built,property_type,as_of
12 Elm St,200000,260000,1500,,3,2,1450,1978,Single Family,2024-03-01
9 Oak Ave,150000,,,,,,,,,
4 Pine Ct,120000,,1100,1300,2,1,900,,Condo,
";

    #[test]
    fn test_load_from_reader() {
        let records = load_properties_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        let elm = &records[0];
        assert_eq!(elm.address(), "12 Elm St");
        assert_eq!(elm.valuation.subject.beds, Some(3));
        assert_eq!(elm.valuation.as_of, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(elm.inputs().arv, 260_000.0);
        assert_eq!(elm.inputs().monthly_rent, 1_500.0);
    }

    #[test]
    fn test_blank_cells_are_absent() {
        let records = load_properties_from_reader(SAMPLE.as_bytes()).unwrap();

        let oak = &records[1];
        assert!(oak.adjusted.is_none());
        assert!(oak.rent.is_none());
        assert!(oak.valuation.subject.property_type.is_none());

        let inputs = oak.inputs();
        assert_eq!(inputs.arv, 150_000.0);
        assert_eq!(inputs.monthly_rent, 0.0);
    }

    #[test]
    fn test_post_improvement_rent_column() {
        let records = load_properties_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records[2].inputs().monthly_rent, 1_300.0);
    }

    #[test]
    fn test_bad_estimate_is_error() {
        let bad = "address,estimate\n1 Main St,lots\n";
        assert!(load_properties_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_non_finite_or_negative_figures_rejected() {
        for bad in [
            "address,estimate\n1 Main St,inf\n",
            "address,estimate\n2 Main St,NaN\n",
            "address,estimate\n3 Main St,-150000\n",
        ] {
            match load_properties_from_reader(bad.as_bytes()) {
                Err(Error::OutOfRange { field, .. }) => assert_eq!(field, "valuation.estimate"),
                other => panic!("expected OutOfRange for {:?}, got {:?}", bad, other),
            }
        }

        let bad_rent = "address,estimate,arv,rent\n4 Main St,100000,,inf\n";
        match load_properties_from_reader(bad_rent.as_bytes()) {
            Err(Error::OutOfRange { field, .. }) => assert_eq!(field, "rent.monthly_rent"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }

        let bad_arv = "address,estimate,arv\n5 Main St,100000,NaN\n";
        assert!(load_properties_from_reader(bad_arv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_sample_file() {
        let records = load_properties("data/sample_properties.csv").expect("Failed to load sample");
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.valuation.estimate > 0.0));
    }
}
