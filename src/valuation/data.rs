//! Valuation inputs supplied by the external valuation service and rent estimator

use crate::assumptions::check_amount;
use crate::error::Result;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Descriptive facts about the subject property returned with a valuation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectAttributes {
    /// Street address the analysis was run for
    pub address: String,

    #[serde(default)]
    pub beds: Option<u8>,

    #[serde(default)]
    pub baths: Option<f32>,

    /// Living area in square feet
    #[serde(default)]
    pub sqft: Option<u32>,

    #[serde(default)]
    pub year_built: Option<u16>,

    /// e.g. "Single Family", "Condo"
    #[serde(default)]
    pub property_type: Option<String>,
}

impl SubjectAttributes {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

/// Baseline market valuation of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    /// Estimated market value (currency)
    pub estimate: f64,

    #[serde(default)]
    pub subject: SubjectAttributes,

    /// Date the valuation was produced
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl ValuationSnapshot {
    pub fn new(estimate: f64, subject: SubjectAttributes) -> Self {
        Self {
            estimate,
            subject,
            as_of: None,
        }
    }

    /// Estimate must be a finite, non-negative amount
    pub fn validate(&self) -> Result<()> {
        check_amount("valuation.estimate", self.estimate)
    }
}

/// Condition grade passed to the valuation service when requesting an ARV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCondition {
    Poor,
    Fair,
    Average,
    Good,
    Excellent,
}

/// Parameters the after-repair valuation was requested with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationAdjustments {
    pub condition: Option<PropertyCondition>,
    /// Planned renovations, e.g. "kitchen", "roof"
    pub renovations: Vec<String>,
    pub added_beds: u8,
    pub added_baths: f32,
    pub added_sqft: u32,
}

/// Valuation of the property after planned renovations (the ARV)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedValuationSnapshot {
    /// After-repair value (currency)
    pub estimate: f64,

    #[serde(default)]
    pub adjustments: ValuationAdjustments,
}

impl AdjustedValuationSnapshot {
    pub fn new(estimate: f64) -> Self {
        Self {
            estimate,
            adjustments: ValuationAdjustments::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_amount("adjusted.estimate", self.estimate)
    }
}

/// Monthly rent figures from the rent estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentEstimate {
    /// Rent for the property as it stands
    pub monthly_rent: f64,

    /// Rent once the planned improvements are done
    #[serde(default)]
    pub post_improvement_rent: Option<f64>,
}

impl RentEstimate {
    pub fn new(monthly_rent: f64) -> Self {
        Self {
            monthly_rent,
            post_improvement_rent: None,
        }
    }

    pub fn with_improvement(monthly_rent: f64, post_improvement_rent: f64) -> Self {
        Self {
            monthly_rent,
            post_improvement_rent: Some(post_improvement_rent),
        }
    }

    /// Rent used for stabilised operating numbers.
    /// Post-improvement figure wins when the estimator supplied one.
    pub fn stabilized(&self) -> f64 {
        self.post_improvement_rent.unwrap_or(self.monthly_rent)
    }

    pub fn validate(&self) -> Result<()> {
        check_amount("rent.monthly_rent", self.monthly_rent)?;
        match self.post_improvement_rent {
            Some(post) => check_amount("rent.post_improvement_rent", post),
            None => Ok(()),
        }
    }
}

/// Resolved primitive inputs every strategy consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyInputs {
    pub purchase_price: f64,
    /// After-repair value; equals purchase price when no ARV was requested
    pub arv: f64,
    pub monthly_rent: f64,
}

impl PropertyInputs {
    pub fn new(purchase_price: f64, arv: f64, monthly_rent: f64) -> Self {
        Self {
            purchase_price,
            arv,
            monthly_rent,
        }
    }

    /// Apply the fallbacks for missing collaborator data:
    /// ARV defaults to the baseline estimate, rent defaults to 0.
    pub fn resolve(
        valuation: &ValuationSnapshot,
        adjusted: Option<&AdjustedValuationSnapshot>,
        rent: Option<&RentEstimate>,
    ) -> Self {
        let arv = match adjusted {
            Some(a) => a.estimate,
            None => {
                debug!(
                    "no adjusted valuation for '{}', using baseline {:.2} as ARV",
                    valuation.subject.address, valuation.estimate
                );
                valuation.estimate
            }
        };

        let monthly_rent = match rent {
            Some(r) => r.stabilized(),
            None => {
                warn!(
                    "no rent estimate for '{}', rental strategies will use 0",
                    valuation.subject.address
                );
                0.0
            }
        };

        Self::new(valuation.estimate, arv, monthly_rent)
    }
}

/// One property with whatever collaborator data was available for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub valuation: ValuationSnapshot,

    #[serde(default)]
    pub adjusted: Option<AdjustedValuationSnapshot>,

    #[serde(default)]
    pub rent: Option<RentEstimate>,
}

impl PropertyRecord {
    pub fn address(&self) -> &str {
        &self.valuation.subject.address
    }

    pub fn inputs(&self) -> PropertyInputs {
        PropertyInputs::resolve(&self.valuation, self.adjusted.as_ref(), self.rent.as_ref())
    }

    /// Reject NaN, infinite or negative figures before they reach a calculator
    pub fn validate(&self) -> Result<()> {
        self.valuation.validate()?;
        if let Some(adjusted) = &self.adjusted {
            adjusted.validate()?;
        }
        if let Some(rent) = &self.rent {
            rent.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn snapshot() -> ValuationSnapshot {
        ValuationSnapshot::new(200_000.0, SubjectAttributes::new("12 Elm St"))
    }

    #[test]
    fn test_resolve_with_everything() {
        let adjusted = AdjustedValuationSnapshot::new(260_000.0);
        let rent = RentEstimate::new(1_500.0);

        let inputs = PropertyInputs::resolve(&snapshot(), Some(&adjusted), Some(&rent));
        assert_eq!(inputs, PropertyInputs::new(200_000.0, 260_000.0, 1_500.0));
    }

    #[test]
    fn test_resolve_fallbacks() {
        let inputs = PropertyInputs::resolve(&snapshot(), None, None);

        // ARV falls back to the baseline estimate, rent to zero
        assert_eq!(inputs.purchase_price, 200_000.0);
        assert_eq!(inputs.arv, 200_000.0);
        assert_eq!(inputs.monthly_rent, 0.0);
    }

    #[test]
    fn test_post_improvement_rent_preferred() {
        let rent = RentEstimate::with_improvement(1_400.0, 1_750.0);
        assert_eq!(rent.stabilized(), 1_750.0);
        assert_eq!(RentEstimate::new(1_400.0).stabilized(), 1_400.0);
    }

    #[test]
    fn test_record_deserializes_without_optional_parts() {
        let json = r#"{ "valuation": { "estimate": 150000.0, "subject": { "address": "9 Oak Ave" } } }"#;
        let record: PropertyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.address(), "9 Oak Ave");
        assert!(record.adjusted.is_none());
        assert_eq!(record.inputs().arv, 150_000.0);
    }

    #[test]
    fn test_validate_rejects_bad_figures() {
        let mut record = PropertyRecord {
            valuation: snapshot(),
            adjusted: Some(AdjustedValuationSnapshot::new(260_000.0)),
            rent: Some(RentEstimate::with_improvement(1_400.0, 1_750.0)),
        };
        assert!(record.validate().is_ok());

        record.rent = Some(RentEstimate::with_improvement(1_400.0, f64::NAN));
        match record.validate() {
            Err(Error::OutOfRange { field, .. }) => assert_eq!(field, "rent.post_improvement_rent"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }

        record.rent = None;
        record.adjusted = Some(AdjustedValuationSnapshot::new(f64::INFINITY));
        assert!(record.validate().is_err());

        record.adjusted = None;
        record.valuation.estimate = -1.0;
        assert!(record.validate().is_err());

        // Zero is a legitimate figure (e.g. no rent yet)
        assert!(RentEstimate::new(0.0).validate().is_ok());
    }

    #[test]
    fn test_adjustments_deserialize() {
        let json = r#"{ "estimate": 310000.0, "adjustments": { "condition": "good", "renovations": ["kitchen"], "added_beds": 1 } }"#;
        let adjusted: AdjustedValuationSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(adjusted.adjustments.condition, Some(PropertyCondition::Good));
        assert_eq!(adjusted.adjustments.added_beds, 1);
        assert_eq!(adjusted.adjustments.added_sqft, 0);
    }
}
