//! Partial field sets produced by extraction.
//!
//! Both the local regex extractor and the external LLM fallback speak this
//! shape; [`super::DraftUpdater`] applies either through the same merge
//! contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A candidate line item inside a patch, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// Fields extracted from one utterance (or proposed by the LLM fallback).
///
/// Absent fields mean "no new information", never "erase the old value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPatch {
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_gst: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub currency: Option<String>,
    pub tax_percent: Option<Decimal>,
    pub shipping_fee: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub discount_code: Option<String>,
    pub items: Vec<ItemPatch>,
}

impl DraftPatch {
    /// True when the patch carries no information at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Structural validation for externally supplied patches.
    ///
    /// Scalar monetary fields must be non-negative; a violation rejects the
    /// whole patch (the updater then falls back to local extraction for the
    /// turn). Item-level problems are not checked here: bad items are
    /// skipped individually during application, same as local extraction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("tax_percent", self.tax_percent),
            ("shipping_fee", self.shipping_fee),
            ("discount", self.discount),
        ] {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(ValidationError::negative(field, v));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_patch_is_empty() {
        assert!(DraftPatch::default().is_empty());
        let patch = DraftPatch {
            customer_name: Some("Jane".to_string()),
            ..DraftPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn validate_rejects_negative_monetary_fields() {
        let patch = DraftPatch {
            discount: Some(Decimal::from_str("-5").unwrap()),
            ..DraftPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_and_positive_values() {
        let patch = DraftPatch {
            tax_percent: Some(Decimal::ZERO),
            shipping_fee: Some(Decimal::from(500)),
            ..DraftPatch::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn deserializes_the_llm_json_shape() {
        let json = r#"{
            "customer_name": "John Doe",
            "customer_email": "john@example.com",
            "tax_percent": 18,
            "items": [{"name": "Laptop", "quantity": 2, "unit_price": 50000}]
        }"#;
        let patch: DraftPatch = serde_json::from_str(json).unwrap();
        assert_eq!(patch.customer_name.as_deref(), Some("John Doe"));
        assert_eq!(patch.items.len(), 1);
        assert_eq!(patch.items[0].quantity, Decimal::from(2));
        assert!(patch.invoice_number.is_none());
    }

    #[test]
    fn unparseable_shape_is_an_error_not_a_panic() {
        let json = r#"{"items": "not a list"}"#;
        assert!(serde_json::from_str::<DraftPatch>(json).is_err());
    }
}
