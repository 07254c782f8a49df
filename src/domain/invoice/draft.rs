//! The in-progress invoice assembled across conversation turns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::InvoiceItem;

/// Deployment defaults applied to every fresh draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftDefaults {
    pub currency: String,
    pub tax_percent: Decimal,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            tax_percent: Decimal::ZERO,
        }
    }
}

/// Session-scoped mutable invoice draft.
///
/// Created empty on first reference to a session, mutated exclusively
/// through [`super::DraftUpdater`], and destroyed when finalized or when the
/// session is cleared. Monetary fields keep full precision; rounding happens
/// at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_gst: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub currency: String,
    pub tax_percent: Decimal,
    pub shipping_fee: Decimal,
    pub discount: Decimal,
    pub discount_code: Option<String>,
    pub items: Vec<InvoiceItem>,
}

impl InvoiceDraft {
    /// Creates an empty draft carrying the deployment defaults.
    pub fn with_defaults(defaults: &DraftDefaults) -> Self {
        Self {
            currency: defaults.currency.clone(),
            tax_percent: defaults.tax_percent,
            ..Self::default()
        }
    }

    /// True once at least one item has been captured.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            invoice_number: None,
            customer_name: None,
            customer_email: None,
            customer_gst: None,
            invoice_date: None,
            due_date: None,
            currency: "INR".to_string(),
            tax_percent: Decimal::ZERO,
            shipping_fee: Decimal::ZERO,
            discount: Decimal::ZERO,
            discount_code: None,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_draft_is_empty_with_inr() {
        let draft = InvoiceDraft::default();
        assert_eq!(draft.currency, "INR");
        assert_eq!(draft.tax_percent, Decimal::ZERO);
        assert!(!draft.has_items());
        assert!(draft.customer_name.is_none());
    }

    #[test]
    fn with_defaults_applies_deployment_profile() {
        let defaults = DraftDefaults {
            currency: "USD".to_string(),
            tax_percent: Decimal::from_str("18").unwrap(),
        };
        let draft = InvoiceDraft::with_defaults(&defaults);
        assert_eq!(draft.currency, "USD");
        assert_eq!(draft.tax_percent, Decimal::from_str("18").unwrap());
    }
}
