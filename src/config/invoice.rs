//! Invoice policy configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::invoice::{DraftDefaults, ValidationProfile};

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceConfig {
    /// Validation strictness: `relaxed` or `strict`.
    #[serde(default)]
    pub profile: ValidationProfile,

    /// Currency used when the conversation never names one.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Tax percentage applied when the conversation never names one.
    #[serde(default = "default_tax_percent")]
    pub default_tax_percent: Decimal,
}

impl InvoiceConfig {
    pub fn draft_defaults(&self) -> DraftDefaults {
        DraftDefaults {
            currency: self.default_currency.clone(),
            tax_percent: self.default_tax_percent,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_currency.trim().len() != 3 {
            return Err(ValidationError::InvalidCurrency);
        }
        if self.default_tax_percent.is_sign_negative() {
            return Err(ValidationError::NegativeTaxPercent);
        }
        Ok(())
    }
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            profile: ValidationProfile::default(),
            default_currency: default_currency(),
            default_tax_percent: default_tax_percent(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_tax_percent() -> Decimal {
    Decimal::from(18)
}
