//! Required-field validation and follow-up suggestions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::InvoiceDraft;

/// Which fields block finalization.
///
/// Chosen once at engine construction, not per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    /// Customer name, email and at least one item.
    #[default]
    Relaxed,
    /// Relaxed plus the invoice number.
    Strict,
}

/// A field that blocks finalization while absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    InvoiceNumber,
    CustomerName,
    CustomerEmail,
    Items,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::InvoiceNumber => "invoice_number",
            MissingField::CustomerName => "customer_name",
            MissingField::CustomerEmail => "customer_email",
            MissingField::Items => "items",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of validating a draft: blocking fields plus nice-to-have prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing: Vec<MissingField>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// True when nothing blocks finalization.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Computes missing required fields and targeted follow-up prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine {
    profile: ValidationProfile,
}

impl ValidationEngine {
    pub fn new(profile: ValidationProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> ValidationProfile {
        self.profile
    }

    /// Validates the draft.
    ///
    /// Missing fields are ordered: invoice number (strict profile only),
    /// name, email, items. Suggestions are generated for absent fields
    /// independent of whether they are required - GST id and discount code
    /// are prompted for but never block.
    pub fn validate(&self, draft: &InvoiceDraft) -> ValidationReport {
        let mut missing = Vec::new();
        if self.profile == ValidationProfile::Strict && is_blank(&draft.invoice_number) {
            missing.push(MissingField::InvoiceNumber);
        }
        if is_blank(&draft.customer_name) {
            missing.push(MissingField::CustomerName);
        }
        if is_blank(&draft.customer_email) {
            missing.push(MissingField::CustomerEmail);
        }
        if draft.items.is_empty() {
            missing.push(MissingField::Items);
        }

        let mut suggestions = Vec::new();
        if is_blank(&draft.customer_name) {
            suggestions.push("What is the customer's name?".to_string());
        }
        if is_blank(&draft.customer_email) {
            suggestions.push("Could you provide their email address?".to_string());
        }
        if is_blank(&draft.customer_gst) {
            suggestions.push(
                "Do you have a GST number to include? (Optional but recommended)".to_string(),
            );
        }
        if is_blank(&draft.discount_code) {
            suggestions
                .push("Do you have any discount codes or offers to apply?".to_string());
        }

        ValidationReport {
            missing,
            suggestions,
        }
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}
