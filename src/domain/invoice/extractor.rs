//! Regex-grammar extraction of invoice fields from a single utterance.
//!
//! A declarative table maps each scalar field to a compiled pattern and a
//! setter; adding a field never touches control flow. The first match wins
//! per field. Values that fail to parse skip just that field (or item) -
//! partial success is the norm, since one utterance usually sets only a
//! couple of fields.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::patch::{DraftPatch, ItemPatch};

/// Scalar fields the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarField {
    InvoiceNumber,
    CustomerName,
    CustomerEmail,
    CustomerGst,
    InvoiceDate,
    DueDate,
    Currency,
    TaxPercent,
    ShippingFee,
    Discount,
    DiscountCode,
}

struct FieldRule {
    field: ScalarField,
    pattern: &'static Lazy<Regex>,
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: Lazy<Regex> = Lazy::new(|| {
            Regex::new($re).expect(concat!("invalid pattern: ", $re))
        });
    };
}

pattern!(
    INVOICE_NUMBER,
    r"(?i)\binvoice\s*(?:number|no\.?)?\s*[:#]\s*([\w/-]+)"
);
pattern!(
    CUSTOMER_NAME,
    r"(?i)\b(?:customer|client|buyer)(?:\s+name)?\s*:\s*([^,;\n]+)"
);
pattern!(
    CUSTOMER_EMAIL,
    r"(?i)\b(?:e-?)?mail\s*:\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})"
);
// GST ids must contain a letter, so a bare rate like "gst: 12.5" is left
// to the tax rule.
pattern!(
    CUSTOMER_GST,
    r"(?i)\bgst(?:in)?(?:\s*(?:number|no\.?|id))?\s*:\s*([0-9]*[A-Za-z][A-Za-z0-9]*)"
);
// Group 1 flags a "due" prefix so `due date:` matches never claim the
// invoice date (the regex crate has no lookbehind).
pattern!(
    INVOICE_DATE,
    r"(?i)\b(due\s+)?(?:invoice\s+)?date\s*:\s*(\d{4}-\d{2}-\d{2})"
);
pattern!(DUE_DATE, r"(?i)\bdue\s*(?:date)?\s*:\s*(\d{4}-\d{2}-\d{2})");
pattern!(CURRENCY, r"(?i)\bcurrency\s*:\s*([A-Za-z]{3})\b");
// The terminator class keeps alphanumeric GST ids ("gst: 29ABCDE...")
// from being misread as a tax rate.
pattern!(
    TAX_PERCENT,
    r"(?i)\b(?:tax|gst)\s*(?:percent|rate)?\s*:?\s*(\d+(?:\.\d+)?)\s*%?(?:[\s,;.]|$)"
);
pattern!(
    SHIPPING_FEE,
    r"(?i)\bshipping(?:\s+(?:fee|charge|cost))?\s*:?\s*(\d+(?:\.\d+)?)"
);
pattern!(DISCOUNT, r"(?i)\bdiscount\s*:?\s*(\d+(?:\.\d+)?)");
pattern!(
    DISCOUNT_CODE,
    r"(?i)\b(?:discount|coupon|promo)\s*code\s*:?\s*([A-Za-z0-9_-]+)"
);
pattern!(
    LINE_ITEM,
    r"(?i)\b(\d+(?:\.\d+)?)\s*x\s*([^@]+?)\s*@\s*(\d+(?:\.\d+)?)"
);

static FIELD_RULES: &[FieldRule] = &[
    FieldRule { field: ScalarField::InvoiceNumber, pattern: &INVOICE_NUMBER },
    FieldRule { field: ScalarField::CustomerName, pattern: &CUSTOMER_NAME },
    FieldRule { field: ScalarField::CustomerEmail, pattern: &CUSTOMER_EMAIL },
    FieldRule { field: ScalarField::CustomerGst, pattern: &CUSTOMER_GST },
    FieldRule { field: ScalarField::InvoiceDate, pattern: &INVOICE_DATE },
    FieldRule { field: ScalarField::DueDate, pattern: &DUE_DATE },
    FieldRule { field: ScalarField::Currency, pattern: &CURRENCY },
    FieldRule { field: ScalarField::TaxPercent, pattern: &TAX_PERCENT },
    FieldRule { field: ScalarField::ShippingFee, pattern: &SHIPPING_FEE },
    FieldRule { field: ScalarField::Discount, pattern: &DISCOUNT },
    FieldRule { field: ScalarField::DiscountCode, pattern: &DISCOUNT_CODE },
];

/// Extracts structured fields and line items from one utterance.
///
/// Pure: same utterance in, same patch out.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Runs every field rule and the line-item grammar over the utterance.
    pub fn extract(&self, utterance: &str) -> DraftPatch {
        let mut patch = DraftPatch::default();
        for rule in FIELD_RULES {
            if let Some(caps) = first_match(rule, utterance) {
                apply_capture(&mut patch, rule.field, &caps);
            }
        }
        patch.items = extract_items(utterance);
        patch
    }
}

/// First capture for a rule; the invoice date rule additionally skips
/// matches carrying the `due` marker group.
fn first_match<'t>(rule: &FieldRule, utterance: &'t str) -> Option<Captures<'t>> {
    match rule.field {
        ScalarField::InvoiceDate => rule
            .pattern
            .captures_iter(utterance)
            .find(|caps| caps.get(1).is_none()),
        _ => rule.pattern.captures(utterance),
    }
}

fn apply_capture(patch: &mut DraftPatch, field: ScalarField, caps: &Captures<'_>) {
    let group = if field == ScalarField::InvoiceDate { 2 } else { 1 };
    let raw = match caps.get(group) {
        Some(m) => m.as_str().trim(),
        None => return,
    };
    match field {
        ScalarField::InvoiceNumber => patch.invoice_number = non_empty(raw),
        ScalarField::CustomerName => patch.customer_name = non_empty(raw),
        ScalarField::CustomerEmail => patch.customer_email = non_empty(raw),
        ScalarField::CustomerGst => patch.customer_gst = non_empty(raw),
        ScalarField::InvoiceDate => patch.invoice_date = parse_date(raw),
        ScalarField::DueDate => patch.due_date = parse_date(raw),
        ScalarField::Currency => patch.currency = non_empty(&raw.to_uppercase()),
        ScalarField::TaxPercent => patch.tax_percent = parse_number(raw),
        ScalarField::ShippingFee => patch.shipping_fee = parse_number(raw),
        ScalarField::Discount => patch.discount = parse_number(raw),
        ScalarField::DiscountCode => patch.discount_code = non_empty(raw),
    }
}

/// All `<qty> x <name> @ <price>` matches, left to right. Matches whose
/// numbers fail to parse are dropped without affecting their neighbours.
fn extract_items(utterance: &str) -> Vec<ItemPatch> {
    LINE_ITEM
        .captures_iter(utterance)
        .filter_map(|caps| {
            let quantity = parse_number(caps.get(1)?.as_str())?;
            let name = caps.get(2)?.as_str().trim();
            let unit_price = parse_number(caps.get(3)?.as_str())?;
            if name.is_empty() || quantity <= Decimal::ZERO {
                return None;
            }
            Some(ItemPatch {
                name: name.to_string(),
                quantity,
                unit_price,
            })
        })
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
