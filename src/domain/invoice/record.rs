//! The persisted form of a finalized invoice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InvoiceId, Timestamp};

use super::draft::InvoiceDraft;
use super::item::InvoiceItem;
use super::render::RenderedInvoice;

/// A finalized invoice: the draft's fields frozen together with the
/// computed figures at the moment of finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedInvoice {
    pub invoice_id: InvoiceId,
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
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
    pub finalized_at: Timestamp,
}

impl FinalizedInvoice {
    /// Freezes a draft and its rendered figures into a record with a fresh
    /// id.
    pub fn new(draft: &InvoiceDraft, rendered: &RenderedInvoice) -> Self {
        Self {
            invoice_id: InvoiceId::new(),
            invoice_number: draft.invoice_number.clone(),
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            customer_gst: draft.customer_gst.clone(),
            invoice_date: draft.invoice_date,
            due_date: draft.due_date,
            currency: draft.currency.clone(),
            tax_percent: draft.tax_percent,
            shipping_fee: rendered.shipping_fee,
            discount: rendered.discount,
            discount_code: draft.discount_code.clone(),
            items: draft.items.clone(),
            subtotal: rendered.subtotal,
            tax_amount: rendered.tax_amount,
            grand_total: rendered.grand_total,
            finalized_at: Timestamp::now(),
        }
    }

    /// True when `key` names this record by generated id or by the
    /// user-supplied invoice number.
    pub fn matches(&self, key: &str) -> bool {
        self.invoice_id.to_string() == key
            || self.invoice_number.as_deref() == Some(key)
    }
}
