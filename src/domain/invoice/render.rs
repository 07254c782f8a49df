//! Deterministic invoice rendering with computed totals.

use rust_decimal::Decimal;
use std::fmt::Write;

use super::draft::InvoiceDraft;

/// Placeholder for absent optional fields, so the layout never shifts.
const NOT_PROVIDED: &str = "Not Provided";

/// A rendered invoice plus its computed figures.
///
/// A value object: computed fresh on every render, never cached or stored
/// as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedInvoice {
    pub text: String,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
    pub shipping_fee: Decimal,
    pub discount: Decimal,
}

/// Renders drafts into human-readable invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the draft.
    ///
    /// Each figure is rounded to 2 decimal places (half-to-even) in order:
    /// per-item line totals, their sum, the tax on that subtotal, then the
    /// grand total. Callers validate before rendering; an incomplete draft
    /// still renders deterministically with placeholders.
    pub fn render(&self, draft: &InvoiceDraft) -> RenderedInvoice {
        let subtotal = draft
            .items
            .iter()
            .map(|item| item.line_total())
            .sum::<Decimal>()
            .round_dp(2);
        let tax_amount = (subtotal * draft.tax_percent / Decimal::ONE_HUNDRED).round_dp(2);
        let grand_total =
            (subtotal + tax_amount + draft.shipping_fee - draft.discount).round_dp(2);

        let text = render_text(draft, subtotal, tax_amount, grand_total);

        RenderedInvoice {
            text,
            subtotal,
            tax_amount,
            grand_total,
            shipping_fee: draft.shipping_fee.round_dp(2),
            discount: draft.discount.round_dp(2),
        }
    }
}

fn render_text(
    draft: &InvoiceDraft,
    subtotal: Decimal,
    tax_amount: Decimal,
    grand_total: Decimal,
) -> String {
    let mut out = String::new();
    let cur = &draft.currency;

    let _ = writeln!(
        out,
        "**Invoice {}**",
        draft.invoice_number.as_deref().unwrap_or("DRAFT")
    );
    let _ = writeln!(out, "**Customer:** {}", text_or_placeholder(&draft.customer_name));
    let _ = writeln!(out, "**Email:** {}", text_or_placeholder(&draft.customer_email));
    let _ = writeln!(out, "**GSTIN:** {}", text_or_placeholder(&draft.customer_gst));
    let _ = writeln!(
        out,
        "**Date:** {}",
        draft
            .invoice_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    );
    let _ = writeln!(
        out,
        "**Due:** {}",
        draft
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    );

    let _ = writeln!(out, "\n**Line Items**");
    for item in &draft.items {
        let _ = writeln!(
            out,
            "- {} — {} × {:.2} = {:.2}",
            item.name,
            item.quantity.normalize(),
            item.unit_price,
            item.line_total()
        );
    }

    let _ = writeln!(out, "\n**Subtotal:** {} {:.2}", cur, subtotal);
    let _ = writeln!(
        out,
        "**Tax ({}%):** {} {:.2}",
        draft.tax_percent.normalize(),
        cur,
        tax_amount
    );
    let _ = writeln!(out, "**Shipping:** {} {:.2}", cur, draft.shipping_fee);
    match &draft.discount_code {
        Some(code) => {
            let _ = writeln!(out, "**Discount:** -{} {:.2} ({})", cur, draft.discount, code);
        }
        None => {
            let _ = writeln!(out, "**Discount:** -{} {:.2}", cur, draft.discount);
        }
    }
    let _ = write!(out, "**Grand Total:** {} {:.2}", cur, grand_total);

    out
}

fn text_or_placeholder(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_PROVIDED)
}
