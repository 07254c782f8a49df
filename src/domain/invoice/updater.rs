//! Applies extraction results to a draft.
//!
//! One updater call is one conversation turn: local regex extraction, the
//! optional external (LLM) patch, item merging, then date defaulting. The
//! external patch is applied after local extraction, so for the same scalar
//! field in the same turn the external value wins - it has seen more
//! context.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use super::draft::InvoiceDraft;
use super::extractor::FieldExtractor;
use super::item::InvoiceItem;
use super::merge::merge_items;
use super::patch::{DraftPatch, ItemPatch};

/// Days until payment is due when the user never names a due date.
const DEFAULT_DUE_DAYS: u64 = 7;

/// Transforms `(draft, utterance)` into the updated draft.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftUpdater {
    extractor: FieldExtractor,
}

impl DraftUpdater {
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
        }
    }

    /// Applies one turn's worth of information to the draft.
    ///
    /// Present patch values overwrite the draft's fields; absent values
    /// never erase existing data. A structurally invalid external patch is
    /// discarded for the turn and the local extraction stands alone - the
    /// user sees no error for that fallback.
    pub fn apply(
        &self,
        draft: &mut InvoiceDraft,
        utterance: &str,
        external: Option<DraftPatch>,
        today: NaiveDate,
    ) {
        let local = self.extractor.extract(utterance);
        let external = external.and_then(|patch| match patch.validate() {
            Ok(()) => Some(patch),
            Err(err) => {
                warn!(%err, "discarding malformed external patch, keeping local extraction");
                None
            }
        });

        apply_scalars(draft, &local);
        let mut incoming = validated_items(&local.items);
        if let Some(patch) = &external {
            apply_scalars(draft, patch);
            incoming.extend(validated_items(&patch.items));
        }
        if !incoming.is_empty() {
            draft.items = merge_items(&draft.items, &incoming);
        }

        if draft.invoice_date.is_none() {
            draft.invoice_date = Some(today);
            debug!(%today, "defaulted invoice_date");
        }
        if draft.due_date.is_none() {
            draft.due_date = today.checked_add_days(Days::new(DEFAULT_DUE_DAYS));
        }
    }
}

fn apply_scalars(draft: &mut InvoiceDraft, patch: &DraftPatch) {
    set_text(&mut draft.invoice_number, &patch.invoice_number);
    set_text(&mut draft.customer_name, &patch.customer_name);
    set_text(&mut draft.customer_email, &patch.customer_email);
    set_text(&mut draft.customer_gst, &patch.customer_gst);
    set_text(&mut draft.discount_code, &patch.discount_code);
    if let Some(date) = patch.invoice_date {
        draft.invoice_date = Some(date);
    }
    if let Some(date) = patch.due_date {
        draft.due_date = Some(date);
    }
    if let Some(currency) = &patch.currency {
        let code = currency.trim().to_uppercase();
        if !code.is_empty() {
            draft.currency = code;
        }
    }
    if let Some(tax) = patch.tax_percent {
        draft.tax_percent = tax;
    }
    if let Some(fee) = patch.shipping_fee {
        draft.shipping_fee = fee;
    }
    if let Some(discount) = patch.discount {
        draft.discount = discount;
    }
}

/// Copies a text field when the patch carries a non-blank value.
fn set_text(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            *slot = Some(trimmed.to_string());
        }
    }
}

/// Converts patch items into invoice items, skipping any that violate the
/// item invariants (same recovery as a local parse failure).
fn validated_items(patches: &[ItemPatch]) -> Vec<InvoiceItem> {
    patches
        .iter()
        .filter_map(|p| match InvoiceItem::new(&p.name, p.quantity, p.unit_price) {
            Ok(item) => Some(item),
            Err(err) => {
                debug!(%err, name = %p.name, "skipping invalid item");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn apply(draft: &mut InvoiceDraft, utterance: &str, external: Option<DraftPatch>) {
        DraftUpdater::new().apply(draft, utterance, external, today());
    }

    mod local_extraction {
        use super::*;

        #[test]
        fn one_utterance_can_set_a_single_field() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "email: jane@shop.com", None);
            assert_eq!(draft.customer_email.as_deref(), Some("jane@shop.com"));
            assert!(draft.customer_name.is_none());
        }

        #[test]
        fn repeated_item_mentions_aggregate() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "3x shirt @ 450", None);
            apply(&mut draft, "invoice for 2x Shirt @ 500 please", None);
            assert_eq!(draft.items.len(), 1);
            assert_eq!(draft.items[0].name, "shirt");
            assert_eq!(draft.items[0].quantity, dec("5"));
            assert_eq!(draft.items[0].unit_price, dec("500"));
        }

        #[test]
        fn absent_fields_never_erase_existing_data() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "customer: John Doe", None);
            apply(&mut draft, "2x Laptop @ 50000", None);
            assert_eq!(draft.customer_name.as_deref(), Some("John Doe"));
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn dates_default_to_today_and_today_plus_seven() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "customer: Jane", None);
            assert_eq!(draft.invoice_date, Some(today()));
            assert_eq!(
                draft.due_date,
                NaiveDate::from_ymd_opt(2026, 9, 6)
            );
        }

        #[test]
        fn user_set_dates_are_never_overwritten_by_defaults() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "date: 2026-01-05, due date: 2026-02-01", None);
            apply(&mut draft, "customer: Jane", None);
            assert_eq!(draft.invoice_date, NaiveDate::from_ymd_opt(2026, 1, 5));
            assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2026, 2, 1));
        }
    }

    mod external_patch {
        use super::*;

        #[test]
        fn external_patch_wins_over_local_extraction_in_the_same_turn() {
            let mut draft = InvoiceDraft::default();
            let patch = DraftPatch {
                customer_name: Some("Jonathan Doe".to_string()),
                ..DraftPatch::default()
            };
            apply(&mut draft, "customer: John", Some(patch));
            assert_eq!(draft.customer_name.as_deref(), Some("Jonathan Doe"));
        }

        #[test]
        fn malformed_patch_falls_back_to_local_only() {
            let mut draft = InvoiceDraft::default();
            let patch = DraftPatch {
                customer_name: Some("Evil".to_string()),
                discount: Some(dec("-100")),
                ..DraftPatch::default()
            };
            apply(&mut draft, "customer: John", Some(patch));
            assert_eq!(draft.customer_name.as_deref(), Some("John"));
            assert_eq!(draft.discount, Decimal::ZERO);
        }

        #[test]
        fn items_from_both_sources_are_concatenated_then_merged() {
            let mut draft = InvoiceDraft::default();
            let patch = DraftPatch {
                items: vec![ItemPatch {
                    name: "Laptop".to_string(),
                    quantity: dec("1"),
                    unit_price: dec("48000"),
                }],
                ..DraftPatch::default()
            };
            apply(&mut draft, "2x laptop @ 50000", Some(patch));
            assert_eq!(draft.items.len(), 1);
            assert_eq!(draft.items[0].quantity, dec("3"));
            assert_eq!(draft.items[0].unit_price, dec("48000"));
        }

        #[test]
        fn invalid_patch_items_are_skipped_individually() {
            let mut draft = InvoiceDraft::default();
            let patch = DraftPatch {
                items: vec![
                    ItemPatch {
                        name: "".to_string(),
                        quantity: dec("1"),
                        unit_price: dec("10"),
                    },
                    ItemPatch {
                        name: "Mouse".to_string(),
                        quantity: dec("2"),
                        unit_price: dec("700"),
                    },
                ],
                ..DraftPatch::default()
            };
            apply(&mut draft, "add these", Some(patch));
            assert_eq!(draft.items.len(), 1);
            assert_eq!(draft.items[0].name, "Mouse");
        }

        #[test]
        fn blank_patch_strings_are_treated_as_absent() {
            let mut draft = InvoiceDraft::default();
            apply(&mut draft, "customer: Jane", None);
            let patch = DraftPatch {
                customer_name: Some("   ".to_string()),
                ..DraftPatch::default()
            };
            apply(&mut draft, "nothing new", Some(patch));
            assert_eq!(draft.customer_name.as_deref(), Some("Jane"));
        }
    }

    #[test]
    fn identical_turns_on_fresh_drafts_produce_identical_drafts() {
        let utterance = "customer: Jane, 2x Pen @ 10, tax: 18";
        let mut a = InvoiceDraft::default();
        let mut b = InvoiceDraft::default();
        apply(&mut a, utterance, None);
        apply(&mut b, utterance, None);
        assert_eq!(a, b);
    }
}
