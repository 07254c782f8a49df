//! The invoice-building core.
//!
//! Extraction, merging, draft mutation, validation, and rendering. All of
//! this is pure: the only clock input (today's date for defaulting) is
//! passed in by the caller.

mod draft;
mod extractor;
mod item;
mod merge;
mod patch;
mod record;
mod render;
mod updater;
mod validation;

pub use draft::{DraftDefaults, InvoiceDraft};
pub use extractor::FieldExtractor;
pub use item::InvoiceItem;
pub use merge::merge_items;
pub use patch::{DraftPatch, ItemPatch};
pub use record::FinalizedInvoice;
pub use render::{RenderedInvoice, Renderer};
pub use updater::DraftUpdater;
pub use validation::{MissingField, ValidationEngine, ValidationProfile, ValidationReport};
