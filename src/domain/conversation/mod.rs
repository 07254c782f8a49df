//! Conversation control-flow concepts: the draft lifecycle phase and
//! invoice-relevance routing.

mod phase;
mod relevance;

pub use phase::DraftPhase;
pub use relevance::is_invoice_relevant;
