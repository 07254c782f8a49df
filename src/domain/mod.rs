//! Domain layer - the invoice-building core.
//!
//! Pure business logic with no I/O: extraction, merging, validation,
//! rendering, session drafts, and the conversation phase machine.

pub mod conversation;
pub mod foundation;
pub mod invoice;
pub mod session;
