//! Session-scoped draft ownership.

mod store;

pub use store::DraftStore;
