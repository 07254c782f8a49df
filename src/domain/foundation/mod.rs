//! Shared building blocks: identifiers, timestamps, errors, and the
//! state machine trait used by lifecycle enums.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{InvoiceId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
