//! Application layer - orchestrates domain logic behind use cases.

mod chat;

pub use chat::{ChatCommand, ChatError, ChatHandler, ChatResponse, ResponseKind};
