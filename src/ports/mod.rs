//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, the domain talks to the outside world
//! (LLM extraction and assistant fallbacks, the persistence sink) through
//! these contracts; adapters implement them.

mod assistant_provider;
mod extraction_provider;
mod invoice_repository;

pub use assistant_provider::AssistantProvider;
pub use extraction_provider::ExtractionProvider;
pub use invoice_repository::{InvoiceRepository, RepositoryError};

use thiserror::Error;

/// Failures from the AI provider ports.
///
/// Both providers are fallible, bounded-latency collaborators; every error
/// here is recoverable by design (the caller falls back to local behavior).
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("provider request timed out after {0} seconds")]
    Timeout(u64),
}
