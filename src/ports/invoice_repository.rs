use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::FinalizedInvoice;

/// Failures from the invoice persistence port.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("storage i/o error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Append-only sink for finalized invoices.
///
/// Finalization clears the session regardless of the save outcome, so a
/// failed `save` must leave previously stored invoices untouched.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn save(&self, invoice: &FinalizedInvoice) -> Result<InvoiceId, RepositoryError>;

    async fn list(&self) -> Result<Vec<FinalizedInvoice>, RepositoryError>;

    /// Looks up an invoice by its id or its human-facing invoice number.
    async fn get(&self, key: &str) -> Result<Option<FinalizedInvoice>, RepositoryError>;
}
