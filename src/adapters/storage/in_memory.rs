//! In-memory invoice repository for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::FinalizedInvoice;
use crate::ports::{InvoiceRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
    invoices: RwLock<Vec<FinalizedInvoice>>,
    fail_saves: AtomicBool,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `save` calls fail, for exercising error paths.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.invoices.read().await.len()
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn save(&self, invoice: &FinalizedInvoice) -> Result<InvoiceId, RepositoryError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io("save disabled".to_string()));
        }
        self.invoices.write().await.push(invoice.clone());
        Ok(invoice.invoice_id)
    }

    async fn list(&self) -> Result<Vec<FinalizedInvoice>, RepositoryError> {
        Ok(self.invoices.read().await.clone())
    }

    async fn get(&self, key: &str) -> Result<Option<FinalizedInvoice>, RepositoryError> {
        Ok(self
            .invoices
            .read()
            .await
            .iter()
            .find(|inv| inv.matches(key))
            .cloned())
    }
}
