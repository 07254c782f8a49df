//! JSON file invoice repository.
//!
//! Keeps all finalized invoices in a single pretty-printed JSON array on
//! disk. Saves are read-modify-write under a mutex; a missing or corrupt
//! file is treated as an empty ledger rather than a hard error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::FinalizedInvoice;
use crate::ports::{InvoiceRepository, RepositoryError};

pub struct JsonFileRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles on the backing file.
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<FinalizedInvoice>, RepositoryError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::Io(e.to_string())),
        };

        match serde_json::from_str(&contents) {
            Ok(invoices) => Ok(invoices),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "invoice file corrupt, starting fresh");
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, invoices: &[FinalizedInvoice]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepositoryError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(invoices)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))
    }
}

#[async_trait]
impl InvoiceRepository for JsonFileRepository {
    async fn save(&self, invoice: &FinalizedInvoice) -> Result<InvoiceId, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut invoices = self.read_all().await?;
        invoices.push(invoice.clone());
        self.write_all(&invoices).await?;

        Ok(invoice.invoice_id)
    }

    async fn list(&self) -> Result<Vec<FinalizedInvoice>, RepositoryError> {
        self.read_all().await
    }

    async fn get(&self, key: &str) -> Result<Option<FinalizedInvoice>, RepositoryError> {
        let invoices = self.read_all().await?;
        Ok(invoices.into_iter().find(|inv| inv.matches(key)))
    }
}
