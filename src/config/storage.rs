//! Invoice storage configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON invoice ledger.
    #[serde(default = "default_invoices_path")]
    pub invoices_path: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.invoices_path.trim().is_empty() {
            return Err(ValidationError::EmptyInvoicesPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            invoices_path: default_invoices_path(),
        }
    }
}

fn default_invoices_path() -> String {
    "data/invoices.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_rejected() {
        let config = StorageConfig {
            invoices_path: "  ".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyInvoicesPath)
        ));
    }
}
