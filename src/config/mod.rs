//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables via the
//! `config` and `dotenvy` crates. Variables carry the `INVOICE_ASSISTANT`
//! prefix with `__` separating nested values:
//!
//! - `INVOICE_ASSISTANT__SERVER__PORT=3000` -> `server.port = 3000`
//! - `INVOICE_ASSISTANT__AI__API_KEY=...` -> `ai.api_key = ...`

mod ai;
mod error;
mod invoice;
mod server;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use invoice::InvoiceConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration. Every section has workable defaults, so
/// the server runs with no environment at all (AI features stay off until
/// an API key is provided).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub invoice: InvoiceConfig,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` if present).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INVOICE_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.storage.validate()?;
        self.invoice.validate()?;
        Ok(())
    }
}
