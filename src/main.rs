use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use invoice_assistant::adapters::ai::{GeminiConfig, GeminiProvider};
use invoice_assistant::adapters::http::{api_routes, AppState};
use invoice_assistant::adapters::storage::JsonFileRepository;
use invoice_assistant::application::ChatHandler;
use invoice_assistant::config::AppConfig;
use invoice_assistant::domain::invoice::ValidationEngine;
use invoice_assistant::domain::session::DraftStore;
use invoice_assistant::ports::{AssistantProvider, ExtractionProvider, InvoiceRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let store = Arc::new(DraftStore::new(config.invoice.draft_defaults()));
    let validator = ValidationEngine::new(config.invoice.profile);
    let repository: Arc<dyn InvoiceRepository> =
        Arc::new(JsonFileRepository::new(&config.storage.invoices_path));

    let mut chat = ChatHandler::new(Arc::clone(&store), validator, Arc::clone(&repository));

    if config.ai.has_api_key() {
        let gemini_config = config
            .ai
            .api_key
            .as_deref()
            .map(GeminiConfig::new)
            .map(|c| {
                c.with_model(&config.ai.model)
                    .with_assistant_model(&config.ai.assistant_model)
                    .with_base_url(&config.ai.base_url)
                    .with_timeout(Duration::from_secs(config.ai.timeout_secs))
            });
        if let Some(gemini_config) = gemini_config {
            let provider = Arc::new(GeminiProvider::new(gemini_config)?);
            let extraction: Arc<dyn ExtractionProvider> = provider.clone();
            let assistant: Arc<dyn AssistantProvider> = provider;
            chat = chat
                .with_extraction_provider(extraction)
                .with_assistant_provider(assistant);
            info!(model = %config.ai.model, "AI extraction enabled");
        }
    } else {
        warn!("no AI API key configured, running with local extraction only");
    }

    let state = AppState::new(Arc::new(chat), repository);
    let router = api_routes(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.bind_addr();
    info!(%addr, "invoice assistant listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
