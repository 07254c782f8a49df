//! Gemini Provider - Google Generative Language API client.
//!
//! Implements both AI ports: structured draft extraction and the
//! conversational fallback. Requests use the `generateContent` endpoint;
//! responses are plain text that may wrap JSON in markdown fences, which
//! [`extract_json_object`] unwraps.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::invoice::{DraftPatch, InvoiceDraft};
use crate::ports::{AssistantProvider, ExtractionProvider, ProviderError};

use super::response::extract_json_object;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: String,
    /// Model used for structured extraction.
    pub model: String,
    /// Model used for conversational replies.
    pub assistant_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            assistant_model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_assistant_model(mut self, model: impl Into<String>) -> Self {
        self.assistant_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("http client: {e}")))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        )
    }

    /// Sends a single-turn prompt and returns the first candidate's text.
    async fn generate(&self, model: &str, prompt: String) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.config.timeout.as_secs())
                } else {
                    ProviderError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Unavailable(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ProviderError::InvalidResponse("no candidates in response".into()))
    }

    fn extraction_prompt(draft: &InvoiceDraft, utterance: &str) -> String {
        let draft_json =
            serde_json::to_string_pretty(draft).unwrap_or_else(|_| "{}".to_string());

        format!(
            "You are an invoice data extractor. Given the current invoice draft and a \
             user message, return ONLY a JSON object with the fields the message changes.\n\
             \n\
             Current draft:\n{draft_json}\n\
             \n\
             User message: {utterance}\n\
             \n\
             Rules:\n\
             - Include only fields the message explicitly provides or changes.\n\
             - Allowed keys: invoice_number, customer_name, customer_email, customer_gst, \
               invoice_date, due_date, currency, tax_percent, shipping_fee, discount, \
               discount_code, items.\n\
             - items is a list of {{\"name\", \"quantity\", \"unit_price\"}} objects.\n\
             - Dates must be YYYY-MM-DD. Quantities and amounts must be plain numbers.\n\
             - If the message changes nothing, return {{}}.\n\
             - Return the JSON object only, no commentary."
        )
    }
}

#[async_trait]
impl ExtractionProvider for GeminiProvider {
    async fn propose_patch(
        &self,
        draft: &InvoiceDraft,
        utterance: &str,
    ) -> Result<DraftPatch, ProviderError> {
        let prompt = Self::extraction_prompt(draft, utterance);
        let text = self.generate(&self.config.model, prompt).await?;

        debug!(model = %self.config.model, "received extraction response");

        let json = extract_json_object(&text).ok_or_else(|| {
            ProviderError::InvalidResponse("no JSON object in model output".into())
        })?;

        serde_json::from_str(json).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AssistantProvider for GeminiProvider {
    async fn respond(&self, utterance: &str) -> Result<String, ProviderError> {
        let prompt = format!(
            "You are a friendly billing assistant for a small business. Reply briefly \
             and helpfully, and remind the user you can build invoices for them.\n\
             \n\
             User message: {utterance}"
        );
        self.generate(&self.config.assistant_model, prompt).await
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
