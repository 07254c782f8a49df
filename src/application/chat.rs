//! Chat use case - one handler call per user message.
//!
//! The handler routes each utterance: off-topic messages go to the
//! conversational fallback, invoice-relevant ones (or any message while a
//! draft holds items) flow through extraction, validation and - once the
//! draft is complete - finalization. Draft locks are never held across a
//! provider or repository call.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::conversation::{is_invoice_relevant, DraftPhase};
use crate::domain::foundation::{InvoiceId, SessionId, StateMachine};
use crate::domain::invoice::{
    DraftPatch, DraftUpdater, FinalizedInvoice, InvoiceDraft, Renderer, ValidationEngine,
};
use crate::domain::session::DraftStore;
use crate::ports::{AssistantProvider, ExtractionProvider, InvoiceRepository};

/// Reply shown when the assistant provider is absent or fails.
const DEFAULT_GREETING: &str =
    "Hi! I can help you put together an invoice. Tell me who it's for and what they bought.";

/// One incoming user message.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub session_id: SessionId,
    pub message: String,
}

/// How the UI should render the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Conversational reply, no draft change of note.
    Info,
    /// Draft updated but still missing required fields.
    Warning,
    /// A finalized invoice, rendered in full.
    Invoice,
}

/// The handler's reply for one message.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub text: String,
    pub kind: ResponseKind,
    pub saved_invoice_id: Option<InvoiceId>,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Drives a conversation turn end to end.
pub struct ChatHandler {
    store: Arc<DraftStore>,
    updater: DraftUpdater,
    validator: ValidationEngine,
    renderer: Renderer,
    repository: Arc<dyn InvoiceRepository>,
    extraction: Option<Arc<dyn ExtractionProvider>>,
    assistant: Option<Arc<dyn AssistantProvider>>,
}

impl ChatHandler {
    pub fn new(
        store: Arc<DraftStore>,
        validator: ValidationEngine,
        repository: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            store,
            updater: DraftUpdater::new(),
            validator,
            renderer: Renderer::new(),
            repository,
            extraction: None,
            assistant: None,
        }
    }

    pub fn with_extraction_provider(mut self, provider: Arc<dyn ExtractionProvider>) -> Self {
        self.extraction = Some(provider);
        self
    }

    pub fn with_assistant_provider(mut self, provider: Arc<dyn AssistantProvider>) -> Self {
        self.assistant = Some(provider);
        self
    }

    /// Handles one message for one session.
    pub async fn handle(&self, command: ChatCommand) -> Result<ChatResponse, ChatError> {
        let message = command.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let session_id = command.session_id;

        // Off-topic messages bypass the draft entirely, unless the session
        // already holds line items (then everything is invoice context).
        let snapshot = self.store.peek(&session_id).await;
        let has_items = snapshot.as_ref().map(|d| d.has_items()).unwrap_or(false);
        if !is_invoice_relevant(message) && !has_items {
            return Ok(self.small_talk(message).await);
        }

        let phase = match &snapshot {
            Some(_) => DraftPhase::Blocked,
            None => DraftPhase::Empty,
        };
        let phase = phase
            .transition_to(DraftPhase::Drafting)
            .map_err(|e| ChatError::Internal(e.to_string()))?;
        info!(session = %session_id, ?phase, "processing invoice message");

        // External extraction runs against a snapshot, outside any draft lock.
        let cell = self.store.checkout(&session_id).await;
        let draft_snapshot = cell.lock().await.clone();
        let external = self.propose_patch(&draft_snapshot, message).await;

        let today = Utc::now().date_naive();
        let report = {
            let mut draft = cell.lock().await;
            self.updater.apply(&mut draft, message, external, today);
            self.validator.validate(&draft)
        };

        let phase = phase
            .transition_to(DraftPhase::after_validation(&report))
            .map_err(|e| ChatError::Internal(e.to_string()))?;

        if phase != DraftPhase::Complete {
            let mut text = String::from(
                "I've updated your draft, but I'm still missing some details:\n\n",
            );
            for suggestion in &report.suggestions {
                text.push_str("- ");
                text.push_str(suggestion);
                text.push('\n');
            }
            text.push_str("\nJust type them in and I'll update the bill!");
            return Ok(ChatResponse {
                text,
                kind: ResponseKind::Warning,
                saved_invoice_id: None,
            });
        }

        self.finalize(&session_id, phase).await
    }

    /// Finalizes the draft: the session is cleared first, so even a failed
    /// save never leaves a stale draft behind.
    async fn finalize(
        &self,
        session_id: &SessionId,
        phase: DraftPhase,
    ) -> Result<ChatResponse, ChatError> {
        let draft = self
            .store
            .remove(session_id)
            .await
            .ok_or_else(|| ChatError::Internal("draft vanished before finalization".into()))?;

        let phase = phase
            .transition_to(DraftPhase::Empty)
            .map_err(|e| ChatError::Internal(e.to_string()))?;

        let rendered = self.renderer.render(&draft);
        let invoice = FinalizedInvoice::new(&draft, &rendered);

        match self.repository.save(&invoice).await {
            Ok(id) => {
                info!(session = %session_id, invoice = %id, ?phase, "invoice finalized");
                Ok(ChatResponse {
                    text: format!("Invoice generated successfully!\n\n{}", rendered.text),
                    kind: ResponseKind::Invoice,
                    saved_invoice_id: Some(id),
                })
            }
            Err(err) => {
                warn!(session = %session_id, %err, "invoice save failed, session cleared anyway");
                Ok(ChatResponse {
                    text: format!(
                        "Here is your invoice, but I couldn't save it for later lookup:\n\n{}",
                        rendered.text
                    ),
                    kind: ResponseKind::Invoice,
                    saved_invoice_id: None,
                })
            }
        }
    }

    async fn propose_patch(&self, draft: &InvoiceDraft, message: &str) -> Option<DraftPatch> {
        let provider = self.extraction.as_ref()?;
        match provider.propose_patch(draft, message).await {
            Ok(patch) => Some(patch),
            Err(err) => {
                warn!(%err, "extraction provider failed, using local extraction only");
                None
            }
        }
    }

    async fn small_talk(&self, message: &str) -> ChatResponse {
        let text = match &self.assistant {
            Some(provider) => match provider.respond(message).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!(%err, "assistant provider failed, using default greeting");
                    DEFAULT_GREETING.to_string()
                }
            },
            None => DEFAULT_GREETING.to_string(),
        };
        ChatResponse {
            text,
            kind: ResponseKind::Info,
            saved_invoice_id: None,
        }
    }
}
