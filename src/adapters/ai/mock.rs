//! Mock AI providers for tests.
//!
//! Both mocks hand out queued responses in FIFO order and record the calls
//! they receive, so tests can script provider behavior and assert on it.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::invoice::{DraftPatch, InvoiceDraft};
use crate::ports::{AssistantProvider, ExtractionProvider, ProviderError};

/// Scriptable [`ExtractionProvider`].
#[derive(Default)]
pub struct MockExtractionProvider {
    queued: Mutex<VecDeque<Result<DraftPatch, ProviderError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockExtractionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a patch to return on the next call.
    pub fn queue_patch(&self, patch: DraftPatch) {
        self.queued
            .lock()
            .expect("queue lock")
            .push_back(Ok(patch));
    }

    /// Queues an error to return on the next call.
    pub fn queue_error(&self, error: ProviderError) {
        self.queued
            .lock()
            .expect("queue lock")
            .push_back(Err(error));
    }

    /// Utterances received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ExtractionProvider for MockExtractionProvider {
    async fn propose_patch(
        &self,
        _draft: &InvoiceDraft,
        utterance: &str,
    ) -> Result<DraftPatch, ProviderError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(utterance.to_string());

        self.queued
            .lock()
            .expect("queue lock")
            .pop_front()
            .unwrap_or_else(|| Ok(DraftPatch::default()))
    }
}

/// Scriptable [`AssistantProvider`].
#[derive(Default)]
pub struct MockAssistantProvider {
    queued: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockAssistantProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.queued
            .lock()
            .expect("queue lock")
            .push_back(Ok(reply.into()));
    }

    pub fn queue_error(&self, error: ProviderError) {
        self.queued
            .lock()
            .expect("queue lock")
            .push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl AssistantProvider for MockAssistantProvider {
    async fn respond(&self, utterance: &str) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(utterance.to_string());

        self.queued
            .lock()
            .expect("queue lock")
            .pop_front()
            .unwrap_or_else(|| Ok("Hello! How can I help?".to_string()))
    }
}
