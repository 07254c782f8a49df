//! In-memory store owning one draft per session.
//!
//! Sessions are independent map entries with no cross-entry invariants.
//! Each draft sits behind its own mutex: mutation for one session is
//! serialized while distinct sessions proceed in parallel. Callers must
//! not hold a draft lock across an external (LLM or persistence) call.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::SessionId;
use crate::domain::invoice::{DraftDefaults, InvoiceDraft};

/// Owns the per-session drafts; created empty on first access, removed on
/// finalization or explicit clear.
#[derive(Debug)]
pub struct DraftStore {
    defaults: DraftDefaults,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<InvoiceDraft>>>>,
}

impl DraftStore {
    /// Creates a store whose fresh drafts carry the deployment defaults.
    pub fn new(defaults: DraftDefaults) -> Self {
        Self {
            defaults,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the session's draft cell, creating an empty draft on first
    /// reference.
    pub async fn checkout(&self, id: &SessionId) -> Arc<Mutex<InvoiceDraft>> {
        if let Some(cell) = self.sessions.read().await.get(id) {
            return Arc::clone(cell);
        }
        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(id.clone()).or_insert_with(|| {
            Arc::new(Mutex::new(InvoiceDraft::with_defaults(&self.defaults)))
        }))
    }

    /// Snapshot of the session's draft without creating one.
    pub async fn peek(&self, id: &SessionId) -> Option<InvoiceDraft> {
        let cell = {
            let sessions = self.sessions.read().await;
            sessions.get(id).cloned()
        };
        match cell {
            Some(cell) => Some(cell.lock().await.clone()),
            None => None,
        }
    }

    /// Removes the session, returning its final draft state.
    pub async fn remove(&self, id: &SessionId) -> Option<InvoiceDraft> {
        let cell = self.sessions.write().await.remove(id)?;
        let draft = cell.lock().await.clone();
        Some(draft)
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new(DraftDefaults::default())
    }
}
