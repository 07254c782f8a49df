use async_trait::async_trait;

use crate::domain::invoice::{DraftPatch, InvoiceDraft};

use super::ProviderError;

/// Proposes structured draft changes for a free-text utterance.
///
/// Implementations see the current draft so they can resolve references
/// ("make that 5", "same email as last time") that the local grammar cannot.
/// Returned patches are advisory: the caller validates them and falls back
/// to local extraction alone when the patch is unusable.
#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    async fn propose_patch(
        &self,
        draft: &InvoiceDraft,
        utterance: &str,
    ) -> Result<DraftPatch, ProviderError>;
}
