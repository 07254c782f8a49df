use async_trait::async_trait;

use super::ProviderError;

/// Answers off-topic small talk when no invoice work is in flight.
///
/// Purely conversational; implementations must not mutate any draft state.
#[async_trait]
pub trait AssistantProvider: Send + Sync {
    async fn respond(&self, utterance: &str) -> Result<String, ProviderError>;
}
