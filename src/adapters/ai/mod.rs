//! AI adapters - Gemini-backed providers plus test doubles.

mod gemini;
mod mock;
mod response;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::{MockAssistantProvider, MockExtractionProvider};
pub use response::extract_json_object;
