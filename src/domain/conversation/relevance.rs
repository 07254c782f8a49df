//! Routing test: does an utterance belong to the invoice pipeline?

/// Keywords that mark an utterance as invoice talk.
const INVOICE_KEYWORDS: &[&str] = &["invoice", "bill", "checkout", "gst", "tax"];

/// True when the utterance should be routed through the draft pipeline.
///
/// Matches any invoice keyword or an `@` (emails and `qty x name @ price`
/// items both carry one). The controller additionally applies sticky mode:
/// once a session's draft has items, every utterance is routed regardless
/// of this check.
pub fn is_invoice_relevant(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    lowered.contains('@') || INVOICE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
