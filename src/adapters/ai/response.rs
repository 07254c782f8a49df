//! Extraction of structured JSON from free-form model output.
//!
//! Models rarely return bare JSON: the object is usually wrapped in a
//! markdown code fence or surrounded by prose. This module digs the first
//! JSON object out of such text.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("json code block pattern")
});

/// Pulls the first JSON object out of model output.
///
/// Tries a fenced ```json block first, then falls back to a balanced-brace
/// scan over the raw text. Returns `None` when no complete object is found.
pub fn extract_json_object(text: &str) -> Option<&str> {
    if let Some(caps) = JSON_CODE_BLOCK.captures(text) {
        if let Some(m) = caps.get(1) {
            return Some(m.as_str());
        }
    }
    balanced_object(text)
}

/// Scans for the first `{ ... }` span with balanced braces, honoring
/// string literals and escapes.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_code_fence() {
        let text = "Here you go:\n```json\n{\"customer_name\": \"Asha\"}\n```\nLet me know!";
        assert_eq!(extract_json_object(text), Some("{\"customer_name\": \"Asha\"}"));
    }

    #[test]
    fn extracts_from_plain_code_fence() {
        let text = "```\n{\"tax_percent\": 18}\n```";
        assert_eq!(extract_json_object(text), Some("{\"tax_percent\": 18}"));
    }

    #[test]
    fn extracts_bare_object_from_prose() {
        let text = "Sure! {\"items\": [{\"name\": \"pen\", \"quantity\": 2}]} is the update.";
        assert_eq!(
            extract_json_object(text),
            Some("{\"items\": [{\"name\": \"pen\", \"quantity\": 2}]}")
        );
    }

    #[test]
    fn handles_braces_inside_strings() {
        let text = "{\"note\": \"use {curly} braces\"}";
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn handles_nested_objects() {
        let text = "result: {\"a\": {\"b\": {\"c\": 1}}} done";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": {\"c\": 1}}}"));
    }

    #[test]
    fn returns_none_without_object() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("unterminated { object"), None);
    }
}
