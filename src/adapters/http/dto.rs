//! Request/response bodies for the chat API.

use serde::{Deserialize, Serialize};

use crate::application::{ChatResponse, ResponseKind};
use crate::domain::invoice::FinalizedInvoice;

fn default_session() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_session")]
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_invoice_id: Option<String>,
    pub status: &'static str,
}

impl From<ChatResponse> for ChatResponseBody {
    fn from(response: ChatResponse) -> Self {
        Self {
            response: response.text,
            kind: response.kind,
            saved_invoice_id: response.saved_invoice_id.map(|id| id.to_string()),
            status: "success",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: &'static str,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: "error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<FinalizedInvoice>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults_session_id() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.session_id, "default");

        let req: ChatRequest =
            serde_json::from_str(r#"{"message": "hi", "session_id": "abc"}"#).unwrap();
        assert_eq!(req.session_id, "abc");
    }

    #[test]
    fn chat_response_body_shape() {
        let body = ChatResponseBody {
            response: "done".to_string(),
            kind: ResponseKind::Invoice,
            saved_invoice_id: Some("id-1".to_string()),
            status: "success",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "invoice");
        assert_eq!(json["saved_invoice_id"], "id-1");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn absent_invoice_id_is_omitted() {
        let body = ChatResponseBody {
            response: "draft updated".to_string(),
            kind: ResponseKind::Warning,
            saved_invoice_id: None,
            status: "success",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("saved_invoice_id").is_none());
        assert_eq!(json["type"], "warning");
    }
}
