//! HTTP handlers for the chat API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{ChatCommand, ChatError, ChatHandler};
use crate::domain::foundation::SessionId;
use crate::ports::InvoiceRepository;

use super::dto::{
    ChatRequest, ChatResponseBody, ErrorResponse, HealthResponse, InvoiceListResponse,
};

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatHandler>,
    pub repository: Arc<dyn InvoiceRepository>,
}

impl AppState {
    pub fn new(chat: Arc<ChatHandler>, repository: Arc<dyn InvoiceRepository>) -> Self {
        Self { chat, repository }
    }
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// POST /api/chat
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let session_id = match SessionId::new(&req.session_id) {
        Ok(id) => id,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
                .into_response()
        }
    };

    let command = ChatCommand {
        session_id,
        message: req.message,
    };

    match state.chat.handle(command).await {
        Ok(response) => (StatusCode::OK, Json(ChatResponseBody::from(response))).into_response(),
        Err(ChatError::EmptyMessage) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("message must not be empty")),
        )
            .into_response(),
        Err(ChatError::Internal(msg)) => {
            error!(%msg, "chat handler failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal error")),
            )
                .into_response()
        }
    }
}

/// GET /api/invoices
pub async fn list_invoices(State(state): State<AppState>) -> Response {
    match state.repository.list().await {
        Ok(invoices) => {
            let count = invoices.len();
            (StatusCode::OK, Json(InvoiceListResponse { invoices, count })).into_response()
        }
        Err(err) => {
            error!(%err, "invoice listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("storage error")),
            )
                .into_response()
        }
    }
}

/// GET /api/invoices/:id - id is the invoice id or the invoice number.
pub async fn get_invoice(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repository.get(&id).await {
        Ok(Some(invoice)) => (StatusCode::OK, Json(invoice)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("invoice {id} not found"))),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "invoice lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("storage error")),
            )
                .into_response()
        }
    }
}
