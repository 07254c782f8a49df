//! Route table for the chat API.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{chat, get_invoice, health, list_invoices, AppState};

/// Builds the full API router.
pub fn api_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(chat))
        .route("/api/invoices", get(list_invoices))
        .route("/api/invoices/:id", get(get_invoice))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
