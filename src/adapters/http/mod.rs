//! HTTP adapter - axum routes exposing the chat API.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::api_routes;
