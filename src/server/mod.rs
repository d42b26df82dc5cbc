//! Axum HTTP channel.
//!
//! ```text
//! GET  /              → landing page with the merchant name and a chat box
//! POST /chat          → {"message": "..."} → {"success", "response", "user_message"}
//! GET  /health        → fixed liveness payload
//! GET  /company-info  → current merchant profile as JSON
//! ```
//!
//! `serve()` drives the axum event loop; the [`CancellationToken`] is wired
//! to axum's graceful shutdown.

mod api;
mod ui;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::chat::ChatService;
use crate::error::AppError;

/// Router state injected into every handler via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat: Arc::new(chat) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::root))
        .route("/chat", post(api::chat))
        .route("/health", get(api::health))
        .route("/company-info", get(api::company_info))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn serve(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "http channel listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

    info!("http channel shut down");
    Ok(())
}
