//! JSON handlers.
//!
//! `/chat` validates the body itself instead of using the `Json` extractor so
//! every malformed request gets the same 400 shape with a `response` text the
//! UI can show.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::profile::MerchantProfile;

use super::AppState;

#[derive(Serialize)]
struct ChatReply<'a> {
    success: bool,
    response: String,
    user_message: &'a str,
}

#[derive(Serialize)]
struct Rejection {
    error: &'static str,
    response: &'static str,
}

const MISSING_MESSAGE: Rejection = Rejection {
    error: "Mesaj bulunamadı",
    response: "Lütfen bir mesaj gönderin.",
};

const EMPTY_MESSAGE: Rejection = Rejection {
    error: "Boş mesaj",
    response: "Lütfen bir mesaj yazın.",
};

/// Pull a string `message` out of a JSON object body.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

/// POST /chat
pub(super) async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(raw) = extract_message(&body) else {
        debug!(body_len = body.len(), "chat request without a message");
        return (StatusCode::BAD_REQUEST, Json(MISSING_MESSAGE)).into_response();
    };

    let message = raw.trim();
    if message.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(EMPTY_MESSAGE)).into_response();
    }

    let response = state.chat.reply(message).await;
    let reply = ChatReply {
        success: true,
        response,
        user_message: message,
    };
    (StatusCode::OK, Json(reply)).into_response()
}

/// GET /health
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "Chatbot sistemi çalışıyor" }))
}

/// GET /company-info
pub(super) async fn company_info(State(state): State<AppState>) -> Json<MerchantProfile> {
    Json(state.chat.profile().await)
}
