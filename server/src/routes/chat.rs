//! Tutor chat endpoint.
//!
//! Replies are composed from the topic context the client sends, after a
//! configurable pause that stands in for model latency.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use curriculum::{ChatRequest, ChatResponse, compose_reply};
use serde_json::{Value, json};

#[derive(Clone, Debug)]
pub struct ChatState {
    pub reply_delay: Duration,
}

/// `POST /api/chat`.
pub async fn chat(
    State(state): State<ChatState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting chat body");
            return error(StatusCode::BAD_REQUEST, &e.body_text());
        }
    };
    let reply = match compose_reply(&request) {
        Ok(reply) => reply,
        Err(e) => return error(StatusCode::BAD_REQUEST, &e.to_string()),
    };
    if !state.reply_delay.is_zero() {
        tokio::time::sleep(state.reply_delay).await;
    }
    tracing::info!(topic = %request.context.topic, turns = request.messages.len(), "tutor reply");
    (StatusCode::OK, Json(json!(ChatResponse { response: reply })))
}

/// Any other method on `/api/chat`.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
