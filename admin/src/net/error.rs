//! Failure classification for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages render `ApiError`'s `Display` inline for reads and in a blocking
//! alert for mutations. The backend reports failures as `{"detail": ...}`,
//! so non-2xx bodies are mined for that field before falling back to the
//! bare status code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::Envelope;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or its body did not parse.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed ({status}){}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// The backend answered 2xx but with a non-success envelope.
    #[error("{0}")]
    Rejected(String),
    #[error("not found")]
    NotFound,
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Pull the `detail` field out of a FastAPI-style error body.
///
/// Non-string details (validation error lists) keep their JSON text.
#[must_use]
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Classify a non-2xx response.
#[must_use]
pub fn from_status(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, detail: detail_from_body(body) }
}

/// Accept an envelope whose status is absent or `"success"`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] carrying the server message when present.
pub fn ensure_success<T: Envelope>(envelope: T) -> Result<T, ApiError> {
    match envelope.status() {
        None | Some("success") => Ok(envelope),
        Some(other) => {
            let message = envelope.message().map_or_else(|| format!("unexpected status: {other}"), str::to_owned);
            Err(ApiError::Rejected(message))
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}
