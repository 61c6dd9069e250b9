//! HTTP calls made by the student portal.
//!
//! Both endpoints are same-origin: the catalog is a static JSON file and the
//! tutor chat is served by the host binary. On the server these calls are
//! stubs that fail, since pages only issue them from Effects in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use curriculum::{Catalog, ChatRequest};

pub const CATALOG_PATH: &str = "/data/course_catalog_v2.json";
pub const CHAT_PATH: &str = "/api/chat";

/// Message used by the SSR stubs.
pub const UNAVAILABLE: &str = "not available on server";

/// Load the course catalog.
///
/// # Errors
///
/// Network failures, non-2xx answers, and malformed catalog JSON.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CATALOG_PATH).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("catalog request failed ({})", resp.status()));
        }
        let raw = resp.text().await.map_err(|e| e.to_string())?;
        Catalog::from_json(&raw).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}

/// Post the transcript and topic context, returning the tutor's reply.
///
/// # Errors
///
/// Network failures, non-2xx answers, and replies without a `response` field.
pub async fn send_chat(request: &ChatRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_PATH)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            log::warn!("chat answered {}", resp.status());
            return Err(format!("chat request failed ({})", resp.status()));
        }
        let body: curriculum::ChatResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(UNAVAILABLE.to_owned())
    }
}
