//! Networking modules for the ingestion backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the backend's JSON schema.

pub mod api;
pub mod error;
pub mod types;
