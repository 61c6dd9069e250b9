//! Helpers shared by pages and components.
//!
//! Everything except `files` runs without a browser; `dialog` degrades to
//! no-ops during server rendering.

pub mod dialog;
pub mod exam_upload;
#[cfg(feature = "hydrate")]
pub mod files;
pub mod filter;
pub mod pagination;
