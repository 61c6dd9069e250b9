//! Client-side state for the student portal.
//!
//! Each module holds one concern as a plain struct that pages wrap in a
//! `RwSignal`. The catalog, progress book, and course preference are app-wide
//! and provided as context by [`crate::app::App`]; chat and quiz state are
//! owned by their pages.

pub mod catalog;
pub mod chat;
pub mod quiz;
