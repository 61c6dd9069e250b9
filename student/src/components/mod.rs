//! Presentational components for the student portal.
//!
//! Components read app-wide context (catalog, progress, preference) where
//! they need it and report user actions through callbacks.

pub mod bottom_nav;
pub mod chat_interface;
pub mod course_progress;
pub mod follow_ups;
pub mod quiz_runner;
pub mod study_tools;
pub mod topic_actions;
pub mod unit_card;
