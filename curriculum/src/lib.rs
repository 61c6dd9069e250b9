//! Course catalog model and study helpers for the student portal.
//!
//! This crate is UI-framework agnostic so the Leptos client and the Axum
//! host can both consume it: the client renders catalog pages and tracks
//! progress, the host composes tutor chat replies.
//!
//! ARCHITECTURE
//! ============
//! - `catalog`: course → unit → topic tree as shipped in `course_catalog_v2.json`,
//!   lookups and search.
//! - `paths`: route builders with percent-encoded segments.
//! - `preference`: the remembered course selection.
//! - `progress`: quiz records and the progress figures derived from them.
//! - `chat`: tutor chat wire types and the canned reply composer.
//! - `study`: follow-up prompts and study tools derived from topic content.

pub mod catalog;
pub mod chat;
pub mod paths;
pub mod preference;
pub mod progress;
pub mod study;

pub use catalog::{Catalog, CatalogError, Course, Diagram, KeyConcepts, RefresherNotes, SearchHit, Topic, Unit};
pub use chat::{ChatContext, ChatError, ChatMessage, ChatRequest, ChatResponse, Role, compose_reply};
pub use preference::CoursePreference;
pub use progress::{CourseProgress, ProgressBook, QuizRecord, Readiness, TopicBadges, UnitProgress};
