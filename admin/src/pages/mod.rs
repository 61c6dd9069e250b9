//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal, issues the backend calls, and delegates
//! rendering details to `components`.

pub mod chunks;
pub mod dashboard;
pub mod documents;
pub mod exams;
pub mod query;
