//! Page state for the admin console.
//!
//! DESIGN
//! ======
//! Each page owns one plain struct held in an `RwSignal`. Transitions are
//! methods on the struct so request gating, paging, and flag flips are unit
//! tested without rendering.

pub mod chunks;
pub mod documents;
pub mod exams;
pub mod query;
