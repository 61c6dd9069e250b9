//! Networking for the student portal: the bundled catalog and the tutor chat.

pub mod api;
