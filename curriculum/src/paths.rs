//! Route builders for the student portal.
//!
//! Course, unit, and topic names contain spaces and punctuation, so every
//! dynamic segment is percent-encoded the way `encodeURIComponent` would.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use quiz::QuizKind;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Inverse of [`encode`] for route parameters; invalid UTF-8 is replaced.
#[must_use]
pub fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[must_use]
pub fn home_with_course(course: &str) -> String {
    format!("/?course={}", encode(course))
}

#[must_use]
pub fn unit(course: &str, unit: &str) -> String {
    format!("/unit/{}/{}", encode(course), encode(unit))
}

#[must_use]
pub fn topic(course: &str, unit: &str, topic: &str) -> String {
    format!("/topic/{}/{}/{}", encode(course), encode(unit), encode(topic))
}

/// Quiz route; unit scope when `topic` is `None`.
#[must_use]
pub fn quiz(kind: QuizKind, course: &str, unit: &str, topic: Option<&str>) -> String {
    let base = format!("/quiz/{}/{}/{}", kind.slug(), encode(course), encode(unit));
    match topic {
        Some(t) => format!("{base}/{}", encode(t)),
        None => base,
    }
}

/// Tutor chat route with an optional topic and pre-filled question.
#[must_use]
pub fn chat(course: &str, unit: &str, topic: &str, ask: Option<&str>) -> String {
    let mut url = format!("/chat?course={}&unit={}&topic={}", encode(course), encode(unit), encode(topic));
    if let Some(question) = ask {
        url.push_str("&ask=");
        url.push_str(&encode(question));
    }
    url
}
