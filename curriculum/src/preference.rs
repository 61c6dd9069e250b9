//! Remembered course selection.
//!
//! One record persisted under [`CoursePreference::STORAGE_KEY`]. Pages read it
//! once on mount and write it only when the student picks a course; the Home
//! navigation item clears it.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use serde::{Deserialize, Serialize};

use crate::paths;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePreference {
    #[serde(default)]
    pub course: Option<String>,
}

impl CoursePreference {
    pub const STORAGE_KEY: &'static str = "selectedCourse";

    #[must_use]
    pub fn new(course: impl Into<String>) -> Self {
        Self { course: Some(course.into()) }
    }

    /// Course to show on load. A `?course=` value beats the stored one;
    /// blank values count as absent.
    #[must_use]
    pub fn resolve(query: Option<&str>, stored: &Self) -> Option<String> {
        let from_query = query.map(str::trim).filter(|q| !q.is_empty());
        let from_store = stored.course.as_deref().map(str::trim).filter(|c| !c.is_empty());
        from_query.or(from_store).map(str::to_owned)
    }

    /// Preference to store and home link to visit after the student picks
    /// `course` from the selector. A blank pick clears the selection.
    ///
    /// The link carries the pick, so a `?course=` the page was opened with
    /// cannot override it on the next [`resolve`](Self::resolve).
    #[must_use]
    pub fn pick(course: &str) -> (Self, String) {
        let course = course.trim();
        if course.is_empty() {
            (Self::default(), "/".to_owned())
        } else {
            (Self::new(course), paths::home_with_course(course))
        }
    }

    pub fn clear(&mut self) {
        self.course = None;
    }
}
