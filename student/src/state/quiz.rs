//! Route parameters of a quiz page and what they select.
//!
//! Both `/quiz/:kind/:course/:unit` and `/quiz/:kind/:course/:unit/:topic`
//! render the same page; the optional topic decides the scope.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use curriculum::{QuizRecord, paths};
use quiz::{QuizKind, QuizOutcome, QuizQuestion, QuizScope, bank};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRoute {
    pub kind: QuizKind,
    pub course: String,
    pub unit: String,
    pub topic: Option<String>,
}

impl QuizRoute {
    /// Build from raw route parameters. Unknown kinds and missing names yield `None`.
    #[must_use]
    pub fn parse(kind: &str, course: &str, unit: &str, topic: Option<&str>) -> Option<Self> {
        let kind = QuizKind::from_slug(kind)?;
        let course = paths::decode(course);
        let unit = paths::decode(unit);
        if course.is_empty() || unit.is_empty() {
            return None;
        }
        let topic = topic.map(paths::decode).filter(|t| !t.is_empty());
        Some(Self { kind, course, unit, topic })
    }

    #[must_use]
    pub fn scope(&self) -> QuizScope {
        if self.topic.is_some() { QuizScope::Topic } else { QuizScope::Unit }
    }

    #[must_use]
    pub fn questions(&self) -> Vec<QuizQuestion> {
        bank::questions(self.kind, self.scope())
    }

    /// What the page saves to the progress book on the results screen.
    #[must_use]
    pub fn record(&self, outcome: QuizOutcome) -> QuizRecord {
        QuizRecord {
            course: self.course.clone(),
            unit: self.unit.clone(),
            topic: self.topic.clone(),
            kind: self.kind,
            score: outcome.score,
            total: outcome.total,
        }
    }

    /// Material the quiz covers: the topic page, or the unit page for unit quizzes.
    #[must_use]
    pub fn back_href(&self) -> String {
        match &self.topic {
            Some(topic) => paths::topic(&self.course, &self.unit, topic),
            None => paths::unit(&self.course, &self.unit),
        }
    }

    /// Same material, other question style.
    #[must_use]
    pub fn counterpart_href(&self) -> String {
        paths::quiz(self.kind.counterpart(), &self.course, &self.unit, self.topic.as_deref())
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.topic.as_deref().unwrap_or(&self.unit)
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}: {}", self.kind.title(), self.subject())
    }
}
