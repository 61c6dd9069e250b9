//! Study progress derived from finished quizzes.
//!
//! DESIGN
//! ======
//! The only input is the list of [`QuizRecord`]s saved when a quiz reaches
//! its results screen. A topic counts as completed when a passing quiz
//! covers it: either a topic quiz for that topic or a unit quiz for its unit.
//! Every figure is recomputed from the records, so the same records always
//! give the same progress.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use quiz::{QuizKind, QuizOutcome};
use serde::{Deserialize, Serialize};

use crate::{Course, Unit};

/// One finished quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub course: String,
    pub unit: String,
    /// `None` for unit-scope quizzes.
    #[serde(default)]
    pub topic: Option<String>,
    pub kind: QuizKind,
    pub score: u32,
    pub total: u32,
}

impl QuizRecord {
    #[must_use]
    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome { score: self.score, total: self.total }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.total > 0 && self.outcome().passed()
    }

    fn same_slot(&self, other: &Self) -> bool {
        self.course == other.course && self.unit == other.unit && self.topic == other.topic && self.kind == other.kind
    }

    fn covers(&self, course: &str, unit: &str, topic: &str) -> bool {
        self.course == course && self.unit == unit && self.topic.as_deref().is_none_or(|t| t == topic)
    }
}

/// Exam readiness bucket shown next to course progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Low,
    Medium,
    High,
}

impl Readiness {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 75 {
            Self::High
        } else if percent >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Completed-quiz badges on a topic page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopicBadges {
    pub knowledge_check: bool,
    pub eslce_style: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitProgress {
    pub unit: String,
    pub completed: usize,
    pub total: usize,
}

impl UnitProgress {
    #[must_use]
    pub fn percent(&self) -> u32 {
        percent(self.completed, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseProgress {
    pub course: String,
    pub completed: usize,
    pub total: usize,
    pub units: Vec<UnitProgress>,
}

impl CourseProgress {
    #[must_use]
    pub fn percent(&self) -> u32 {
        percent(self.completed, self.total)
    }

    #[must_use]
    pub fn readiness(&self) -> Readiness {
        Readiness::from_percent(self.percent())
    }
}

/// Rounded share of `completed` in `total`; zero when there is nothing to complete.
#[must_use]
pub fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed.min(total) * 100 + total / 2) / total;
    u32::try_from(rounded).unwrap_or(100)
}

/// All saved quiz records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressBook {
    records: Vec<QuizRecord>,
}

impl ProgressBook {
    pub const STORAGE_KEY: &'static str = "quizRecords";

    #[must_use]
    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    /// Save a finished quiz. A retake replaces the earlier attempt only if it
    /// scored at least as well.
    pub fn record(&mut self, record: QuizRecord) {
        match self.records.iter_mut().find(|r| r.same_slot(&record)) {
            Some(existing) => {
                let better = u64::from(record.score) * u64::from(existing.total.max(1))
                    >= u64::from(existing.score) * u64::from(record.total.max(1));
                if better {
                    *existing = record;
                }
            }
            None => self.records.push(record),
        }
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn reset_course(&mut self, course: &str) {
        self.records.retain(|r| r.course != course);
    }

    #[must_use]
    pub fn topic_completed(&self, course: &str, unit: &str, topic: &str) -> bool {
        self.records.iter().any(|r| r.passed() && r.covers(course, unit, topic))
    }

    /// Which topic-scope quizzes were passed for this topic.
    #[must_use]
    pub fn topic_badges(&self, course: &str, unit: &str, topic: &str) -> TopicBadges {
        let passed = |kind: QuizKind| {
            self.records.iter().any(|r| {
                r.kind == kind
                    && r.passed()
                    && r.course == course
                    && r.unit == unit
                    && r.topic.as_deref() == Some(topic)
            })
        };
        TopicBadges { knowledge_check: passed(QuizKind::KnowledgeCheck), eslce_style: passed(QuizKind::EslceStyle) }
    }

    #[must_use]
    pub fn unit_progress(&self, course: &str, unit: &Unit) -> UnitProgress {
        let completed = unit
            .topics
            .iter()
            .filter(|t| self.topic_completed(course, &unit.unit, &t.topic))
            .count();
        UnitProgress { unit: unit.unit.clone(), completed, total: unit.topics.len() }
    }

    #[must_use]
    pub fn course_progress(&self, course: &Course) -> CourseProgress {
        let units: Vec<UnitProgress> =
            course.units.iter().map(|u| self.unit_progress(&course.course_name, u)).collect();
        CourseProgress {
            course: course.course_name.clone(),
            completed: units.iter().map(|u| u.completed).sum(),
            total: units.iter().map(|u| u.total).sum(),
            units,
        }
    }
}
