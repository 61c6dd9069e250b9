//! Quiz engine shared by every quiz surface of the student portal.
//!
//! This crate is UI-framework agnostic: the Leptos pages hold a
//! [`QuizSession`] or [`ExamSimulator`] inside a signal and render whatever
//! state the engine reports. All transitions, scoring, and result verdicts
//! live here so they can be tested without a browser.
//!
//! ARCHITECTURE
//! ============
//! - `session`: the answer/check/advance state machine for short quizzes.
//! - `simulator`: the long-form exam simulator (free navigation, optional timer).
//! - `bank`: deterministic question sources keyed by [`QuizKind`].

pub mod bank;
pub mod session;
pub mod simulator;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

pub use session::{ExactIndex, OptionMark, Phase, QuizError, QuizOutcome, QuizSession, ScoringRule, Verdict};
pub use simulator::{ExamMode, ExamSimulator, SimulatorStage, SimulatorVerdict, format_time};

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text shown above the options.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Explanation revealed after the answer is checked.
    #[serde(default)]
    pub explanation: String,
    /// Past-paper year this question mirrors, if any.
    #[serde(default)]
    pub source_year: Option<String>,
}

/// Which question style a quiz draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    /// Short check on the key concepts of a topic or unit.
    #[default]
    KnowledgeCheck,
    /// Exam-style practice questions modeled on past papers.
    EslceStyle,
}

impl QuizKind {
    /// URL path segment for this kind.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::KnowledgeCheck => "knowledge-check",
            Self::EslceStyle => "eslce-style",
        }
    }

    /// Parse a URL path segment.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "knowledge-check" => Some(Self::KnowledgeCheck),
            "eslce-style" => Some(Self::EslceStyle),
            _ => None,
        }
    }

    /// Heading used on quiz pages.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::KnowledgeCheck => "Knowledge Check",
            Self::EslceStyle => "ESLCE Practice",
        }
    }

    /// The other kind, used for "next steps" links on the results card.
    #[must_use]
    pub fn counterpart(self) -> Self {
        match self {
            Self::KnowledgeCheck => Self::EslceStyle,
            Self::EslceStyle => Self::KnowledgeCheck,
        }
    }
}

/// Granularity of the material a quiz covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizScope {
    /// Whole unit.
    #[default]
    Unit,
    /// Single topic inside a unit.
    Topic,
}
