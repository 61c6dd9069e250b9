//! Answer → check → advance state machine for short quizzes.
//!
//! DESIGN
//! ======
//! A session moves through three phases:
//!
//! ```text
//! Answering --check--> Checked --advance--> Answering (next question)
//!                                  \------> Finished  (last question)
//! ```
//!
//! Checking requires a selection and locks it. Score is awarded during the
//! `Answering -> Checked` transition only, so a question can never be scored
//! twice. `restart` returns the session to the first question with score 0.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::QuizQuestion;

/// Errors for transitions that are not legal in the current phase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// A session needs at least one question.
    #[error("quiz has no questions")]
    Empty,
    /// A question's `correct_answer` does not index one of its options.
    #[error("question {question} has answer index {answer} but only {options} options")]
    InvalidQuestion { question: usize, answer: usize, options: usize },
    /// The selected option index is outside the current question.
    #[error("option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    /// Check was requested before an option was selected.
    #[error("no answer selected")]
    NoSelection,
    /// The current question was already checked.
    #[error("answer already checked")]
    AlreadyChecked,
    /// Advance was requested before the current answer was checked.
    #[error("answer not checked yet")]
    NotChecked,
    /// The session reached its results screen.
    #[error("quiz is finished")]
    Finished,
    /// Navigation target outside the question list.
    #[error("question {index} out of range ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
    /// The exam has not been started yet.
    #[error("exam not started")]
    NotStarted,
}

/// Decides whether a selected option answers a question correctly.
pub trait ScoringRule {
    fn is_correct(&self, question: &QuizQuestion, selected: usize) -> bool;
}

/// Exact match against [`QuizQuestion::correct_answer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactIndex;

impl ScoringRule for ExactIndex {
    fn is_correct(&self, question: &QuizQuestion, selected: usize) -> bool {
        selected == question.correct_answer
    }
}

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the student to pick and check an option.
    #[default]
    Answering,
    /// Answer checked; explanation visible.
    Checked,
    /// Results screen.
    Finished,
}

/// How an option button should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

impl OptionMark {
    /// BEM modifier class for the option button.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "quiz-option",
            Self::Selected => "quiz-option quiz-option--selected",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }
}

/// Result bucket shown on the results card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Good,
    KeepStudying,
}

impl Verdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You have a solid understanding of this topic!",
            Self::Good => "Good job! You understand the key concepts, but there's room for improvement.",
            Self::KeepStudying => "Keep studying! Review the topic material and try again.",
        }
    }
}

/// Final score of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
}

impl QuizOutcome {
    /// Perfect when every answer was right, good at half or better.
    #[must_use]
    pub fn verdict(self) -> Verdict {
        if self.score == self.total {
            Verdict::Perfect
        } else if u64::from(self.score) * 2 >= u64::from(self.total) {
            Verdict::Good
        } else {
            Verdict::KeepStudying
        }
    }

    /// True when the outcome counts toward topic completion.
    #[must_use]
    pub fn passed(self) -> bool {
        !matches!(self.verdict(), Verdict::KeepStudying)
    }
}

/// One run through an ordered list of questions.
#[derive(Clone, Debug)]
pub struct QuizSession<R = ExactIndex> {
    questions: Vec<QuizQuestion>,
    rule: R,
    current: usize,
    selected: Option<usize>,
    phase: Phase,
    score: u32,
}

impl QuizSession<ExactIndex> {
    /// Build a session scored by exact index match.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Empty`] for an empty list and
    /// [`QuizError::InvalidQuestion`] when an answer index is out of range.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        Self::with_rule(questions, ExactIndex)
    }
}

impl<R: ScoringRule> QuizSession<R> {
    /// Build a session with a custom scoring rule.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::new`].
    pub fn with_rule(questions: Vec<QuizQuestion>, rule: R) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        if let Some((question, q)) = questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.correct_answer >= q.options.len())
        {
            return Err(QuizError::InvalidQuestion {
                question,
                answer: q.correct_answer,
                options: q.options.len(),
            });
        }
        Ok(Self { questions, rule, current: 0, selected: None, phase: Phase::Answering, score: 0 })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// "Check Answer" is enabled only while answering with a selection.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.phase == Phase::Answering && self.selected.is_some()
    }

    /// Width of the progress bar, counting the question on screen as reached.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        ((self.current + 1) as f64 / self.questions.len() as f64) * 100.0
    }

    /// Pick an option for the current question.
    ///
    /// # Errors
    ///
    /// Fails once the answer is checked or the quiz is finished, and for
    /// indices outside the current question.
    pub fn select(&mut self, index: usize) -> Result<(), QuizError> {
        match self.phase {
            Phase::Checked => return Err(QuizError::AlreadyChecked),
            Phase::Finished => return Err(QuizError::Finished),
            Phase::Answering => {}
        }
        let len = self.current_question().options.len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Lock the selection, reveal the explanation, and score it.
    ///
    /// Returns whether the selection was correct.
    ///
    /// # Errors
    ///
    /// Fails without touching the score when nothing is selected, the
    /// question was already checked, or the quiz is finished.
    pub fn check(&mut self) -> Result<bool, QuizError> {
        match self.phase {
            Phase::Checked => return Err(QuizError::AlreadyChecked),
            Phase::Finished => return Err(QuizError::Finished),
            Phase::Answering => {}
        }
        let selected = self.selected.ok_or(QuizError::NoSelection)?;
        let correct = self.rule.is_correct(self.current_question(), selected);
        if correct {
            self.score += 1;
        }
        self.phase = Phase::Checked;
        Ok(correct)
    }

    /// Move to the next question, or to the results screen after the last.
    ///
    /// # Errors
    ///
    /// Fails when the current answer has not been checked yet.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        match self.phase {
            Phase::Answering => return Err(QuizError::NotChecked),
            Phase::Finished => return Err(QuizError::Finished),
            Phase::Checked => {}
        }
        if self.is_last() {
            self.phase = Phase::Finished;
        } else {
            self.current += 1;
            self.selected = None;
            self.phase = Phase::Answering;
        }
        Ok(self.phase)
    }

    /// Back to the first question with a clean slate.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.phase = Phase::Answering;
        self.score = 0;
    }

    /// Rendering hint for option `index` of the current question.
    #[must_use]
    pub fn option_mark(&self, index: usize) -> OptionMark {
        let picked = self.selected == Some(index);
        if self.phase == Phase::Checked {
            if index == self.current_question().correct_answer {
                return OptionMark::Correct;
            }
            if picked {
                return OptionMark::Incorrect;
            }
            return OptionMark::Neutral;
        }
        if picked { OptionMark::Selected } else { OptionMark::Neutral }
    }

    /// Final score, available once the session is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if self.phase != Phase::Finished {
            return None;
        }
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Some(QuizOutcome { score: self.score, total })
    }
}
