//! Long-form exam simulator.
//!
//! DESIGN
//! ======
//! Unlike [`crate::QuizSession`] the simulator allows free navigation and
//! changing answers at any time before the exam is finished. Answers live in
//! a map keyed by question index; the score is the number of entries that
//! match the answer key. Timed exams count down whole minutes through
//! [`ExamSimulator::tick`], which the page drives from a one-minute interval.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use std::collections::BTreeMap;

use crate::{QuizError, QuizQuestion, bank};

/// Questions per simulated paper.
pub const EXAM_QUESTIONS: usize = 50;
/// Duration of a timed exam in minutes.
pub const EXAM_MINUTES: u32 = 180;

/// Practice runs have no clock; timed runs count down from [`EXAM_MINUTES`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExamMode {
    #[default]
    Practice,
    Timed,
}

impl ExamMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Practice => "Practice",
            Self::Timed => "Timed",
        }
    }
}

/// Where the simulator is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulatorStage {
    /// Choosing subject and mode.
    #[default]
    Setup,
    /// Answering questions.
    Running,
    /// Results screen.
    Finished,
}

/// Result bucket for a finished simulated exam.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorVerdict {
    Excellent,
    Good,
    KeepStudying,
}

impl SimulatorVerdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! You're well prepared for the ESLCE exam.",
            Self::Good => "Good job! With a bit more practice, you'll be ready for the exam.",
            Self::KeepStudying => "Keep studying and practicing. Focus on the topics you missed.",
        }
    }
}

/// Render whole minutes as `H:MM`.
#[must_use]
pub fn format_time(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

#[derive(Clone, Debug)]
pub struct ExamSimulator {
    subject: String,
    mode: ExamMode,
    stage: SimulatorStage,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: BTreeMap<usize, usize>,
    remaining: u32,
}

impl Default for ExamSimulator {
    fn default() -> Self {
        Self::new("biology")
    }
}

impl ExamSimulator {
    /// Simulator in the setup stage with a paper for `subject`.
    #[must_use]
    pub fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_owned(),
            mode: ExamMode::Practice,
            stage: SimulatorStage::Setup,
            questions: bank::simulator_questions(subject, EXAM_QUESTIONS),
            current: 0,
            answers: BTreeMap::new(),
            remaining: EXAM_MINUTES,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn mode(&self) -> ExamMode {
        self.mode
    }

    #[must_use]
    pub fn stage(&self) -> SimulatorStage {
        self.stage
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn remaining_minutes(&self) -> u32 {
        self.remaining
    }

    /// Selected option for question `index`, if answered.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Switch subject during setup. Regenerates the paper.
    pub fn set_subject(&mut self, subject: &str) {
        if self.stage != SimulatorStage::Setup || self.subject == subject {
            return;
        }
        self.subject = subject.to_owned();
        self.questions = bank::simulator_questions(subject, EXAM_QUESTIONS);
    }

    /// Switch mode during setup.
    pub fn set_mode(&mut self, mode: ExamMode) {
        if self.stage == SimulatorStage::Setup {
            self.mode = mode;
        }
    }

    /// Begin a fresh attempt: clears answers, rewinds to question 1, resets the clock.
    pub fn start(&mut self) {
        self.stage = SimulatorStage::Running;
        self.answers.clear();
        self.current = 0;
        self.remaining = EXAM_MINUTES;
    }

    /// Record (or replace) the answer for the current question.
    ///
    /// # Errors
    ///
    /// Fails outside the running stage and for option indices past the
    /// current question's options.
    pub fn answer(&mut self, option: usize) -> Result<(), QuizError> {
        match self.stage {
            SimulatorStage::Setup => return Err(QuizError::NotStarted),
            SimulatorStage::Finished => return Err(QuizError::Finished),
            SimulatorStage::Running => {}
        }
        let len = self.current_question().map_or(0, |q| q.options.len());
        if option >= len {
            return Err(QuizError::OptionOutOfRange { index: option, len });
        }
        self.answers.insert(self.current, option);
        Ok(())
    }

    /// Jump to question `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` is outside the paper.
    pub fn go_to(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::QuestionOutOfRange { index, len: self.questions.len() });
        }
        self.current = index;
        Ok(())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    /// One minute elapsed. Timed exams finish when the clock reaches zero.
    ///
    /// Returns the minutes left.
    pub fn tick(&mut self) -> u32 {
        if self.mode != ExamMode::Timed || self.stage != SimulatorStage::Running {
            return self.remaining;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stage = SimulatorStage::Finished;
        }
        self.remaining
    }

    pub fn finish(&mut self) {
        if self.stage == SimulatorStage::Running {
            self.stage = SimulatorStage::Finished;
        }
    }

    /// Leave the results screen to look over the answers from question 1.
    pub fn review(&mut self) {
        if self.stage == SimulatorStage::Finished {
            self.stage = SimulatorStage::Running;
            self.current = 0;
        }
    }

    /// Back to setup, keeping subject and mode.
    pub fn new_exam(&mut self) {
        self.stage = SimulatorStage::Setup;
    }

    /// Number of answers matching the key.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|(index, option)| {
                self.questions.get(**index).is_some_and(|q| q.correct_answer == **option)
            })
            .count()
    }

    /// Score as a rounded percentage of the paper.
    #[must_use]
    pub fn percent(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        let rounded = (self.score() * 100 + total / 2) / total;
        u32::try_from(rounded).unwrap_or(100)
    }

    /// Excellent at 80% or better, good at 60% or better.
    #[must_use]
    pub fn verdict(&self) -> SimulatorVerdict {
        let score = self.score() * 10;
        let total = self.questions.len();
        if score >= total * 8 {
            SimulatorVerdict::Excellent
        } else if score >= total * 6 {
            SimulatorVerdict::Good
        } else {
            SimulatorVerdict::KeepStudying
        }
    }
}
