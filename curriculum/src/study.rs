//! Study aids derived from topic content.
//!
//! Everything here is a pure function of the catalog entry, so a topic page
//! shows the same aids on every visit.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use quiz::QuizQuestion;

use crate::Topic;

/// Options per generated practice question.
const PRACTICE_OPTIONS: usize = 4;

/// Suggested follow-up prompts that open the tutor chat pre-filled.
#[must_use]
pub fn follow_up_questions(topic: &Topic) -> Vec<String> {
    vec![
        format!("How does {} appear in ESLCE exams?", topic.topic),
        "What are common mistakes students make on this topic?".to_owned(),
        "Can you explain this with a real-world example?".to_owned(),
        format!("What is {}?", topic.topic),
        "What are the key concepts I need to remember?".to_owned(),
        "What diagrams should I memorize for the exam?".to_owned(),
    ]
}

/// Tabs of the study tools panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyTool {
    #[default]
    KeyPoints,
    WorkedExamples,
    Practice,
}

impl StudyTool {
    pub const ALL: [Self; 3] = [Self::KeyPoints, Self::WorkedExamples, Self::Practice];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::KeyPoints => "Key Points",
            Self::WorkedExamples => "Examples",
            Self::Practice => "ESLCE Practice",
        }
    }
}

/// Concept summaries followed by the exam tip.
#[must_use]
pub fn key_points(topic: &Topic) -> Vec<String> {
    let mut points: Vec<String> =
        topic.refresher_notes.key_concepts.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    if !topic.exam_tips.is_empty() {
        points.push(format!("Exam tip: {}", topic.exam_tips));
    }
    points
}

/// A scenario paired with the reasoning that answers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkedExample {
    pub scenario: String,
    pub explanation: String,
}

/// Examples from the notes plus one "explain the diagram" item per diagram.
#[must_use]
pub fn worked_examples(topic: &Topic) -> Vec<WorkedExample> {
    let notes = &topic.refresher_notes;
    let mut out = Vec::new();
    if !notes.examples.is_empty() {
        out.push(WorkedExample { scenario: notes.examples.clone(), explanation: notes.detailed_explanation.clone() });
    }
    for diagram in &topic.diagrams {
        out.push(WorkedExample {
            scenario: format!("Sketch and label: {}", diagram.description),
            explanation: format!("Exam answers on {} are marked on correct labels and a one-line caption.", topic.topic),
        });
    }
    out
}

/// One question per key concept, asking which explanation belongs to it.
///
/// Distractors are the neighbouring concepts' explanations, and the correct
/// option rotates with the concept's position. Needs at least two concepts.
#[must_use]
pub fn practice_questions(topic: &Topic) -> Vec<QuizQuestion> {
    let concepts = &topic.refresher_notes.key_concepts.0;
    let n = concepts.len();
    if n < 2 {
        return Vec::new();
    }
    let width = n.min(PRACTICE_OPTIONS);
    concepts
        .iter()
        .enumerate()
        .map(|(i, (name, _))| {
            let mut options: Vec<String> = (0..width).map(|k| concepts[(i + k) % n].1.clone()).collect();
            let correct = i % width;
            options.swap(0, correct);
            QuizQuestion {
                prompt: format!("Which statement best describes \"{name}\"?"),
                options,
                correct_answer: correct,
                explanation: format!("{name}: {}", concepts[i].1),
                source_year: None,
            }
        })
        .collect()
}
