use super::*;
use crate::{Diagram, KeyConcepts, RefresherNotes};

fn topic(concepts: &[(&str, &str)]) -> Topic {
    Topic {
        topic: "Enzymes".into(),
        refresher_notes: RefresherNotes {
            overview: "Biological catalysts.".into(),
            key_concepts: KeyConcepts(concepts.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect()),
            detailed_explanation: "Lock and key.".into(),
            examples: "Amylase breaks down starch.".into(),
        },
        diagrams: vec![Diagram { description: "Active site".into(), image_url: None }],
        exam_tips: "Learn optimum temperatures.".into(),
    }
}

const FIVE: [(&str, &str); 5] =
    [("A", "alpha"), ("B", "beta"), ("C", "gamma"), ("D", "delta"), ("E", "epsilon")];

#[test]
fn follow_ups_mention_topic() {
    let qs = follow_up_questions(&topic(&[]));
    assert!(qs.iter().any(|q| q == "What is Enzymes?"));
    assert!(qs[0].contains("Enzymes"));
}

#[test]
fn key_points_list_concepts_then_tip() {
    let points = key_points(&topic(&[("Substrate", "what the enzyme acts on")]));
    assert_eq!(points, ["Substrate: what the enzyme acts on", "Exam tip: Learn optimum temperatures."]);
}

#[test]
fn worked_examples_include_notes_and_diagrams() {
    let examples = worked_examples(&topic(&[]));
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].scenario, "Amylase breaks down starch.");
    assert_eq!(examples[0].explanation, "Lock and key.");
    assert!(examples[1].scenario.contains("Active site"));
}

#[test]
fn practice_needs_two_concepts() {
    assert!(practice_questions(&topic(&[("A", "alpha")])).is_empty());
}

#[test]
fn practice_correct_option_is_concepts_own_explanation() {
    let qs = practice_questions(&topic(&FIVE));
    assert_eq!(qs.len(), 5);
    for (q, (_, explanation)) in qs.iter().zip(FIVE) {
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[q.correct_answer], explanation);
    }
}

#[test]
fn practice_answer_position_rotates() {
    let qs = practice_questions(&topic(&FIVE));
    let positions: Vec<usize> = qs.iter().map(|q| q.correct_answer).collect();
    assert_eq!(positions, [0, 1, 2, 3, 0]);
}

#[test]
fn practice_questions_are_deterministic() {
    assert_eq!(practice_questions(&topic(&FIVE)), practice_questions(&topic(&FIVE)));
}

#[test]
fn practice_with_two_concepts_uses_two_options() {
    let qs = practice_questions(&topic(&[("A", "alpha"), ("B", "beta")]));
    assert_eq!(qs[1].options, ["alpha", "beta"]);
    assert_eq!(qs[1].correct_answer, 1);
}
