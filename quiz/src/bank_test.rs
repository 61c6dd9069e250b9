use super::*;
use crate::{QuizScope, QuizSession};

#[test]
fn knowledge_check_bank_has_five_valid_questions() {
    let qs = questions(QuizKind::KnowledgeCheck, QuizScope::Topic);
    assert_eq!(qs.len(), 5);
    assert!(qs.iter().all(|q| q.source_year.is_none()));
    assert!(QuizSession::new(qs).is_ok());
}

#[test]
fn eslce_bank_carries_past_paper_years() {
    let qs = questions(QuizKind::EslceStyle, QuizScope::Topic);
    assert_eq!(qs.len(), 10);
    assert_eq!(qs[0].source_year.as_deref(), Some("2018"));
    assert_eq!(qs[5].source_year.as_deref(), Some("2017"));
    assert!(QuizSession::new(qs).is_ok());
}

#[test]
fn mitochondria_answer_is_energy_production() {
    let qs = questions(QuizKind::KnowledgeCheck, QuizScope::Topic);
    assert_eq!(qs[0].options[qs[0].correct_answer], "Energy production");
}

#[test]
fn subject_label_falls_back_to_key() {
    assert_eq!(subject_label("chemistry"), "Chemistry");
    assert_eq!(subject_label("history"), "history");
}

#[test]
fn simulator_questions_are_numbered_from_one() {
    let qs = simulator_questions("biology", 3);
    assert_eq!(qs.len(), 3);
    assert_eq!(qs[0].prompt, "This is a sample ESLCE Biology question 1. What is the correct answer?");
    assert_eq!(qs[2].options[3], "Option D for question 3");
    assert!(qs.iter().all(|q| q.correct_answer < 4));
}

#[test]
fn unit_and_topic_scopes_draw_from_different_tables() {
    for kind in [QuizKind::KnowledgeCheck, QuizKind::EslceStyle] {
        let unit = questions(kind, QuizScope::Unit);
        assert_ne!(unit, questions(kind, QuizScope::Topic));
        assert_eq!(unit.len(), 2);
        assert!(QuizSession::new(unit).is_ok());
    }
}

#[test]
fn unit_eslce_osmosis_answer_is_water_movement() {
    let qs = questions(QuizKind::EslceStyle, QuizScope::Unit);
    assert!(qs[1].options[qs[1].correct_answer].starts_with("The movement of water molecules"));
}
