use super::*;

#[test]
fn quiz_kind_slug_round_trips() {
    for kind in [QuizKind::KnowledgeCheck, QuizKind::EslceStyle] {
        assert_eq!(QuizKind::from_slug(kind.slug()), Some(kind));
    }
    assert_eq!(QuizKind::from_slug("pop-quiz"), None);
}

#[test]
fn quiz_kind_counterpart_swaps() {
    assert_eq!(QuizKind::KnowledgeCheck.counterpart(), QuizKind::EslceStyle);
    assert_eq!(QuizKind::EslceStyle.counterpart(), QuizKind::KnowledgeCheck);
}

#[test]
fn quiz_kind_serializes_as_slug() {
    let json = serde_json::to_string(&QuizKind::EslceStyle).unwrap();
    assert_eq!(json, "\"eslce-style\"");
}

#[test]
fn question_defaults_optional_fields() {
    let q: QuizQuestion =
        serde_json::from_str(r#"{"prompt":"p","options":["a","b"],"correct_answer":1}"#).unwrap();
    assert!(q.explanation.is_empty());
    assert_eq!(q.source_year, None);
}
