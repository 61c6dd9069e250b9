use super::*;

#[test]
fn parses_topic_route_with_encoded_names() {
    let route = QuizRoute::parse("eslce-style", "Grade%2012%20Biology", "Unit%201", Some("Cell%20Division")).unwrap();
    assert_eq!(route.kind, QuizKind::EslceStyle);
    assert_eq!(route.course, "Grade 12 Biology");
    assert_eq!(route.topic.as_deref(), Some("Cell Division"));
    assert_eq!(route.scope(), QuizScope::Topic);
}

#[test]
fn unit_route_has_unit_scope() {
    let route = QuizRoute::parse("knowledge-check", "Bio", "Cells", None).unwrap();
    assert_eq!(route.scope(), QuizScope::Unit);
    assert_eq!(route.heading(), "Knowledge Check: Cells");
    assert_eq!(route.back_href(), "/unit/Bio/Cells");
}

#[test]
fn blank_topic_counts_as_unit_scope() {
    let route = QuizRoute::parse("knowledge-check", "Bio", "Cells", Some("")).unwrap();
    assert_eq!(route.topic, None);
}

#[test]
fn unknown_kind_or_missing_names_rejected() {
    assert!(QuizRoute::parse("pop-quiz", "Bio", "Cells", None).is_none());
    assert!(QuizRoute::parse("knowledge-check", "", "Cells", None).is_none());
    assert!(QuizRoute::parse("knowledge-check", "Bio", "", None).is_none());
}

#[test]
fn record_carries_route_and_outcome() {
    let route = QuizRoute::parse("eslce-style", "Bio", "Cells", Some("Mitosis")).unwrap();
    let record = route.record(QuizOutcome { score: 3, total: 5 });
    assert_eq!(record.course, "Bio");
    assert_eq!(record.topic.as_deref(), Some("Mitosis"));
    assert_eq!(record.kind, QuizKind::EslceStyle);
    assert_eq!((record.score, record.total), (3, 5));
    assert!(record.passed());
}

#[test]
fn links_point_back_to_material_and_across_kinds() {
    let route = QuizRoute::parse("knowledge-check", "Bio", "Cells", Some("Mitosis")).unwrap();
    assert_eq!(route.back_href(), "/topic/Bio/Cells/Mitosis");
    assert_eq!(route.counterpart_href(), "/quiz/eslce-style/Bio/Cells/Mitosis");
}

#[test]
fn questions_come_from_kind_and_scope_bank() {
    let route = QuizRoute::parse("knowledge-check", "Bio", "Cells", None).unwrap();
    assert_eq!(route.questions(), bank::questions(QuizKind::KnowledgeCheck, QuizScope::Unit));
    assert!(!route.questions().is_empty());
}

#[test]
fn unit_and_topic_routes_ask_different_questions() {
    let unit = QuizRoute::parse("eslce-style", "Bio", "Cells", None).unwrap();
    let topic = QuizRoute::parse("eslce-style", "Bio", "Cells", Some("Osmosis")).unwrap();
    assert_ne!(unit.questions(), topic.questions());
    assert_eq!(topic.questions(), bank::questions(QuizKind::EslceStyle, QuizScope::Topic));
}
