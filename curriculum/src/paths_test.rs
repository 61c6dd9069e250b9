use super::*;

#[test]
fn encode_matches_uri_component_rules() {
    assert_eq!(encode("Unit 1: Cells & Life"), "Unit%201%3A%20Cells%20%26%20Life");
    assert_eq!(encode("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    assert_eq!(encode("a/b?c"), "a%2Fb%3Fc");
}

#[test]
fn unit_and_topic_paths_encode_each_segment() {
    assert_eq!(unit("Grade 12 Biology", "Unit 1"), "/unit/Grade%2012%20Biology/Unit%201");
    assert_eq!(topic("Bio", "U1", "Cell Wall"), "/topic/Bio/U1/Cell%20Wall");
}

#[test]
fn quiz_path_with_and_without_topic() {
    assert_eq!(quiz(QuizKind::KnowledgeCheck, "Bio", "U 1", None), "/quiz/knowledge-check/Bio/U%201");
    assert_eq!(quiz(QuizKind::EslceStyle, "Bio", "U1", Some("DNA")), "/quiz/eslce-style/Bio/U1/DNA");
}

#[test]
fn chat_path_carries_prefilled_question() {
    assert_eq!(chat("Bio", "U1", "DNA", None), "/chat?course=Bio&unit=U1&topic=DNA");
    assert_eq!(
        chat("Bio", "U1", "DNA", Some("What is DNA?")),
        "/chat?course=Bio&unit=U1&topic=DNA&ask=What%20is%20DNA%3F"
    );
}

#[test]
fn home_with_course_uses_query_string() {
    assert_eq!(home_with_course("Grade 12 Biology"), "/?course=Grade%2012%20Biology");
}

#[test]
fn decode_reverses_encode() {
    let name = "Unit 1: Application of Biology";
    assert_eq!(decode(&encode(name)), name);
    assert_eq!(decode("Viruses"), "Viruses");
}
