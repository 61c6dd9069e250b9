use super::*;

fn request(messages: Vec<ChatMessage>) -> ChatRequest {
    ChatRequest {
        messages,
        context: ChatContext {
            topic: "Photosynthesis".into(),
            overview: Some("how plants make food.".into()),
            key_concepts: Some(KeyConcepts(vec![
                ("Chlorophyll".into(), "green pigment".into()),
                ("Stomata".into(), "leaf pores".into()),
            ])),
        },
    }
}

#[test]
fn what_is_question_gets_overview() {
    let reply = compose_reply(&request(vec![ChatMessage::user("What is this about?")])).unwrap();
    assert_eq!(
        reply,
        "I understand you're asking about \"Photosynthesis\". This topic covers how plants make food."
    );
}

#[test]
fn key_concept_question_lists_concepts_in_order() {
    let reply = compose_reply(&request(vec![ChatMessage::user("Tell me the KEY CONCEPTS")])).unwrap();
    assert_eq!(
        reply,
        "I understand you're asking about \"Photosynthesis\". The key concepts include: Chlorophyll: green pigment. Stomata: leaf pores"
    );
}

#[test]
fn what_is_takes_priority_over_key_concept() {
    let reply = compose_reply(&request(vec![ChatMessage::user("what is a key concept?")])).unwrap();
    assert!(reply.contains("This topic covers"));
}

#[test]
fn other_questions_get_invitation() {
    let reply = compose_reply(&request(vec![ChatMessage::user("help")])).unwrap();
    assert!(reply.ends_with("Feel free to ask specific questions about this topic, and I'll do my best to help!"));
}

#[test]
fn only_last_user_message_is_considered() {
    let reply = compose_reply(&request(vec![
        ChatMessage::greeting("Photosynthesis"),
        ChatMessage::user("what is it"),
        ChatMessage::assistant("..."),
        ChatMessage::user("thanks"),
    ]))
    .unwrap();
    assert!(reply.contains("Feel free"));
}

#[test]
fn transcript_without_user_turn_is_rejected() {
    assert_eq!(
        compose_reply(&request(vec![ChatMessage::greeting("x")])),
        Err(ChatError::NoUserMessage)
    );
}

#[test]
fn missing_context_fields_compose_empty_sections() {
    let req = ChatRequest { messages: vec![ChatMessage::user("key concept")], context: ChatContext::default() };
    assert_eq!(
        compose_reply(&req).unwrap(),
        "I understand you're asking about \"\". The key concepts include: "
    );
}

#[test]
fn request_uses_camel_case_context() {
    let json = r#"{"messages":[{"role":"user","content":"hi"}],"context":{"topic":"T","keyConcepts":{"a":"b"}}}"#;
    let req: ChatRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.context.key_concepts.unwrap().len(), 1);
    assert_eq!(req.messages[0].role, Role::User);
}

#[test]
fn context_for_topic_drops_empty_notes() {
    let topic = crate::Topic { topic: "Cells".into(), ..crate::Topic::default() };
    let ctx = ChatContext::for_topic(&topic);
    assert_eq!(ctx.topic, "Cells");
    assert_eq!(ctx.overview, None);
    assert_eq!(ctx.key_concepts, None);
}
