use super::*;
use curriculum::{ChatContext, ChatMessage};

fn state() -> State<ChatState> {
    State(ChatState { reply_delay: Duration::ZERO })
}

fn request(messages: Vec<ChatMessage>) -> ChatRequest {
    ChatRequest {
        messages,
        context: ChatContext { topic: "Respiration".into(), overview: Some("energy release.".into()), key_concepts: None },
    }
}

#[tokio::test]
async fn chat_answers_with_composed_reply() {
    let (status, Json(body)) = chat(state(), Ok(Json(request(vec![ChatMessage::user("What is it?")])))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I understand you're asking about \"Respiration\". This topic covers energy release."
    );
}

#[tokio::test]
async fn chat_without_user_message_is_bad_request() {
    let (status, Json(body)) = chat(state(), Ok(Json(request(vec![ChatMessage::greeting("x")])))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn chat_waits_for_configured_delay() {
    let slow = State(ChatState { reply_delay: Duration::from_millis(20) });
    let started = tokio::time::Instant::now();
    let (status, _) = chat(slow, Ok(Json(request(vec![ChatMessage::user("hi")])))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
async fn other_methods_get_405() {
    let (status, Json(body)) = method_not_allowed().await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}
