use super::*;
use curriculum::{ChatContext, ChatMessage};
use futures::executor::block_on;

#[test]
fn catalog_path_points_at_bundled_file() {
    assert!(CATALOG_PATH.starts_with("/data/"));
    assert!(CATALOG_PATH.ends_with(".json"));
}

#[test]
fn calls_fail_without_browser() {
    assert_eq!(block_on(fetch_catalog()).unwrap_err(), UNAVAILABLE);
    let req = ChatRequest { messages: vec![ChatMessage::user("hi")], context: ChatContext::default() };
    assert_eq!(block_on(send_chat(&req)).unwrap_err(), UNAVAILABLE);
}
