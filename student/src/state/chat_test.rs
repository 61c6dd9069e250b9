use super::*;
use curriculum::Role;

fn transcript() -> ChatTranscript {
    ChatTranscript::new(ChatContext { topic: "Osmosis".into(), ..ChatContext::default() })
}

#[test]
fn opens_with_greeting() {
    let t = transcript();
    assert_eq!(t.messages().len(), 1);
    assert_eq!(t.messages()[0].role, Role::Assistant);
    assert!(t.messages()[0].content.contains("Osmosis"));
}

#[test]
fn blank_draft_is_not_sent() {
    let mut t = transcript();
    t.set_draft("   ");
    assert!(!t.can_send());
    assert!(t.submit().is_none());
    assert_eq!(t.messages().len(), 1);
}

#[test]
fn submit_appends_user_turn_and_posts_full_transcript() {
    let mut t = transcript();
    t.set_draft(" What is osmosis? ");
    let req = t.submit().unwrap();
    assert_eq!(t.draft(), "");
    assert!(t.is_pending());
    assert_eq!(req.messages.len(), 2);
    assert_eq!(req.messages[1], ChatMessage::user("What is osmosis?"));
    assert_eq!(req.context.topic, "Osmosis");
}

#[test]
fn no_second_send_while_pending() {
    let mut t = transcript();
    t.set_draft("one");
    t.submit().unwrap();
    t.set_draft("two");
    assert!(t.submit().is_none());
}

#[test]
fn reply_is_appended() {
    let mut t = transcript();
    t.set_draft("hi");
    t.submit();
    t.receive(Ok("hello".into()));
    assert!(!t.is_pending());
    assert_eq!(t.messages().last().unwrap(), &ChatMessage::assistant("hello"));
}

#[test]
fn failure_appends_apology() {
    let mut t = transcript();
    t.set_draft("hi");
    t.submit();
    t.receive(Err("500".into()));
    assert_eq!(t.messages().last().unwrap().content, FAILURE_REPLY);
}

#[test]
fn stray_reply_is_ignored() {
    let mut t = transcript();
    t.receive(Ok("late".into()));
    assert_eq!(t.messages().len(), 1);
}
