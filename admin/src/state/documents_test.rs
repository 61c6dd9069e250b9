use super::*;

#[test]
fn submit_requires_file() {
    let mut draft = DocumentDraft::default();
    assert!(!draft.can_submit());
    draft.choose_file(Some("biology.pdf".into()));
    assert!(draft.can_submit());
    draft.choose_file(Some(String::new()));
    assert!(!draft.can_submit());
}

#[test]
fn submit_blocked_while_busy() {
    let mut draft = DocumentDraft::default();
    draft.choose_file(Some("biology.pdf".into()));
    draft.busy = true;
    assert!(!draft.can_submit());
    assert_eq!(draft.button_label(), "Processing...");
}

#[test]
fn fields_are_trimmed() {
    let draft = DocumentDraft { subject: " Biology ".into(), grade: "12".into(), ..DocumentDraft::default() };
    assert_eq!(draft.fields(), [("subject", "Biology"), ("grade", "12")]);
}

#[test]
fn success_resets_and_failure_keeps_input() {
    let mut draft = DocumentDraft { file_name: Some("a.pdf".into()), subject: "Chem".into(), busy: true, ..DocumentDraft::default() };
    draft.finish(Err("request failed (500)".into()));
    assert!(!draft.busy);
    assert_eq!(draft.subject, "Chem");
    assert_eq!(draft.error.as_deref(), Some("request failed (500)"));
    draft.finish(Ok(()));
    assert_eq!(draft, DocumentDraft::default());
}
