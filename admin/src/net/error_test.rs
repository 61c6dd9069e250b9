use super::*;
use crate::net::types::{ActionResponse, FoldersResponse};

#[test]
fn detail_string_is_extracted() {
    assert_eq!(detail_from_body(r#"{"detail":"Exam not found"}"#).as_deref(), Some("Exam not found"));
}

#[test]
fn detail_list_keeps_json_text() {
    let detail = detail_from_body(r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#).unwrap();
    assert!(detail.contains("field required"));
}

#[test]
fn non_json_body_has_no_detail() {
    assert_eq!(detail_from_body("<html>Bad gateway</html>"), None);
    assert_eq!(detail_from_body(r#"{"detail":"  "}"#), None);
}

#[test]
fn status_error_mentions_code_and_detail() {
    let err = from_status(500, r#"{"detail":"Error creating embeddings: boom"}"#);
    assert_eq!(err.to_string(), "request failed (500): Error creating embeddings: boom");
    assert_eq!(from_status(502, "").to_string(), "request failed (502)");
}

#[test]
fn success_and_missing_status_are_accepted() {
    let ok = ActionResponse { status: Some("success".into()), message: None };
    assert!(ensure_success(ok).is_ok());
    assert!(ensure_success(FoldersResponse::default()).is_ok());
}

#[test]
fn other_status_is_rejected_with_message() {
    let resp = ActionResponse { status: Some("error".into()), message: Some("Folder is empty".into()) };
    assert_eq!(ensure_success(resp), Err(ApiError::Rejected("Folder is empty".into())));

    let bare = FoldersResponse { status: Some("error".into()), folders: Vec::new() };
    assert_eq!(ensure_success(bare), Err(ApiError::Rejected("unexpected status: error".into())));
}
