use super::*;
use serde_json::json;

fn valid_exam() -> Value {
    json!({
        "exam": {
            "exam_name": "ESLCE Biology 2015",
            "subject": "Biology",
            "year": 2015,
            "questions": [
                {"question_id": "q1", "question_text": "What is a cell?", "options": {"A": "x"}, "answer": "A"},
                {"question_id": "q2", "question_text": "Define osmosis.", "answer": "C"}
            ]
        }
    })
}

fn loaded(doc: &Value) -> ExamDraft {
    let mut draft = ExamDraft::default();
    assert!(draft.choose_file("bio.json", "application/json"));
    draft.load_text(&doc.to_string());
    draft
}

#[test]
fn json_detection_prefers_mime() {
    assert!(is_json_file("exam.json", "application/json"));
    assert!(!is_json_file("exam.json", "text/plain"));
    assert!(is_json_file("EXAM.JSON", ""));
    assert!(!is_json_file("exam.pdf", ""));
}

#[test]
fn non_json_file_is_refused_before_reading() {
    let mut draft = ExamDraft::default();
    assert!(!draft.choose_file("paper.pdf", "application/pdf"));
    assert_eq!(draft.error(), Some(ExamFormatError::NotJson));
    assert!(!draft.can_submit());
}

#[test]
fn unparsable_text_reports_invalid_json() {
    let mut draft = ExamDraft::default();
    draft.choose_file("bio.json", "application/json");
    draft.load_text("{not json");
    assert_eq!(draft.error(), Some(ExamFormatError::InvalidJson));
    assert_eq!(draft.preview(), None);
}

#[test]
fn valid_exam_builds_exactly_one_upload() {
    let mut draft = loaded(&valid_exam());
    let request = draft.submit().unwrap();
    assert_eq!(
        request,
        UploadRequest { path: "/api/admin/exams/upload", field: "file", file_name: "bio.json".into() }
    );
    assert_eq!(draft.error(), None);
}

#[test]
fn upload_request_targets_exam_endpoint_not_documents() {
    let request = loaded(&valid_exam()).submit().unwrap();
    assert_eq!(request.path, crate::net::api::EXAM_UPLOAD_PATH);
    assert_ne!(request.path, crate::net::api::DOCUMENT_UPLOAD_PATH);
    assert_eq!(request.field, crate::net::api::FILE_FIELD);
}

#[test]
fn preview_summarises_exam() {
    let draft = loaded(&valid_exam());
    assert_eq!(
        draft.preview(),
        Some(ExamPreview { exam_name: "ESLCE Biology 2015".into(), subject: "Biology".into(), question_count: 2 })
    );
}

#[test]
fn missing_exam_name_is_rejected_without_request() {
    let mut doc = valid_exam();
    doc["exam"]["exam_name"] = json!("");
    let mut draft = loaded(&doc);
    assert_eq!(draft.submit(), Err(ExamFormatError::MissingNameOrSubject));
    assert_eq!(draft.error(), Some(ExamFormatError::MissingNameOrSubject));
}

#[test]
fn missing_questions_array_is_rejected() {
    assert_eq!(validate(&json!({"exam": {"exam_name": "x", "subject": "y"}})), Err(ExamFormatError::MissingExam));
    assert_eq!(validate(&json!({"questions": []})), Err(ExamFormatError::MissingExam));
    assert_eq!(validate(&json!([])), Err(ExamFormatError::MissingExam));
}

#[test]
fn question_without_answer_is_rejected() {
    let mut doc = valid_exam();
    doc["exam"]["questions"][1]["answer"] = Value::Null;
    assert_eq!(validate(&doc), Err(ExamFormatError::IncompleteQuestions));
}

#[test]
fn numeric_question_id_counts_when_nonzero() {
    let mut doc = valid_exam();
    doc["exam"]["questions"][0]["question_id"] = json!(7);
    assert!(validate(&doc).is_ok());
    doc["exam"]["questions"][0]["question_id"] = json!(0);
    assert_eq!(validate(&doc), Err(ExamFormatError::IncompleteQuestions));
}

#[test]
fn error_messages_match_form_copy() {
    assert_eq!(
        ExamFormatError::IncompleteQuestions.to_string(),
        "Some questions are missing required fields (ID, text, or answer)."
    );
}

#[test]
fn clear_resets_draft() {
    let mut draft = loaded(&valid_exam());
    draft.clear();
    assert_eq!(draft, ExamDraft::default());
}
