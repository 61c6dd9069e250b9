//! Exam JSON checks run before anything is sent.
//!
//! DESIGN
//! ======
//! The file is read once for a preview; validation runs on submit against
//! the parsed document. A draft that fails any check never produces an
//! [`UploadRequest`], so the page has nothing to send.
//!
//! Field presence follows loose truthiness: an empty string, zero, `false`,
//! or `null` counts as missing.

#[cfg(test)]
#[path = "exam_upload_test.rs"]
mod exam_upload_test;

use serde_json::Value;

use crate::net::api::{EXAM_UPLOAD_PATH, FILE_FIELD};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExamFormatError {
    #[error("Please select a valid JSON file.")]
    NotJson,
    #[error("Invalid JSON format.")]
    InvalidJson,
    #[error("Invalid exam format. Missing exam data or questions array.")]
    MissingExam,
    #[error("Invalid exam format. Missing exam name or subject.")]
    MissingNameOrSubject,
    #[error("Some questions are missing required fields (ID, text, or answer).")]
    IncompleteQuestions,
}

/// JSON by MIME type or, when the browser reports none, by extension.
#[must_use]
pub fn is_json_file(name: &str, mime: &str) -> bool {
    if mime.is_empty() {
        return name.to_ascii_lowercase().ends_with(".json");
    }
    mime == "application/json"
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Summary shown under the file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamPreview {
    pub exam_name: String,
    pub subject: String,
    pub question_count: usize,
}

/// Check a parsed exam document.
///
/// # Errors
///
/// The first failing check, in the order: exam/questions, name/subject,
/// per-question fields.
pub fn validate(document: &Value) -> Result<ExamPreview, ExamFormatError> {
    let exam = document.get("exam").filter(|e| truthy(Some(e))).ok_or(ExamFormatError::MissingExam)?;
    let questions = exam.get("questions").and_then(Value::as_array).ok_or(ExamFormatError::MissingExam)?;
    if !truthy(exam.get("exam_name")) || !truthy(exam.get("subject")) {
        return Err(ExamFormatError::MissingNameOrSubject);
    }
    let complete = |q: &Value| truthy(q.get("question_id")) && truthy(q.get("question_text")) && truthy(q.get("answer"));
    if !questions.iter().all(complete) {
        return Err(ExamFormatError::IncompleteQuestions);
    }
    Ok(ExamPreview {
        exam_name: text_of(exam.get("exam_name")),
        subject: text_of(exam.get("subject")),
        question_count: questions.len(),
    })
}

/// The one upload a valid draft allows: where it goes and which multipart
/// field carries the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: &'static str,
    pub field: &'static str,
    pub file_name: String,
}

/// Uploader form state between file choice and submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamDraft {
    file_name: Option<String>,
    document: Option<Value>,
    error: Option<ExamFormatError>,
}

impl ExamDraft {
    /// Register a picked file. Returns whether its text should be read.
    pub fn choose_file(&mut self, name: &str, mime: &str) -> bool {
        self.document = None;
        self.error = None;
        if is_json_file(name, mime) {
            self.file_name = Some(name.to_owned());
            true
        } else {
            self.file_name = None;
            self.error = Some(ExamFormatError::NotJson);
            false
        }
    }

    /// Parse the file text for preview.
    pub fn load_text(&mut self, text: &str) {
        match serde_json::from_str::<Value>(text) {
            Ok(doc) => {
                self.document = Some(doc);
                self.error = None;
            }
            Err(_) => {
                self.document = None;
                self.error = Some(ExamFormatError::InvalidJson);
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<ExamFormatError> {
        self.error
    }

    /// Best-effort preview of whatever was parsed, valid or not.
    #[must_use]
    pub fn preview(&self) -> Option<ExamPreview> {
        let exam = self.document.as_ref()?.get("exam")?;
        Some(ExamPreview {
            exam_name: text_of(exam.get("exam_name")),
            subject: text_of(exam.get("subject")),
            question_count: exam.get("questions").and_then(Value::as_array).map_or(0, Vec::len),
        })
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && self.document.is_some()
    }

    /// Validate and describe the single upload to perform.
    ///
    /// # Errors
    ///
    /// The validation failure, also kept on the draft for display.
    pub fn submit(&mut self) -> Result<UploadRequest, ExamFormatError> {
        let outcome = match (&self.file_name, &self.document) {
            (Some(name), Some(doc)) => validate(doc).map(|_| UploadRequest {
                path: EXAM_UPLOAD_PATH,
                field: FILE_FIELD,
                file_name: name.clone(),
            }),
            _ => Err(ExamFormatError::NotJson),
        };
        self.error = outcome.as_ref().err().copied();
        outcome
    }
}
