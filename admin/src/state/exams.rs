//! Exam list and question browser state.
//!
//! DESIGN
//! ======
//! Embedding flags shown here mirror confirmed backend mutations: a flag is
//! only flipped after the matching request reports success, and the list is
//! re-fetched after exam-wide operations.

#[cfg(test)]
#[path = "exams_test.rs"]
mod exams_test;

use serde_json::{Map, Value};

use crate::net::types::{Exam, Pagination, Question, QuestionEmbedding, QuestionsResponse, display_value, embedding_id};
use crate::util::filter;

/// Questions fetched per page.
pub const QUESTION_PAGE_SIZE: u32 = 10;

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this embedding? This action cannot be undone.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExamTab {
    #[default]
    List,
    Upload,
}

impl ExamTab {
    pub const ALL: [Self; 2] = [Self::List, Self::Upload];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "Exam List",
            Self::Upload => "Upload Exam",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamList {
    pub exams: Vec<Exam>,
    pub loading: bool,
    pub error: Option<String>,
    /// Exam whose embedding request is in flight.
    pub processing: Option<String>,
}

impl ExamList {
    #[must_use]
    pub fn shows_embed_button(exam: &Exam) -> bool {
        !exam.has_embeddings
    }

    #[must_use]
    pub fn is_processing(&self, exam_id: &str) -> bool {
        self.processing.as_deref() == Some(exam_id)
    }

    /// Claim the per-exam slot; `false` when that exam is already running.
    pub fn begin_embedding(&mut self, exam_id: &str) -> bool {
        if self.is_processing(exam_id) {
            return false;
        }
        self.processing = Some(exam_id.to_owned());
        true
    }

    pub fn finish_embedding(&mut self) {
        self.processing = None;
    }
}

/// "{subject} • {year}" byline.
#[must_use]
pub fn exam_byline(exam: &Exam) -> String {
    match exam.year.as_deref() {
        Some(year) if !year.is_empty() => format!("{} • {year}", exam.subject),
        _ => exam.subject.clone(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionBrowser {
    pub exam_id: String,
    pub questions: Vec<Question>,
    pub pagination: Pagination,
    selected_tags: Vec<String>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Question whose embedding request is in flight.
    pub processing: Option<String>,
    pub embedding: Option<QuestionEmbedding>,
    pub editing: bool,
    edits: Map<String, Value>,
}

impl QuestionBrowser {
    #[must_use]
    pub fn new(exam_id: &str) -> Self {
        Self {
            exam_id: exam_id.to_owned(),
            questions: Vec::new(),
            pagination: Pagination::first(QUESTION_PAGE_SIZE),
            selected_tags: Vec::new(),
            search: String::new(),
            loading: false,
            error: None,
            processing: None,
            embedding: None,
            editing: false,
            edits: Map::new(),
        }
    }

    pub fn load(&mut self, response: QuestionsResponse) {
        self.questions = response.questions;
        self.pagination = response.pagination;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page.max(1);
    }

    /// Add or remove a tag from the filter and rewind to page 1.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_owned());
        }
        self.pagination.page = 1;
    }

    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Tags offered by the filter: those on the page plus any still selected.
    #[must_use]
    pub fn available_tags(&self) -> Vec<String> {
        let mut tags = filter::unique_tags(&self.questions);
        for tag in &self.selected_tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    #[must_use]
    pub fn visible_questions(&self) -> Vec<Question> {
        filter::filter_questions(&self.questions, &self.search).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn can_embed(&self, question: &Question) -> bool {
        !question.has_embedding && self.processing.is_none()
    }

    #[must_use]
    pub fn can_delete(question: &Question) -> bool {
        question.has_embedding
    }

    #[must_use]
    pub fn is_processing(&self, question_id: &str) -> bool {
        self.processing.as_deref() == Some(question_id)
    }

    pub fn begin_embedding(&mut self, question_id: &str) -> bool {
        if self.processing.is_some() {
            return false;
        }
        self.processing = Some(question_id.to_owned());
        true
    }

    pub fn finish_embedding(&mut self) {
        self.processing = None;
    }

    /// Mirror a confirmed create or delete on the local copy.
    pub fn mark_embedded(&mut self, question_id: &str, embedded: bool) {
        if let Some(q) = self.questions.iter_mut().find(|q| q.question_id == question_id) {
            q.has_embedding = embedded;
        }
        if !embedded && self.inspecting(question_id) {
            self.close_embedding();
        }
    }

    pub fn show_embedding(&mut self, embedding: QuestionEmbedding) {
        self.embedding = Some(embedding);
        self.editing = false;
        self.edits.clear();
    }

    pub fn close_embedding(&mut self) {
        self.embedding = None;
        self.editing = false;
        self.edits.clear();
    }

    /// Whether the open embedding panel belongs to `question_id`.
    #[must_use]
    pub fn inspecting(&self, question_id: &str) -> bool {
        self.embedding.as_ref().is_some_and(|e| e.id == embedding_id(&self.exam_id, question_id))
    }

    pub fn start_edit(&mut self) {
        self.editing = self.embedding.is_some();
        self.edits.clear();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.edits.clear();
    }

    /// Record an edited value for one metadata key.
    pub fn set_edit(&mut self, key: &str, value: String) {
        self.edits.insert(key.to_owned(), Value::String(value));
    }

    /// Current text for a metadata field: the edit if any, else the stored value.
    #[must_use]
    pub fn field_text(&self, key: &str) -> String {
        if let Some(edited) = self.edits.get(key) {
            return display_value(edited);
        }
        self.embedding.as_ref().and_then(|e| e.metadata.get(key)).map(display_value).unwrap_or_default()
    }

    /// Body for the metadata PUT: only keys the user touched.
    #[must_use]
    pub fn metadata_update(&self) -> Map<String, Value> {
        self.edits.clone()
    }

    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Pretty JSON for the metadata panel.
#[must_use]
pub fn pretty_metadata(metadata: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(metadata).unwrap_or_default()
}
