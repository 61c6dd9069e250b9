//! Wire DTOs for the ingestion backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON. Chunk labels may arrive
//! as strings or numbers, and missing flags read as `false`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Accept a string, number or boolean and keep its text form.
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Text form of a JSON value as shown in metadata tables.
#[must_use]
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One uploaded document batch produced by the chunker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub has_embeddings: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub page_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub chapter_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub chapter_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub section_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub section_title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    #[serde(default)]
    pub metadata: ChunkMetadata,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub vector_store_status: Option<String>,
}

impl Chunk {
    /// Whether the vector store reports this chunk as stored.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.vector_store_status.as_deref().is_some_and(|s| {
            let s = s.trim();
            s.eq_ignore_ascii_case("indexed") || s.eq_ignore_ascii_case("embedded") || s.eq_ignore_ascii_case("stored")
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    #[serde(default)]
    pub exam_name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub year: Option<String>,
    #[serde(default)]
    pub question_count: u32,
    #[serde(default)]
    pub has_embeddings: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    #[serde(default)]
    pub question_text: String,
    /// Option key (`"A"`, `"B"`, ...) to option text, in key order.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub unit_tags: Vec<String>,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    #[serde(default)]
    pub has_embedding: bool,
}

impl Question {
    /// Unit tags followed by topic tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.unit_tags.iter().chain(&self.topic_tags).map(String::as_str)
    }
}

/// Identifier the vector store uses for a question's embedding.
#[must_use]
pub fn embedding_id(exam_id: &str, question_id: &str) -> String {
    format!("{exam_id}_{question_id}")
}

/// A stored question embedding as returned by the inspection endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionEmbedding {
    pub id: String,
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Page position echoed by list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

impl Pagination {
    /// First page of an empty listing.
    #[must_use]
    pub fn first(page_size: u32) -> Self {
        Self { page: 1, page_size, total_pages: 0, total_items: 0 }
    }
}

/// Listing and action responses carry a `status` marker.
pub trait Envelope {
    fn status(&self) -> Option<&str>;

    fn message(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FoldersResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChunksResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub chunks: Vec<Chunk>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ExamsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub pagination: Pagination,
}

/// Reply to a mutation (upload, embed, update, delete).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for FoldersResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Envelope for ChunksResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Envelope for ExamsResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Envelope for QuestionsResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Envelope for ActionResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Textbook,
    Exam,
}

impl ContentType {
    pub const ALL: [Self; 2] = [Self::Textbook, Self::Exam];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Textbook => "Textbook",
            Self::Exam => "Exam",
        }
    }
}

/// Body of `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub n_results: u32,
    pub content_types: Vec<ContentType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryHit {
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub normalized_score: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResults {
    #[serde(default)]
    pub textbook: Vec<QueryHit>,
    #[serde(default)]
    pub exam: Vec<QueryHit>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: QueryResults,
    #[serde(default)]
    pub llm_response: Option<String>,
}

impl Envelope for QueryResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
