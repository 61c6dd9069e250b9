//! REST helpers for the ingestion backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, joined onto the
//! injected [`BackendConfig`] origin.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! Path builders are plain functions so URL shapes are unit-tested without
//! a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::{
    ActionResponse, ChunksResponse, Exam, Folder, QueryRequest, QueryResponse, QuestionEmbedding, QuestionsResponse,
};
use crate::config::BackendConfig;

pub const FOLDERS_PATH: &str = "/api/admin/documents/folders";
pub const DOCUMENT_UPLOAD_PATH: &str = "/api/admin/documents/chunk";
pub const EXAMS_PATH: &str = "/api/admin/exams/list";
pub const EXAM_UPLOAD_PATH: &str = "/api/admin/exams/upload";
pub const QUERY_PATH: &str = "/api/query";

/// Multipart field both upload endpoints read the file from.
pub const FILE_FIELD: &str = "file";

const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn seg(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[must_use]
pub fn chunks_path(folder: &str, page: u32, page_size: u32) -> String {
    format!("/api/admin/documents/chunks/{}?page={page}&page_size={page_size}", seg(folder))
}

#[must_use]
pub fn index_folder_path(folder: &str) -> String {
    format!("/api/admin/documents/index/{}", seg(folder))
}

#[must_use]
pub fn exam_embeddings_path(exam_id: &str) -> String {
    format!("/api/admin/exams/{}/embeddings", seg(exam_id))
}

/// Question page path; selected tags travel as one comma-joined parameter.
#[must_use]
pub fn questions_path(exam_id: &str, page: u32, page_size: u32, tags: &[String]) -> String {
    let mut path = format!("/api/admin/exams/{}/questions?page={page}&page_size={page_size}", seg(exam_id));
    if !tags.is_empty() {
        let joined: Vec<String> = tags.iter().map(|t| seg(t)).collect();
        path.push_str("&tags=");
        path.push_str(&joined.join(","));
    }
    path
}

#[must_use]
pub fn question_embeddings_path(question_id: &str) -> String {
    format!("/api/admin/exams/questions/{}/embeddings", seg(question_id))
}

#[must_use]
pub fn question_embedding_path(exam_id: &str, question_id: &str) -> String {
    format!("/api/admin/exams/{}/questions/{}/embedding", seg(exam_id), seg(question_id))
}

#[must_use]
pub fn embedding_metadata_path(exam_id: &str, question_id: &str) -> String {
    format!("{}/metadata", question_embedding_path(exam_id, question_id))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} answered {status}", resp.url());
        return Err(super::error::from_status(status, &body));
    }
    Ok(resp.json::<T>().await?)
}

#[cfg(feature = "hydrate")]
async fn get<T: serde::de::DeserializeOwned>(cfg: &BackendConfig, path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&cfg.url(path)).send().await?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_empty(cfg: &BackendConfig, path: &str) -> Result<ActionResponse, ApiError> {
    let resp = gloo_net::http::Request::post(&cfg.url(path)).send().await?;
    super::error::ensure_success(decode::<ActionResponse>(resp).await?)
}

#[cfg(feature = "hydrate")]
async fn post_form(cfg: &BackendConfig, path: &str, form: web_sys::FormData) -> Result<ActionResponse, ApiError> {
    let resp = gloo_net::http::Request::post(&cfg.url(path)).body(form)?.send().await?;
    super::error::ensure_success(decode::<ActionResponse>(resp).await?)
}

/// `GET /api/admin/documents/folders`.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn fetch_folders(cfg: &BackendConfig) -> Result<Vec<Folder>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: super::types::FoldersResponse = get(cfg, FOLDERS_PATH).await?;
        Ok(super::error::ensure_success(body)?.folders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(ApiError::Unavailable)
    }
}

/// One page of chunks in `folder`.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn fetch_chunks(cfg: &BackendConfig, folder: &str, page: u32, page_size: u32) -> Result<ChunksResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: ChunksResponse = get(cfg, &chunks_path(folder, page, page_size)).await?;
        super::error::ensure_success(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, folder, page, page_size);
        Err(ApiError::Unavailable)
    }
}

/// Start embedding every chunk in `folder`.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn index_folder(cfg: &BackendConfig, folder: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("indexing folder {folder}");
        post_empty(cfg, &index_folder_path(folder)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, folder);
        Err(ApiError::Unavailable)
    }
}

/// Multipart PDF upload (`file`, `subject`, `grade`) to the chunker.
///
/// # Errors
///
/// Network, status, or envelope failures.
#[cfg(feature = "hydrate")]
pub async fn upload_document(cfg: &BackendConfig, form: web_sys::FormData) -> Result<ActionResponse, ApiError> {
    post_form(cfg, DOCUMENT_UPLOAD_PATH, form).await
}

/// `GET /api/admin/exams/list`.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn fetch_exams(cfg: &BackendConfig) -> Result<Vec<Exam>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: super::types::ExamsResponse = get(cfg, EXAMS_PATH).await?;
        Ok(super::error::ensure_success(body)?.exams)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
        Err(ApiError::Unavailable)
    }
}

/// Multipart exam JSON upload, posted to `request.path`.
///
/// # Errors
///
/// Network, status, or envelope failures.
#[cfg(feature = "hydrate")]
pub async fn upload_exam(
    cfg: &BackendConfig,
    request: &crate::util::exam_upload::UploadRequest,
    form: web_sys::FormData,
) -> Result<ActionResponse, ApiError> {
    post_form(cfg, request.path, form).await
}

/// Embed every question of an exam.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn create_exam_embeddings(cfg: &BackendConfig, exam_id: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("creating embeddings for exam {exam_id}");
        post_empty(cfg, &exam_embeddings_path(exam_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, exam_id);
        Err(ApiError::Unavailable)
    }
}

/// One page of an exam's questions, optionally narrowed to `tags`.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn fetch_questions(
    cfg: &BackendConfig,
    exam_id: &str,
    page: u32,
    page_size: u32,
    tags: &[String],
) -> Result<QuestionsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: QuestionsResponse = get(cfg, &questions_path(exam_id, page, page_size, tags)).await?;
        super::error::ensure_success(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, exam_id, page, page_size, tags);
        Err(ApiError::Unavailable)
    }
}

/// Embed a single question.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn create_question_embedding(cfg: &BackendConfig, question_id: &str) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(cfg, &question_embeddings_path(question_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, question_id);
        Err(ApiError::Unavailable)
    }
}

/// Stored embedding for a question. A 404 maps to [`ApiError::NotFound`].
///
/// # Errors
///
/// Network, status, or not-found failures.
pub async fn fetch_question_embedding(
    cfg: &BackendConfig,
    exam_id: &str,
    question_id: &str,
) -> Result<QuestionEmbedding, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        match get(cfg, &question_embedding_path(exam_id, question_id)).await {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound),
            other => other,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, exam_id, question_id);
        Err(ApiError::Unavailable)
    }
}

/// Replace the listed metadata keys of a question embedding.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn update_embedding_metadata(
    cfg: &BackendConfig,
    exam_id: &str,
    question_id: &str,
    edits: &serde_json::Map<String, serde_json::Value>,
) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = cfg.url(&embedding_metadata_path(exam_id, question_id));
        let resp = gloo_net::http::Request::put(&url).json(edits)?.send().await?;
        super::error::ensure_success(decode::<ActionResponse>(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, exam_id, question_id, edits);
        Err(ApiError::Unavailable)
    }
}

/// Remove a question's embedding from the vector store.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn delete_question_embedding(
    cfg: &BackendConfig,
    exam_id: &str,
    question_id: &str,
) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("deleting embedding {exam_id}_{question_id}");
        let url = cfg.url(&question_embedding_path(exam_id, question_id));
        let resp = gloo_net::http::Request::delete(&url).send().await?;
        super::error::ensure_success(decode::<ActionResponse>(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, exam_id, question_id);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/query` with a JSON body.
///
/// # Errors
///
/// Network, status, or envelope failures.
pub async fn run_query(cfg: &BackendConfig, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&cfg.url(QUERY_PATH)).json(request)?.send().await?;
        super::error::ensure_success(decode::<QueryResponse>(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, request);
        Err(ApiError::Unavailable)
    }
}
