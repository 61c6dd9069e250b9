//! Query form and result tabs.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::{ContentType, QueryHit, QueryRequest, QueryResponse};

pub const DEFAULT_RESULTS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryForm {
    pub query: String,
    pub subject: String,
    pub grade: String,
    pub n_results: u32,
    pub content_types: Vec<ContentType>,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            subject: String::new(),
            grade: String::new(),
            n_results: DEFAULT_RESULTS,
            content_types: ContentType::ALL.to_vec(),
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl QueryForm {
    pub fn toggle_content_type(&mut self, kind: ContentType) {
        if let Some(pos) = self.content_types.iter().position(|k| *k == kind) {
            self.content_types.remove(pos);
        } else {
            self.content_types.push(kind);
        }
    }

    #[must_use]
    pub fn includes(&self, kind: ContentType) -> bool {
        self.content_types.contains(&kind)
    }

    /// Parse the results box; anything unusable keeps the default.
    pub fn set_n_results(&mut self, raw: &str) {
        self.n_results = raw.trim().parse().ok().filter(|n| *n > 0).unwrap_or(DEFAULT_RESULTS);
    }

    /// Request body, or `None` while the query box is blank.
    #[must_use]
    pub fn to_request(&self) -> Option<QueryRequest> {
        let query = non_blank(&self.query)?;
        let mut content_types: Vec<ContentType> =
            ContentType::ALL.into_iter().filter(|k| self.content_types.contains(k)).collect();
        if content_types.is_empty() {
            content_types = ContentType::ALL.to_vec();
        }
        Some(QueryRequest {
            query,
            subject: non_blank(&self.subject),
            grade: non_blank(&self.grade),
            n_results: self.n_results,
            content_types,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultTab {
    #[default]
    All,
    Textbook,
    Exam,
    AiResponse,
}

impl ResultTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Textbook, Self::Exam, Self::AiResponse];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Textbook => "Textbook",
            Self::Exam => "Exam",
            Self::AiResponse => "AI Response",
        }
    }
}

/// Hits shown under `tab`, each tagged with its source collection.
#[must_use]
pub fn hits_for(tab: ResultTab, response: &QueryResponse) -> Vec<(ContentType, QueryHit)> {
    let textbook = response.results.textbook.iter().map(|h| (ContentType::Textbook, h.clone()));
    let exam = response.results.exam.iter().map(|h| (ContentType::Exam, h.clone()));
    match tab {
        ResultTab::All => textbook.chain(exam).collect(),
        ResultTab::Textbook => textbook.collect(),
        ResultTab::Exam => exam.collect(),
        ResultTab::AiResponse => Vec::new(),
    }
}

/// Count badge for a tab.
#[must_use]
pub fn tab_count(tab: ResultTab, response: &QueryResponse) -> Option<usize> {
    match tab {
        ResultTab::AiResponse => None,
        other => Some(hits_for(other, response).len()),
    }
}

/// Normalized score as a whole percentage, clamped to 0–100.
#[must_use]
pub fn score_label(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => {
            #[allow(clippy::cast_possible_truncation)]
            let pct = (s * 100.0).round().clamp(0.0, 100.0) as i64;
            format!("{pct}%")
        }
        _ => "—".to_owned(),
    }
}

#[must_use]
pub fn distance_label(distance: Option<f64>) -> String {
    distance.filter(|d| d.is_finite()).map_or_else(|| "—".to_owned(), |d| format!("{d:.4}"))
}
