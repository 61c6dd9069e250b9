//! Local filters over the page currently on screen.
//!
//! Both browsers filter only what the backend returned for the current page;
//! a match on another page is not shown until that page is fetched.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{Chunk, Question};

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive match on chunk text or chapter title.
#[must_use]
pub fn chunk_matches(chunk: &Chunk, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_folded(&chunk.text, &needle)
        || chunk.metadata.chapter_title.as_deref().is_some_and(|t| contains_folded(t, &needle))
}

#[must_use]
pub fn filter_chunks<'a>(chunks: &'a [Chunk], needle: &str) -> Vec<&'a Chunk> {
    chunks.iter().filter(|c| chunk_matches(c, needle)).collect()
}

/// Case-insensitive match on question text or any of its tags.
#[must_use]
pub fn question_matches(question: &Question, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_folded(&question.question_text, &needle) || question.tags().any(|t| contains_folded(t, &needle))
}

#[must_use]
pub fn filter_questions<'a>(questions: &'a [Question], needle: &str) -> Vec<&'a Question> {
    questions.iter().filter(|q| question_matches(q, needle)).collect()
}

/// Distinct tags on the page: all unit tags, then topic tags, first-seen order.
#[must_use]
pub fn unique_tags(questions: &[Question]) -> Vec<String> {
    let units = questions.iter().flat_map(|q| &q.unit_tags);
    let topics = questions.iter().flat_map(|q| &q.topic_tags);
    let mut out: Vec<String> = Vec::new();
    for tag in units.chain(topics) {
        if !out.contains(tag) {
            out.push(tag.clone());
        }
    }
    out
}
