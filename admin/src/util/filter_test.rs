use super::*;
use crate::net::types::ChunkMetadata;

fn chunk(text: &str, chapter: Option<&str>) -> Chunk {
    Chunk {
        text: text.into(),
        metadata: ChunkMetadata { chapter_title: chapter.map(Into::into), ..ChunkMetadata::default() },
        ..Chunk::default()
    }
}

fn question(text: &str, units: &[&str], topics: &[&str]) -> Question {
    Question {
        question_id: text.into(),
        question_text: text.into(),
        unit_tags: units.iter().map(|s| (*s).into()).collect(),
        topic_tags: topics.iter().map(|s| (*s).into()).collect(),
        ..Question::default()
    }
}

#[test]
fn chunk_filter_checks_text_and_chapter_title() {
    let page = [chunk("Mitosis produces two cells", None), chunk("Other", Some("Genetics")), chunk("Unrelated", None)];
    assert_eq!(filter_chunks(&page, "MITOSIS").len(), 1);
    assert_eq!(filter_chunks(&page, "genet").len(), 1);
}

#[test]
fn blank_filter_keeps_whole_page() {
    let page = [chunk("a", None), chunk("b", None)];
    assert_eq!(filter_chunks(&page, "  ").len(), 2);
}

#[test]
fn filter_with_no_match_on_page_is_empty() {
    let page = [chunk("photosynthesis", Some("Plants"))];
    assert!(filter_chunks(&page, "respiration").is_empty());
}

#[test]
fn question_search_covers_text_and_tags() {
    let page = [question("Which organelle makes ATP?", &["Unit 2"], &["Cells"]), question("Define osmosis", &[], &[])];
    assert_eq!(filter_questions(&page, "atp").len(), 1);
    assert_eq!(filter_questions(&page, "cells").len(), 1);
    assert_eq!(filter_questions(&page, "unit 2")[0].question_text, "Which organelle makes ATP?");
}

#[test]
fn unique_tags_lists_units_before_topics_without_duplicates() {
    let page = [
        question("a", &["Unit 1"], &["Cells"]),
        question("b", &["Unit 2", "Unit 1"], &["Enzymes", "Cells"]),
    ];
    assert_eq!(unique_tags(&page), ["Unit 1", "Unit 2", "Cells", "Enzymes"]);
}
