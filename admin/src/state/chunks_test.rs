use super::*;
use crate::net::types::ChunkMetadata;

fn folder(name: &str, has_embeddings: bool) -> Folder {
    Folder { name: name.into(), has_embeddings, ..Folder::default() }
}

fn page(texts: &[&str], page: u32, total_items: u32) -> ChunksResponse {
    ChunksResponse {
        status: Some("success".into()),
        chunks: texts.iter().map(|t| Chunk { text: (*t).into(), ..Chunk::default() }).collect(),
        pagination: Pagination { page, page_size: CHUNK_PAGE_SIZE, total_pages: total_items.div_ceil(12), total_items },
    }
}

#[test]
fn opening_folder_starts_at_first_page() {
    let mut state = ChunkBrowser::default();
    state.set_page(4);
    state.open_folder("bio_g12");
    assert_eq!(state.selected.as_deref(), Some("bio_g12"));
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.pagination.page_size, 12);
}

#[test]
fn back_clears_chunks_and_selection() {
    let mut state = ChunkBrowser::default();
    state.open_folder("bio_g12");
    state.load_chunks(page(&["a", "b"], 1, 2));
    state.back();
    assert_eq!(state.selected, None);
    assert!(state.chunks.is_empty());
}

#[test]
fn filter_applies_to_loaded_page_only() {
    let mut state = ChunkBrowser::default();
    state.load_chunks(page(&["cell wall", "nucleus"], 1, 30));
    state.filter = "ribosome".into();
    assert!(state.visible_chunks().is_empty());
    state.filter = "CELL".into();
    assert_eq!(state.visible_chunks().len(), 1);
}

#[test]
fn filter_also_matches_chapter_title() {
    let mut state = ChunkBrowser::default();
    state.chunks = vec![Chunk {
        text: "x".into(),
        metadata: ChunkMetadata { chapter_title: Some("Genetics".into()), ..ChunkMetadata::default() },
        ..Chunk::default()
    }];
    state.filter = "gen".into();
    assert_eq!(state.visible_chunks().len(), 1);
}

#[test]
fn index_button_only_for_unindexed_folders() {
    assert!(ChunkBrowser::shows_index_button(&folder("a", false)));
    assert!(!ChunkBrowser::shows_index_button(&folder("a", true)));
}

#[test]
fn indexing_is_single_flight() {
    let mut state = ChunkBrowser::default();
    assert!(state.begin_indexing("a"));
    assert!(state.is_indexing("a"));
    assert!(!state.begin_indexing("b"));
    state.finish_indexing();
    assert!(state.begin_indexing("b"));
}

#[test]
fn failure_keeps_message_and_stops_loading() {
    let mut state = ChunkBrowser { loading: true, ..ChunkBrowser::default() };
    state.fail("request failed (500)".into());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("request failed (500)"));
}

#[test]
fn created_label_trims_time() {
    let f = Folder { created_at: "2024-05-01T10:22:03".into(), ..folder("a", false) };
    assert_eq!(created_label(&f), "Created: 2024-05-01");
    assert_eq!(display_date("yesterday"), "yesterday");
}
