//! Folder grid and chunk browser state.

#[cfg(test)]
#[path = "chunks_test.rs"]
mod chunks_test;

use crate::net::types::{Chunk, ChunksResponse, Folder, Pagination};
use crate::util::filter;

/// Chunks fetched per page.
pub const CHUNK_PAGE_SIZE: u32 = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct ChunkBrowser {
    pub folders: Vec<Folder>,
    pub selected: Option<String>,
    pub chunks: Vec<Chunk>,
    pub pagination: Pagination,
    pub filter: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Folder whose indexing request is in flight.
    pub indexing: Option<String>,
}

impl Default for ChunkBrowser {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            selected: None,
            chunks: Vec::new(),
            pagination: Pagination::first(CHUNK_PAGE_SIZE),
            filter: String::new(),
            loading: false,
            error: None,
            indexing: None,
        }
    }
}

impl ChunkBrowser {
    /// Select a folder and rewind to its first page.
    pub fn open_folder(&mut self, name: &str) {
        self.selected = Some(name.to_owned());
        self.chunks.clear();
        self.filter.clear();
        self.error = None;
        self.pagination = Pagination::first(CHUNK_PAGE_SIZE);
    }

    /// Return to the folder grid.
    pub fn back(&mut self) {
        self.selected = None;
        self.chunks.clear();
        self.filter.clear();
        self.error = None;
        self.pagination = Pagination::first(CHUNK_PAGE_SIZE);
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page.max(1);
    }

    pub fn load_chunks(&mut self, response: ChunksResponse) {
        self.chunks = response.chunks;
        self.pagination = response.pagination;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Chunks on this page that match the filter box.
    #[must_use]
    pub fn visible_chunks(&self) -> Vec<Chunk> {
        filter::filter_chunks(&self.chunks, &self.filter).into_iter().cloned().collect()
    }

    /// Whether the folder card offers "Create Embeddings".
    #[must_use]
    pub fn shows_index_button(folder: &Folder) -> bool {
        !folder.has_embeddings
    }

    #[must_use]
    pub fn is_indexing(&self, folder: &str) -> bool {
        self.indexing.as_deref() == Some(folder)
    }

    /// Claim the indexing slot; `false` if a request is already running.
    pub fn begin_indexing(&mut self, folder: &str) -> bool {
        if self.indexing.is_some() {
            return false;
        }
        self.indexing = Some(folder.to_owned());
        true
    }

    pub fn finish_indexing(&mut self) {
        self.indexing = None;
    }
}

/// Caption for a folder's creation time.
#[must_use]
pub fn created_label(folder: &Folder) -> String {
    format!("Created: {}", display_date(&folder.created_at))
}

/// Date part of an ISO-8601 timestamp; other text passes through.
#[must_use]
pub fn display_date(raw: &str) -> &str {
    match raw.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => raw,
    }
}
