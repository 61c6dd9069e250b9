//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render lists, cards, and forms from props and report user
//! intent through callbacks; pages own the state and the network calls.

pub mod chunk_card;
pub mod document_upload_form;
pub mod embedding_panel;
pub mod exam_list;
pub mod exam_uploader;
pub mod folder_grid;
pub mod navigation;
pub mod pagination_bar;
pub mod query_results;
pub mod question_card;
pub mod tag_filter;
