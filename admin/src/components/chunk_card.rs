//! One chunk with its location metadata and index badge.

use leptos::prelude::*;

use crate::net::types::Chunk;

#[component]
pub fn ChunkCard(chunk: Chunk) -> impl IntoView {
    let meta = chunk.metadata.clone();
    let indexed = chunk.is_indexed();
    view! {
        <article class="card chunk-card">
            <header class="chunk-card__header">
                <span class="chunk-card__page">
                    {format!("Page {}", meta.page_number.clone().unwrap_or_else(|| "?".to_owned()))}
                </span>
                <span class=if indexed { "badge badge--ok" } else { "badge badge--muted" }>
                    {if indexed { "Indexed" } else { "Not Indexed" }}
                </span>
            </header>
            <div class="chunk-card__meta">
                {meta.chapter_number.clone().map(|n| view! { <div>{format!("Chapter: {n}")}</div> })}
                {meta.chapter_title.clone().map(|t| view! { <div>{format!("Title: {t}")}</div> })}
                {meta.section_title.clone().map(|t| view! { <div>{format!("Section: {t}")}</div> })}
            </div>
            <p class="chunk-card__text">{chunk.text.clone()}</p>
            {chunk.source_file.clone().map(|f| view! { <p class="chunk-card__source">{f}</p> })}
        </article>
    }
}
