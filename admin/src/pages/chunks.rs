//! Folder grid and paged chunk browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Folders load on mount. Opening one fetches its first page; the fetch
//! re-runs whenever the selected folder or page changes. Indexing a folder
//! refreshes the whole grid so its badge reflects the backend.

use leptos::prelude::*;

use crate::components::chunk_card::ChunkCard;
use crate::components::folder_grid::FolderGrid;
use crate::components::pagination_bar::PaginationBar;
use crate::config::BackendConfig;
use crate::net::api;
use crate::state::chunks::{CHUNK_PAGE_SIZE, ChunkBrowser};
use crate::util::dialog;

#[component]
pub fn ChunksPage() -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let state = RwSignal::new(ChunkBrowser::default());

    let load_folders = move || {
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::fetch_folders(&cfg.get_value()).await {
                Ok(folders) => state.update(|s| {
                    s.folders = folders;
                    s.loading = false;
                }),
                Err(e) => state.update(|s| s.fail(format!("Error fetching folders: {e}"))),
            }
        });
    };

    Effect::new(load_folders);

    let target = Memo::new(move |_| state.with(|s| s.selected.clone().map(|f| (f, s.pagination.page))));
    Effect::new(move || {
        let Some((folder, page)) = target.get() else {
            return;
        };
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_chunks(&cfg.get_value(), &folder, page, CHUNK_PAGE_SIZE).await {
                Ok(resp) => state.update(|s| s.load_chunks(resp)),
                Err(e) => state.update(|s| s.fail(format!("Error fetching chunks: {e}"))),
            }
        });
    });

    let on_open = Callback::new(move |name: String| state.update(|s| s.open_folder(&name)));
    let on_index = Callback::new(move |name: String| {
        if !state.try_update(|s| s.begin_indexing(&name)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::index_folder(&cfg.get_value(), &name).await;
            state.update(ChunkBrowser::finish_indexing);
            match result {
                Ok(_) => load_folders(),
                Err(e) => dialog::alert(&format!("Failed to create embeddings: {e}")),
            }
        });
    });
    let on_page = Callback::new(move |page: u32| state.update(|s| s.set_page(page)));

    view! {
        <div class="page">
            <h1>"Chunk Management"</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="alert alert--error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
            </Show>
            <Show
                when=move || state.with(|s| s.selected.is_some())
                fallback=move || {
                    view! {
                        <Show when=move || state.with(|s| s.loading)>
                            <p class="muted">"Loading..."</p>
                        </Show>
                        <FolderGrid
                            folders=Signal::derive(move || state.with(|s| s.folders.clone()))
                            indexing=Signal::derive(move || state.with(|s| s.indexing.clone()))
                            on_open=on_open
                            on_index=on_index
                        />
                    }
                }
            >
                <div class="toolbar">
                    <button class="btn" on:click=move |_| state.update(ChunkBrowser::back)>
                        "Back to Documents"
                    </button>
                    <h2 class="toolbar__title">{move || state.with(|s| s.selected.clone().unwrap_or_default())}</h2>
                    <input
                        class="field__input toolbar__search"
                        type="search"
                        placeholder="Filter chunks..."
                        prop:value=move || state.with(|s| s.filter.clone())
                        on:input=move |ev| state.update(|s| s.filter = event_target_value(&ev))
                    />
                </div>
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="muted">"Loading..."</p> }
                >
                    {move || {
                        let visible = state.with(ChunkBrowser::visible_chunks);
                        if visible.is_empty() {
                            view! { <p class="muted">"No chunks found matching your filter."</p> }.into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {visible
                                        .into_iter()
                                        .map(|chunk| view! { <ChunkCard chunk=chunk/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Show>
                <PaginationBar
                    pagination=Signal::derive(move || state.with(|s| s.pagination))
                    on_page=on_page
                />
            </Show>
        </div>
    }
}
