//! Grid of extraction folders with per-folder indexing.

use leptos::prelude::*;

use crate::net::types::Folder;
use crate::state::chunks::{ChunkBrowser, created_label};

#[component]
pub fn FolderGrid(
    #[prop(into)] folders: Signal<Vec<Folder>>,
    #[prop(into)] indexing: Signal<Option<String>>,
    on_open: Callback<String>,
    on_index: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="card-grid">
            {move || {
                folders
                    .get()
                    .into_iter()
                    .map(|folder| {
                        let open_name = folder.name.clone();
                        let index_name = folder.name.clone();
                        let busy_name = folder.name.clone();
                        let busy_label = move || indexing.get().as_deref() == Some(busy_name.as_str());
                        let any_busy = move || indexing.get().is_some();
                        view! {
                            <div class="card folder-card">
                                <button class="folder-card__open" on:click=move |_| on_open.run(open_name.clone())>
                                    <h3 class="folder-card__name">{folder.name.clone()}</h3>
                                    <p class="folder-card__meta">{created_label(&folder)}</p>
                                </button>
                                {if ChunkBrowser::shows_index_button(&folder) {
                                    view! {
                                        <button
                                            class="btn btn--primary"
                                            disabled=any_busy
                                            on:click=move |_| on_index.run(index_name.clone())
                                        >
                                            {move || if busy_label() { "Processing..." } else { "Create Embeddings" }}
                                        </button>
                                    }
                                        .into_any()
                                } else {
                                    view! { <span class="badge badge--ok">"Indexed"</span> }.into_any()
                                }}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
