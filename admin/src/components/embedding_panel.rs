//! Stored embedding viewer with inline metadata editing.

use leptos::prelude::*;

use crate::state::exams::{QuestionBrowser, pretty_metadata};

#[component]
pub fn EmbeddingPanel(browser: RwSignal<QuestionBrowser>, on_save: Callback<()>) -> impl IntoView {
    let keys = move || {
        browser.with(|b| b.embedding.as_ref().map(|e| e.metadata.keys().cloned().collect::<Vec<_>>()).unwrap_or_default())
    };

    view! {
        <section class="embedding-panel">
            <header class="embedding-panel__header">
                <h4>"Embedding Details"</h4>
                <span class="muted">{move || browser.with(|b| b.embedding.as_ref().map(|e| e.id.clone()))}</span>
                <button class="btn btn--link" on:click=move |_| browser.update(QuestionBrowser::close_embedding)>
                    "Close"
                </button>
            </header>
            <h5>"Metadata"</h5>
            <Show
                when=move || browser.with(|b| b.editing)
                fallback=move || {
                    view! {
                        <pre class="embedding-panel__json">
                            {move || {
                                browser
                                    .with(|b| b.embedding.as_ref().map(|e| pretty_metadata(&e.metadata)))
                                    .unwrap_or_default()
                            }}
                        </pre>
                        <button class="btn" on:click=move |_| browser.update(QuestionBrowser::start_edit)>
                            "Edit Metadata"
                        </button>
                    }
                }
            >
                <div class="embedding-panel__form">
                    {move || {
                        keys()
                            .into_iter()
                            .map(|key| {
                                let read_key = key.clone();
                                let write_key = key.clone();
                                view! {
                                    <label class="field">
                                        <span class="field__label">{key}</span>
                                        <input
                                            class="field__input"
                                            type="text"
                                            prop:value=move || browser.with(|b| b.field_text(&read_key))
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                browser.update(|b| b.set_edit(&write_key, value));
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                    <div class="embedding-panel__buttons">
                        <button class="btn" on:click=move |_| browser.update(QuestionBrowser::cancel_edit)>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || !browser.with(QuestionBrowser::has_edits)
                            on:click=move |_| on_save.run(())
                        >
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </Show>
            <h5>"Document"</h5>
            <p class="embedding-panel__document">
                {move || browser.with(|b| b.embedding.as_ref().map(|e| e.document.clone()).unwrap_or_default())}
            </p>
        </section>
    }
}
