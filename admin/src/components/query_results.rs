//! Tabbed display of a retrieval response.

use leptos::prelude::*;

use crate::net::types::{QueryResponse, display_value};
use crate::state::query::{ResultTab, distance_label, hits_for, score_label, tab_count};

#[component]
pub fn QueryResults(response: QueryResponse, tab: RwSignal<ResultTab>) -> impl IntoView {
    let response = StoredValue::new(response);

    view! {
        <section class="query-results">
            <nav class="tabs">
                {ResultTab::ALL
                    .into_iter()
                    .map(|t| {
                        let count = response.with_value(|r| tab_count(t, r));
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                                {count.map(|n| format!(" ({n})"))}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || {
                let current = tab.get();
                if current == ResultTab::AiResponse {
                    let text = response.with_value(|r| r.llm_response.clone());
                    return view! {
                        <div class="card llm-response">
                            <h3>"LLM Response"</h3>
                            <p>{text.unwrap_or_else(|| "No response generated.".to_owned())}</p>
                        </div>
                    }
                        .into_any();
                }
                let hits = response.with_value(|r| hits_for(current, r));
                if hits.is_empty() {
                    return view! { <p class="muted">"No matching documents."</p> }.into_any();
                }
                view! {
                    <div class="source-documents">
                        <h3>"Source Documents"</h3>
                        {hits
                            .into_iter()
                            .map(|(kind, hit)| {
                                view! {
                                    <article class="card hit">
                                        <header class="hit__header">
                                            <span class="badge">{kind.label()}</span>
                                            <span>{format!("Distance: {}", distance_label(hit.distance))}</span>
                                            <span>
                                                {format!("Normalized Score: {}", score_label(hit.normalized_score))}
                                            </span>
                                        </header>
                                        <p class="hit__document">{hit.document.clone()}</p>
                                        <h4>"Metadata:"</h4>
                                        <dl class="hit__metadata">
                                            {hit
                                                .metadata
                                                .iter()
                                                .map(|(k, v)| view! {
                                                    <dt>{k.clone()}</dt>
                                                    <dd>{display_value(v)}</dd>
                                                })
                                                .collect_view()}
                                        </dl>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
