//! Catalog search over topic names and overviews.

use curriculum::paths;
use leptos::prelude::*;

use crate::state::catalog::CatalogState;

#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let query = RwSignal::new(String::new());

    let hits = Memo::new(move |_| {
        let needle = query.get();
        catalog.with(|c| c.catalog.as_ref().map(|cat| cat.search(&needle)).unwrap_or_default())
    });

    view! {
        <div class="page search-page">
            <header class="page__header">
                <h1>"Search"</h1>
            </header>
            <input
                class="search__input"
                type="search"
                placeholder="Search topics..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show
                when=move || !hits.with(Vec::is_empty)
                fallback=move || {
                    query
                        .with(|q| !q.trim().is_empty())
                        .then(|| view! { <p class="empty">"No topics match your search."</p> })
                }
            >
                <ul class="search__results">
                    {move || {
                        hits.get()
                            .into_iter()
                            .map(|hit| {
                                let href = paths::topic(&hit.course, &hit.unit, &hit.topic);
                                view! {
                                    <li class="search__hit">
                                        <a href=href>
                                            <strong>{hit.topic}</strong>
                                            <span class="search__where">{format!("{} · {}", hit.course, hit.unit)}</span>
                                        </a>
                                        <p>{hit.excerpt}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
