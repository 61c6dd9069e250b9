//! Previous / numbered / next page controls.

use leptos::prelude::*;

use crate::net::types::Pagination;
use crate::util::pagination::{PageItem, has_next, has_previous, page_window, showing_label};

/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationBar(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || { pagination.get().total_pages > 1 }>
            <div class="pagination">
                <p class="pagination__summary">{move || showing_label(&pagination.get())}</p>
                <div class="pagination__controls">
                    <button
                        class="btn pagination__step"
                        disabled=move || !has_previous(pagination.get().page)
                        on:click=move |_| on_page.run(pagination.get_untracked().page.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    {move || {
                        let p = pagination.get();
                        page_window(p.page, p.total_pages)
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Ellipsis => view! { <span class="pagination__gap">"..."</span> }.into_any(),
                                PageItem::Page(n) => {
                                    view! {
                                        <button
                                            class="btn pagination__page"
                                            class:pagination__page--current=n == p.page
                                            on:click=move |_| on_page.run(n)
                                        >
                                            {n}
                                        </button>
                                    }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="btn pagination__step"
                        disabled=move || {
                            let p = pagination.get();
                            !has_next(p.page, p.total_pages)
                        }
                        on:click=move |_| on_page.run(pagination.get_untracked().page + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}
