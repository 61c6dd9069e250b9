//! Multi-select tag chips for the question browser.

use leptos::prelude::*;

use crate::state::exams::QuestionBrowser;

#[component]
pub fn TagFilter(browser: RwSignal<QuestionBrowser>, on_toggle: Callback<String>) -> impl IntoView {
    view! {
        <Show when=move || browser.with(|b| !b.available_tags().is_empty())>
            <div class="tag-filter">
                <h4>"Filter by Tags"</h4>
                <div class="tag-row">
                    {move || {
                        browser
                            .with(QuestionBrowser::available_tags)
                            .into_iter()
                            .map(|tag| {
                                let selected_tag = tag.clone();
                                let toggle_tag = tag.clone();
                                view! {
                                    <button
                                        class="tag tag--button"
                                        class:tag--selected=move || browser.with(|b| b.is_tag_selected(&selected_tag))
                                        on:click=move |_| on_toggle.run(toggle_tag.clone())
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
