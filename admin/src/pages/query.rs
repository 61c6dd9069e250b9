//! Retrieval query page.

use leptos::prelude::*;

use crate::components::query_results::QueryResults;
use crate::config::BackendConfig;
use crate::net::api;
use crate::net::types::{ContentType, QueryResponse};
use crate::state::query::{QueryForm, ResultTab};

#[component]
pub fn QueryPage() -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let form = RwSignal::new(QueryForm::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let results = RwSignal::new(None::<QueryResponse>);
    let tab = RwSignal::new(ResultTab::All);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let Some(request) = form.with_untracked(QueryForm::to_request) else {
            error.set(Some("Enter a query first.".to_owned()));
            return;
        };
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::run_query(&cfg.get_value(), &request).await {
                Ok(resp) => {
                    tab.set(ResultTab::All);
                    results.set(Some(resp));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page">
            <h1>"Query Documents"</h1>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Query"</span>
                    <textarea
                        class="field__input"
                        rows="3"
                        required
                        prop:value=move || form.with(|f| f.query.clone())
                        on:input=move |ev| form.update(|f| f.query = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__row">
                    <label class="field">
                        <span class="field__label">"Subject (optional)"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Grade (optional)"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || form.with(|f| f.grade.clone())
                            on:input=move |ev| form.update(|f| f.grade = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Results"</span>
                        <input
                            class="field__input"
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.n_results.to_string())
                            on:change=move |ev| form.update(|f| f.set_n_results(&event_target_value(&ev)))
                        />
                    </label>
                </div>
                <fieldset class="form__row">
                    <legend>"Search in"</legend>
                    {ContentType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.includes(kind))
                                        on:change=move |_| form.update(|f| f.toggle_content_type(kind))
                                    />
                                    {kind.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Querying..." } else { "Submit Query" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || results.get().map(|resp| view! { <QueryResults response=resp tab=tab/> })}
        </div>
    }
}
