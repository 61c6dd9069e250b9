//! PDF upload form feeding the chunker.

use leptos::prelude::*;

use crate::config::BackendConfig;
use crate::state::documents::DocumentDraft;

#[component]
pub fn DocumentUploadForm(on_success: Callback<()>) -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let draft = RwSignal::new(DocumentDraft::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = crate::util::files::selected_file(file_input).map(|f| f.name());
            draft.update(|d| d.choose_file(name));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !draft.with_untracked(DocumentDraft::can_submit) {
            return;
        }
        draft.update(|d| {
            d.busy = true;
            d.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = upload(cfg.get_value(), file_input, draft.get_untracked()).await;
            let ok = result.is_ok();
            draft.update(|d| d.finish(result));
            if ok {
                crate::util::files::reset(file_input);
                on_success.run(());
            }
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || draft.with(|d| d.error.is_some())>
                <div class="alert alert--error">{move || draft.with(|d| d.error.clone().unwrap_or_default())}</div>
            </Show>
            <label class="field">
                <span class="field__label">"PDF Document"</span>
                <input class="field__input" type="file" accept=".pdf" node_ref=file_input on:change=on_file_change/>
            </label>
            <label class="field">
                <span class="field__label">"Subject"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.subject.clone())
                    on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Grade"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.grade.clone())
                    on:input=move |ev| draft.update(|d| d.grade = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || !draft.with(DocumentDraft::can_submit)>
                {move || draft.with(DocumentDraft::button_label)}
            </button>
        </form>
    }
}

#[cfg(feature = "hydrate")]
async fn upload(
    cfg: BackendConfig,
    input: NodeRef<leptos::html::Input>,
    draft: DocumentDraft,
) -> Result<(), String> {
    let file = crate::util::files::selected_file(input).ok_or_else(|| "Please choose a PDF file.".to_owned())?;
    let form = crate::util::files::form_data(&file, crate::net::api::FILE_FIELD, &draft.fields())?;
    log::info!("uploading document {}", file.name());
    crate::net::api::upload_document(&cfg, form).await.map(|_| ()).map_err(|e| e.to_string())
}
