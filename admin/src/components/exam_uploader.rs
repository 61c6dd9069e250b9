//! Exam JSON picker with preview and pre-upload validation.

use leptos::prelude::*;

use crate::config::BackendConfig;
use crate::util::exam_upload::ExamDraft;

#[component]
pub fn ExamUploader(on_success: Callback<()>) -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let draft = RwSignal::new(ExamDraft::default());
    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |_| {
        upload_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::files::selected_file(file_input) else {
                draft.update(ExamDraft::clear);
                return;
            };
            let wants_text = draft.try_update(|d| d.choose_file(&file.name(), &file.type_())).unwrap_or(false);
            if wants_text {
                leptos::task::spawn_local(async move {
                    match crate::util::files::read_text(&file).await {
                        Ok(text) => draft.update(|d| d.load_text(&text)),
                        Err(e) => upload_error.set(Some(e)),
                    }
                });
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        upload_error.set(None);
        let Some(Ok(request)) = draft.try_update(ExamDraft::submit) else {
            return;
        };
        uploading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                let file = crate::util::files::selected_file(file_input)
                    .ok_or_else(|| "Please select a valid JSON file.".to_owned())?;
                let form = crate::util::files::form_data(&file, request.field, &[])?;
                log::info!("uploading exam {} to {}", request.file_name, request.path);
                crate::net::api::upload_exam(&cfg.get_value(), &request, form).await.map_err(|e| e.to_string())
            }
            .await;
            uploading.set(false);
            match result {
                Ok(_) => {
                    draft.update(ExamDraft::clear);
                    crate::util::files::reset(file_input);
                    on_success.run(());
                }
                Err(message) => upload_error.set(Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, cfg, on_success);
            uploading.set(false);
        }
    };

    let error_text = move || {
        upload_error.get().or_else(|| draft.with(|d| d.error().map(|e| e.to_string())))
    };

    view! {
        <form class="form exam-uploader" on:submit=on_submit>
            <Show when=move || error_text().is_some()>
                <div class="alert alert--error">{move || error_text().unwrap_or_default()}</div>
            </Show>
            <label class="field">
                <span class="field__label">"Exam JSON File"</span>
                <input
                    class="field__input"
                    type="file"
                    accept=".json,application/json"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </label>
            {move || {
                draft
                    .with(ExamDraft::preview)
                    .map(|p| {
                        view! {
                            <dl class="exam-preview">
                                <dt>"Exam Name:"</dt>
                                <dd>{p.exam_name}</dd>
                                <dt>"Subject:"</dt>
                                <dd>{p.subject}</dd>
                                <dt>"Questions:"</dt>
                                <dd>{p.question_count}</dd>
                            </dl>
                        }
                    })
            }}
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || uploading.get() || !draft.with(ExamDraft::can_submit)
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload Exam" }}
            </button>
        </form>
    }
}
