//! Exam management: list, upload, and per-exam question browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list loads on mount and after any exam-wide mutation. Opening an exam
//! swaps the page body for its question browser, which re-fetches whenever
//! the page, the tag filter, or the refresh counter changes.

use leptos::prelude::*;

use crate::components::exam_list::ExamListView;
use crate::components::exam_uploader::ExamUploader;
use crate::components::pagination_bar::PaginationBar;
use crate::components::question_card::QuestionCard;
use crate::components::tag_filter::TagFilter;
use crate::config::BackendConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Exam;
use crate::state::exams::{DELETE_CONFIRMATION, ExamList, ExamTab, QUESTION_PAGE_SIZE, QuestionBrowser};
use crate::util::dialog;

#[component]
pub fn ExamsPage() -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let tab = RwSignal::new(ExamTab::List);
    let list = RwSignal::new(ExamList::default());
    let selected = RwSignal::new(None::<Exam>);

    let load_exams = move || {
        list.update(|l| {
            l.loading = true;
            l.error = None;
        });
        leptos::task::spawn_local(async move {
            match api::fetch_exams(&cfg.get_value()).await {
                Ok(exams) => list.update(|l| {
                    l.exams = exams;
                    l.loading = false;
                }),
                Err(e) => list.update(|l| {
                    l.loading = false;
                    l.error = Some(format!("Error fetching exams: {e}"));
                }),
            }
        });
    };
    Effect::new(load_exams);

    let on_embed = Callback::new(move |exam_id: String| {
        if !list.try_update(|l| l.begin_embedding(&exam_id)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::create_exam_embeddings(&cfg.get_value(), &exam_id).await;
            list.update(ExamList::finish_embedding);
            match result {
                Ok(resp) => {
                    dialog::alert(resp.message.as_deref().unwrap_or("Embeddings created successfully"));
                    load_exams();
                }
                Err(e) => dialog::alert(&format!("Error creating embeddings: {e}")),
            }
        });
    });
    let on_view = Callback::new(move |exam: Exam| selected.set(Some(exam)));
    let on_back = Callback::new(move |()| selected.set(None));
    let on_uploaded = Callback::new(move |()| {
        dialog::alert("Exam uploaded successfully!");
        tab.set(ExamTab::List);
        load_exams();
    });

    view! {
        <div class="page">
            <h1>"Exam Management"</h1>
            {move || match selected.get() {
                Some(exam) => view! { <QuestionBrowserView exam=exam on_back=on_back/> }.into_any(),
                None => {
                    view! {
                        <nav class="tabs">
                            {ExamTab::ALL
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <button
                                            class="tabs__tab"
                                            class:tabs__tab--active=move || tab.get() == t
                                            on:click=move |_| tab.set(t)
                                        >
                                            {t.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <Show when=move || list.with(|l| l.error.is_some())>
                            <div class="alert alert--error">
                                {move || list.with(|l| l.error.clone().unwrap_or_default())}
                            </div>
                        </Show>
                        <Show
                            when=move || tab.get() == ExamTab::List
                            fallback=move || view! { <ExamUploader on_success=on_uploaded/> }
                        >
                            <ExamListView list=list on_embed=on_embed on_view=on_view/>
                        </Show>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn QuestionBrowserView(exam: Exam, on_back: Callback<()>) -> impl IntoView {
    let cfg = StoredValue::new(expect_context::<BackendConfig>());
    let exam_id = StoredValue::new(exam.id.clone());
    let browser = RwSignal::new(QuestionBrowser::new(&exam.id));
    let refresh = RwSignal::new(0_u32);

    let target = Memo::new(move |_| {
        let (page, tags) = browser.with(|b| (b.pagination.page, b.selected_tags().to_vec()));
        (page, tags, refresh.get())
    });
    Effect::new(move || {
        let (page, tags, _) = target.get();
        browser.update(|b| b.loading = true);
        leptos::task::spawn_local(async move {
            let result = api::fetch_questions(&cfg.get_value(), &exam_id.get_value(), page, QUESTION_PAGE_SIZE, &tags).await;
            match result {
                Ok(resp) => browser.update(|b| b.load(resp)),
                Err(e) => browser.update(|b| b.fail(format!("Error fetching questions: {e}"))),
            }
        });
    });

    let on_toggle = Callback::new(move |tag: String| browser.update(|b| b.toggle_tag(&tag)));
    let on_page = Callback::new(move |page: u32| browser.update(|b| b.set_page(page)));

    let on_embed = Callback::new(move |qid: String| {
        if !browser.try_update(|b| b.begin_embedding(&qid)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::create_question_embedding(&cfg.get_value(), &qid).await;
            browser.update(QuestionBrowser::finish_embedding);
            match result {
                Ok(_) => browser.update(|b| b.mark_embedded(&qid, true)),
                Err(e) => dialog::alert(&format!("Error creating embedding: {e}")),
            }
        });
    });

    let load_embedding = move |qid: String| {
        leptos::task::spawn_local(async move {
            match api::fetch_question_embedding(&cfg.get_value(), &exam_id.get_value(), &qid).await {
                Ok(embedding) => browser.update(|b| b.show_embedding(embedding)),
                Err(ApiError::NotFound) => dialog::alert("No embedding found for this question"),
                Err(e) => dialog::alert(&format!("Error fetching embedding: {e}")),
            }
        });
    };
    let on_inspect = Callback::new(load_embedding);

    let on_delete = Callback::new(move |qid: String| {
        if !dialog::confirm(DELETE_CONFIRMATION) {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_question_embedding(&cfg.get_value(), &exam_id.get_value(), &qid).await {
                Ok(_) => {
                    browser.update(|b| b.mark_embedded(&qid, false));
                    dialog::alert("Embedding deleted successfully");
                }
                Err(_) => dialog::alert("Failed to delete embedding"),
            }
        });
    });

    let on_save_metadata = Callback::new(move |qid: String| {
        let edits = browser.with_untracked(QuestionBrowser::metadata_update);
        if edits.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::update_embedding_metadata(&cfg.get_value(), &exam_id.get_value(), &qid, &edits).await {
                Ok(_) => {
                    dialog::alert("Metadata updated successfully");
                    load_embedding(qid);
                }
                Err(e) => dialog::alert(&format!("Error updating metadata: {e}")),
            }
        });
    });

    view! {
        <div class="question-browser">
            <div class="toolbar">
                <button class="btn" on:click=move |_| on_back.run(())>
                    "Back to Exam List"
                </button>
                <h2 class="toolbar__title">{exam.exam_name.clone()}</h2>
                <button class="btn" on:click=move |_| refresh.update(|n| *n += 1)>
                    "Refresh"
                </button>
            </div>
            <input
                class="field__input"
                type="search"
                placeholder="Search by question text or tags..."
                prop:value=move || browser.with(|b| b.search.clone())
                on:input=move |ev| browser.update(|b| b.search = event_target_value(&ev))
            />
            <TagFilter browser=browser on_toggle=on_toggle/>
            <Show when=move || browser.with(|b| b.error.is_some())>
                <div class="alert alert--error">{move || browser.with(|b| b.error.clone().unwrap_or_default())}</div>
            </Show>
            <Show
                when=move || !browser.with(|b| b.loading)
                fallback=|| view! { <p class="muted">"Loading questions..."</p> }
            >
                {move || {
                    let visible = browser.with(QuestionBrowser::visible_questions);
                    if visible.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <h3>"No questions found"</h3>
                                <p>"Try adjusting your search or filters."</p>
                            </div>
                        }
                            .into_any();
                    }
                    visible
                        .into_iter()
                        .map(|question| {
                            view! {
                                <QuestionCard
                                    question=question
                                    browser=browser
                                    on_embed=on_embed
                                    on_inspect=on_inspect
                                    on_delete=on_delete
                                    on_save_metadata=on_save_metadata
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </Show>
            <PaginationBar pagination=Signal::derive(move || browser.with(|b| b.pagination)) on_page=on_page/>
        </div>
    }
}
