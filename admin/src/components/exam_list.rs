//! Uploaded exams with embedding status and actions.

use leptos::prelude::*;

use crate::net::types::Exam;
use crate::state::chunks::display_date;
use crate::state::exams::{ExamList, exam_byline};

#[component]
pub fn ExamListView(
    #[prop(into)] list: Signal<ExamList>,
    on_embed: Callback<String>,
    on_view: Callback<Exam>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !list.with(|l| l.loading)
            fallback=|| view! { <p class="muted">"Loading exams..."</p> }
        >
            <Show
                when=move || list.with(|l| !l.exams.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <h3>"No exams found"</h3>
                            <p>"Get started by uploading an exam JSON file."</p>
                        </div>
                    }
                }
            >
                <ul class="exam-list">
                    {move || {
                        list.get()
                            .exams
                            .into_iter()
                            .map(|exam| {
                                let embed_id = exam.id.clone();
                                let busy_id = exam.id.clone();
                                let view_exam = exam.clone();
                                let busy = move || list.with(|l| l.is_processing(&busy_id));
                                view! {
                                    <li class="card exam-row">
                                        <div class="exam-row__info">
                                            <h3>{exam.exam_name.clone()}</h3>
                                            <p class="muted">{exam_byline(&exam)}</p>
                                            <p class="muted">
                                                {format!("Questions: {}", exam.question_count)} " · "
                                                {format!("Added: {}", display_date(&exam.created_at))}
                                            </p>
                                        </div>
                                        <div class="exam-row__actions">
                                            <span class=if exam.has_embeddings {
                                                "badge badge--ok"
                                            } else {
                                                "badge badge--muted"
                                            }>{if exam.has_embeddings { "Indexed" } else { "Not Indexed" }}</span>
                                            {ExamList::shows_embed_button(&exam)
                                                .then(|| {
                                                    let busy_label = busy.clone();
                                                    view! {
                                                        <button
                                                            class="btn btn--primary"
                                                            disabled=busy
                                                            on:click=move |_| on_embed.run(embed_id.clone())
                                                        >
                                                            {move || {
                                                                if busy_label() { "Processing..." } else { "Create Embeddings" }
                                                            }}
                                                        </button>
                                                    }
                                                })}
                                            <button class="btn" on:click=move |_| on_view.run(view_exam.clone())>
                                                "View Questions"
                                            </button>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </Show>
    }
}
