//! One exam question with its options, tags, and embedding actions.

use leptos::prelude::*;

use crate::components::embedding_panel::EmbeddingPanel;
use crate::net::types::Question;
use crate::state::exams::QuestionBrowser;

#[component]
pub fn QuestionCard(
    question: Question,
    browser: RwSignal<QuestionBrowser>,
    on_embed: Callback<String>,
    on_inspect: Callback<String>,
    on_delete: Callback<String>,
    on_save_metadata: Callback<String>,
) -> impl IntoView {
    let qid = question.question_id.clone();
    let answer = question.answer.clone();
    let can_embed = {
        let q = question.clone();
        move || browser.with(|b| b.can_embed(&q))
    };
    let busy = {
        let qid = qid.clone();
        move || browser.with(|b| b.is_processing(&qid))
    };
    let inspecting = {
        let qid = qid.clone();
        move || browser.with(|b| b.inspecting(&qid))
    };
    let embed_id = qid.clone();
    let inspect_id = qid.clone();
    let delete_id = qid.clone();
    let save_id = qid.clone();

    view! {
        <article class="card question-card">
            <header class="question-card__header">
                <span class="muted">{format!("ID: {qid}")}</span>
                <span class=if question.has_embedding {
                    "badge badge--ok"
                } else {
                    "badge badge--muted"
                }>{if question.has_embedding { "Indexed" } else { "Not Indexed" }}</span>
            </header>
            <p class="question-card__text">{question.question_text.clone()}</p>
            <ul class="question-card__options">
                {question
                    .options
                    .iter()
                    .map(|(key, text)| {
                        let correct = *key == answer;
                        view! {
                            <li class="question-card__option" class:question-card__option--correct=correct>
                                <strong>{format!("{key}.")}</strong>
                                " "
                                {text.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="tag-row">
                {question
                    .tags()
                    .map(|tag| view! { <span class="tag">{tag.to_owned()}</span> })
                    .collect_view()}
            </div>
            <div class="question-card__actions">
                {(!question.has_embedding)
                    .then(|| {
                        let busy_label = busy.clone();
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || !can_embed()
                                on:click=move |_| on_embed.run(embed_id.clone())
                            >
                                {move || if busy_label() { "Processing..." } else { "Create Embedding" }}
                            </button>
                        }
                    })}
                {question
                    .has_embedding
                    .then(|| {
                        view! {
                            <button class="btn" on:click=move |_| on_inspect.run(inspect_id.clone())>
                                "View Details"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                                "Delete Embedding"
                            </button>
                        }
                    })}
            </div>
            <Show when=inspecting>
                <EmbeddingPanel
                    browser=browser
                    on_save=Callback::new({
                        let save_id = save_id.clone();
                        move |()| on_save_metadata.run(save_id.clone())
                    })
                />
            </Show>
        </article>
    }
}
