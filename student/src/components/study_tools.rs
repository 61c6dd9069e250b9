//! Key points, worked examples, and concept practice for a topic.

use curriculum::Topic;
use curriculum::study::{StudyTool, key_points, practice_questions, worked_examples};
use leptos::prelude::*;

use crate::components::quiz_runner::QuizRunner;

#[component]
pub fn StudyTools(topic: Topic) -> impl IntoView {
    let tab = RwSignal::new(StudyTool::default());
    let points = key_points(&topic);
    let examples = worked_examples(&topic);
    let practice = practice_questions(&topic);

    let body = move || match tab.get() {
        StudyTool::KeyPoints => view! {
            <ul class="study-tools__points">
                {points.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        StudyTool::WorkedExamples => examples
            .iter()
            .map(|ex| {
                view! {
                    <div class="study-tools__example">
                        <p class="study-tools__scenario">{ex.scenario.clone()}</p>
                        <p class="study-tools__explanation">{ex.explanation.clone()}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        StudyTool::Practice if practice.is_empty() => {
            view! { <p class="study-tools__empty">"Not enough key concepts to build practice questions."</p> }
                .into_any()
        }
        StudyTool::Practice => view! { <QuizRunner questions=practice.clone()/> }.into_any(),
    };

    view! {
        <section class="study-tools">
            <h3 class="study-tools__title">"Study Tools"</h3>
            <div class="tabs">
                {StudyTool::ALL
                    .into_iter()
                    .map(|tool| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == tool
                                on:click=move |_| tab.set(tool)
                            >
                                {tool.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="study-tools__body">{body}</div>
        </section>
    }
}
