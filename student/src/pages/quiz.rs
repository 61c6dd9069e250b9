//! Quiz page for every kind and scope.
//!
//! Serves `/quiz/:kind/:course/:unit` and `/quiz/:kind/:course/:unit/:topic`.
//! The finished outcome is saved to the progress book.

use curriculum::ProgressBook;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::quiz_runner::QuizRunner;
use crate::state::quiz::QuizRoute;
use crate::util::storage;

#[component]
pub fn QuizPage() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressBook>>();
    let params = use_params_map();

    let route = Memo::new(move |_| {
        params.with(|p| {
            QuizRoute::parse(
                &p.get("kind").unwrap_or_default(),
                &p.get("course").unwrap_or_default(),
                &p.get("unit").unwrap_or_default(),
                p.get("topic").as_deref(),
            )
        })
    });

    let content = move || {
        let Some(route) = route.get() else {
            return view! { <p class="empty">"Quiz not found"</p> }.into_any();
        };
        let on_finish = Callback::new({
            let route = route.clone();
            move |outcome| {
                let record = route.record(outcome);
                leptos::logging::log!("quiz finished: {} {}/{}", route.heading(), record.score, record.total);
                progress.update(|book| book.record(record));
                progress.with_untracked(storage::save_progress);
            }
        });
        let links = vec![
            (route.back_href(), "Review Material".to_owned()),
            (route.counterpart_href(), format!("Try {}", route.kind.counterpart().title())),
        ];
        view! {
            <a href=route.back_href() class="back-link">"← Back"</a>
            <header class="page__header">
                <p class="page__eyebrow">{route.course.clone()}</p>
                <h1>{route.heading()}</h1>
            </header>
            <QuizRunner questions=route.questions() on_finish=on_finish links=links/>
        }
        .into_any()
    };

    view! { <div class="page quiz-page">{content}</div> }
}
