//! Topics of one unit with overview excerpts.

use curriculum::catalog::EXCERPT_CHARS;
use curriculum::{ProgressBook, paths};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use quiz::QuizKind;

use crate::state::catalog::CatalogState;

#[component]
pub fn UnitPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let progress = expect_context::<RwSignal<ProgressBook>>();
    let params = use_params_map();

    let route = Memo::new(move |_| {
        params.with(|p| {
            (
                paths::decode(&p.get("course").unwrap_or_default()),
                paths::decode(&p.get("unit").unwrap_or_default()),
            )
        })
    });

    let content = move || {
        let (course, unit_name) = route.get();
        if catalog.with(CatalogState::pending) {
            return view! { <p class="loading">"Loading unit content..."</p> }.into_any();
        }
        let Some(unit) = catalog.with(|c| c.unit(&course, &unit_name)) else {
            return view! { <p class="empty">"Unit not found"</p> }.into_any();
        };
        let topics = unit
            .topics
            .iter()
            .map(|topic| {
                let done = progress.with(|book| book.topic_completed(&course, &unit.unit, &topic.topic));
                let href = paths::topic(&course, &unit.unit, &topic.topic);
                view! {
                    <article class="topic-card" class:topic-card--done=done>
                        <h3 class="topic-card__title">
                            {topic.topic.clone()}
                            {done.then(|| view! { <span class="badge badge--done">"✓"</span> })}
                        </h3>
                        <p class="topic-card__excerpt">{topic.overview_excerpt(EXCERPT_CHARS)}</p>
                        <a href=href class="topic-card__link">"View →"</a>
                    </article>
                }
            })
            .collect_view();
        let knowledge = paths::quiz(QuizKind::KnowledgeCheck, &course, &unit.unit, None);
        let eslce = paths::quiz(QuizKind::EslceStyle, &course, &unit.unit, None);
        view! {
            <header class="page__header">
                <p class="page__eyebrow">{course.clone()}</p>
                <h1>{unit.unit.clone()}</h1>
            </header>
            <div class="topic-list">{topics}</div>
            <section class="unit-quizzes">
                <h3>"Unit Quizzes"</h3>
                <a href=knowledge class="btn btn--primary">{QuizKind::KnowledgeCheck.title()}</a>
                <a href=eslce class="btn btn--secondary">{QuizKind::EslceStyle.title()}</a>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="page unit-page">
            <a href=move || paths::home_with_course(&route.get().0) class="back-link">"← Back"</a>
            {content}
        </div>
    }
}
