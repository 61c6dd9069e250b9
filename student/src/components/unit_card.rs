//! One unit of the selected course, with its quiz entry points.

use curriculum::{Unit, UnitProgress, paths};
use leptos::prelude::*;
use quiz::QuizKind;

#[component]
pub fn UnitCard(course: String, unit: Unit, progress: UnitProgress) -> impl IntoView {
    let href = paths::unit(&course, &unit.unit);
    let knowledge = paths::quiz(QuizKind::KnowledgeCheck, &course, &unit.unit, None);
    let eslce = paths::quiz(QuizKind::EslceStyle, &course, &unit.unit, None);
    let done = progress.total > 0 && progress.completed == progress.total;

    view! {
        <article class="unit-card" class:unit-card--done=done>
            <a href=href class="unit-card__link">
                <h3 class="unit-card__title">{unit.unit.clone()}</h3>
                <p class="unit-card__meta">
                    {format!("{} topics", unit.topics.len())}
                    <span class="unit-card__progress">{format!(" · {}%", progress.percent())}</span>
                </p>
            </a>
            <div class="unit-card__quizzes">
                <a href=knowledge class="unit-card__quiz" title="Knowledge Check">"✓"</a>
                <a href=eslce class="unit-card__quiz" title="ESLCE Practice">"📝"</a>
            </div>
        </article>
    }
}
