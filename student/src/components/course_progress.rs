//! Progress summary card for the selected course.

use curriculum::CourseProgress;
use leptos::prelude::*;

#[component]
pub fn CourseProgressCard(#[prop(into)] progress: Signal<CourseProgress>) -> impl IntoView {
    view! {
        <section class="progress-card">
            <h3 class="progress-card__title">"Your Progress"</h3>
            <div class="progress-bar">
                <div class="progress-bar__fill" style:width=move || format!("{}%", progress.get().percent())></div>
            </div>
            <p class="progress-card__count">
                {move || {
                    let p = progress.get();
                    format!("{} of {} topics completed", p.completed, p.total)
                }}
            </p>
            <p class="progress-card__readiness">
                {move || format!("ESLCE Readiness: {}", progress.get().readiness().label())}
            </p>
        </section>
    }
}
