//! Progress across every course, with reset.

use curriculum::{ProgressBook, paths};
use leptos::prelude::*;

use crate::components::course_progress::CourseProgressCard;
use crate::state::catalog::CatalogState;
use crate::util::storage;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let progress = expect_context::<RwSignal<ProgressBook>>();

    let reset = move |course: Option<String>| {
        progress.update(|book| match &course {
            Some(name) => book.reset_course(name),
            None => book.reset(),
        });
        progress.with_untracked(storage::save_progress);
    };

    let courses = move || {
        let courses = catalog.with(|c| c.catalog.as_ref().map(|cat| cat.courses.clone()).unwrap_or_default());
        courses
            .into_iter()
            .map(|course| {
                let name = course.course_name.clone();
                let reset_name = name.clone();
                let units = progress.with(|book| book.course_progress(&course)).units;
                let summary = Signal::derive(move || progress.with(|book| book.course_progress(&course)));
                view! {
                    <section class="profile__course">
                        <h2>
                            <a href=paths::home_with_course(&name)>{name.clone()}</a>
                        </h2>
                        <CourseProgressCard progress=summary/>
                        <ul class="profile__units">
                            {units
                                .into_iter()
                                .map(|u| view! { <li>{format!("{}: {} of {} topics", u.unit, u.completed, u.total)}</li> })
                                .collect_view()}
                        </ul>
                        <button class="btn btn--link" on:click=move |_| reset(Some(reset_name.clone()))>
                            "Reset course progress"
                        </button>
                    </section>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page profile-page">
            <header class="page__header">
                <h1>"My Progress"</h1>
                <p class="page__subtitle">
                    {move || format!("{} quizzes recorded", progress.with(|book| book.records().len()))}
                </p>
            </header>
            <Show
                when=move || !catalog.with(CatalogState::pending)
                fallback=|| view! { <p class="loading">"Loading courses..."</p> }
            >
                {courses}
            </Show>
            <button class="btn btn--danger" on:click=move |_| reset(None)>
                "Reset all progress"
            </button>
        </div>
    }
}
