//! Course selection and the unit list of the chosen course.

use curriculum::{CoursePreference, ProgressBook};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::course_progress::CourseProgressCard;
use crate::components::unit_card::UnitCard;
use crate::state::catalog::CatalogState;
use crate::util::storage;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let progress = expect_context::<RwSignal<ProgressBook>>();
    let preference = expect_context::<RwSignal<CoursePreference>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let selected = Memo::new(move |_| {
        let from_query = query.with(|q| q.get("course"));
        preference.with(|p| CoursePreference::resolve(from_query.as_deref(), p))
    });

    let choose = move |course: String| {
        let (pref, href) = CoursePreference::pick(&course);
        storage::save_preference(&pref);
        preference.set(pref);
        navigate(&href, NavigateOptions::default());
    };

    let course_view = move || {
        let name = selected.get()?;
        let Some(course) = catalog.with(|c| c.course(&name)) else {
            return Some(view! { <p class="empty">"Course not found"</p> }.into_any());
        };
        let course_progress = Signal::derive({
            let course = course.clone();
            move || progress.with(|book| book.course_progress(&course))
        });
        let units = course
            .units
            .iter()
            .map(|unit| {
                let unit_progress = progress.with(|book| book.unit_progress(&course.course_name, unit));
                view! { <UnitCard course=course.course_name.clone() unit=unit.clone() progress=unit_progress/> }
            })
            .collect_view();
        Some(
            view! {
                <CourseProgressCard progress=course_progress/>
                <div class="unit-list">{units}</div>
            }
            .into_any(),
        )
    };

    view! {
        <div class="page home-page">
            <header class="page__header">
                <h1>"ESLCE Prep"</h1>
                <p class="page__subtitle">"Study smarter for your national exam"</p>
            </header>
            <Show
                when=move || !catalog.with(CatalogState::pending)
                fallback=|| view! { <p class="loading">"Loading courses..."</p> }
            >
                {move || catalog.with(|c| c.error.clone()).map(|e| view! { <p class="error">{e}</p> })}
                <label class="course-select">
                    <span>"Course"</span>
                    <select
                        prop:value=move || selected.get().unwrap_or_default()
                        on:change={
                            let choose = choose.clone();
                            move |ev| choose(event_target_value(&ev))
                        }
                    >
                        <option value="">"Select a course"</option>
                        {move || {
                            catalog
                                .with(CatalogState::course_names)
                                .into_iter()
                                .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                {course_view}
            </Show>
        </div>
    }
}
