//! Suggested questions that open the tutor chat pre-filled.

use curriculum::study::follow_up_questions;
use curriculum::{Topic, paths};
use leptos::prelude::*;

#[component]
pub fn FollowUps(course: String, unit: String, topic: Topic) -> impl IntoView {
    let chips = follow_up_questions(&topic)
        .into_iter()
        .map(|question| {
            let href = paths::chat(&course, &unit, &topic.topic, Some(&question));
            view! { <a href=href class="chip">{question}</a> }
        })
        .collect_view();

    view! {
        <section class="follow-ups">
            <h3 class="follow-ups__title">"Questions to explore"</h3>
            <div class="follow-ups__chips">{chips}</div>
        </section>
    }
}
