//! Quiz buttons on a topic page, badged when already passed.

use curriculum::{TopicBadges, paths};
use leptos::prelude::*;
use quiz::QuizKind;

#[component]
pub fn TopicActions(
    course: String,
    unit: String,
    topic: String,
    #[prop(into)] badges: Signal<TopicBadges>,
) -> impl IntoView {
    let knowledge = paths::quiz(QuizKind::KnowledgeCheck, &course, &unit, Some(&topic));
    let eslce = paths::quiz(QuizKind::EslceStyle, &course, &unit, Some(&topic));

    view! {
        <section class="topic-actions">
            <h3 class="topic-actions__title">"Test Your Knowledge"</h3>
            <div class="topic-actions__buttons">
                <a href=knowledge class="btn btn--primary">
                    {QuizKind::KnowledgeCheck.title()}
                    <Show when=move || badges.get().knowledge_check>
                        <span class="badge badge--done">"✓"</span>
                    </Show>
                </a>
                <a href=eslce class="btn btn--secondary">
                    {QuizKind::EslceStyle.title()}
                    <Show when=move || badges.get().eslce_style>
                        <span class="badge badge--done">"✓"</span>
                    </Show>
                </a>
            </div>
        </section>
    }
}
