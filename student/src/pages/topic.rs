//! Topic refresher notes with study aids and the inline tutor.

#[cfg(test)]
#[path = "topic_test.rs"]
mod topic_test;

use curriculum::{ChatContext, ProgressBook, RefresherNotes, Topic, paths};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_interface::ChatInterface;
use crate::components::follow_ups::FollowUps;
use crate::components::study_tools::StudyTools;
use crate::components::topic_actions::TopicActions;
use crate::state::catalog::CatalogState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicTab {
    #[default]
    Overview,
    KeyConcepts,
    Details,
    Examples,
}

impl TopicTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::KeyConcepts, Self::Details, Self::Examples];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::KeyConcepts => "Key Concepts",
            Self::Details => "Details",
            Self::Examples => "Examples",
        }
    }

    /// Prose shown by the text tabs. Key concepts render as a list instead.
    #[must_use]
    pub fn prose(self, notes: &RefresherNotes) -> Option<&str> {
        match self {
            Self::Overview => Some(notes.overview.as_str()),
            Self::KeyConcepts => None,
            Self::Details => Some(notes.detailed_explanation.as_str()),
            Self::Examples => Some(notes.examples.as_str()),
        }
    }
}

#[component]
fn TopicBody(course: String, unit: String, topic: Topic) -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressBook>>();
    let tab = RwSignal::new(TopicTab::default());
    let chat_open = RwSignal::new(false);

    let badges = Signal::derive({
        let (course, unit, name) = (course.clone(), unit.clone(), topic.topic.clone());
        move || progress.with(|book| book.topic_badges(&course, &unit, &name))
    });

    let notes = topic.refresher_notes.clone();
    let tab_body = move || {
        let current = tab.get();
        match current.prose(&notes) {
            Some(text) if text.is_empty() => view! { <p class="empty">"No content yet."</p> }.into_any(),
            Some(text) => view! { <p class="topic__prose">{text.to_owned()}</p> }.into_any(),
            None => view! {
                <dl class="topic__concepts">
                    {notes
                        .key_concepts
                        .iter()
                        .map(|(name, explanation)| {
                            view! {
                                <dt>{name.to_owned()}</dt>
                                <dd>{explanation.to_owned()}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
            }
            .into_any(),
        }
    };

    let tips = (!topic.exam_tips.is_empty()).then(|| {
        view! {
            <section class="topic__tips">
                <h3>"Exam Tips"</h3>
                <p>{topic.exam_tips.clone()}</p>
            </section>
        }
    });

    let diagrams = (!topic.diagrams.is_empty()).then(|| {
        let items = topic
            .diagrams
            .iter()
            .map(|d| {
                let figure = match &d.image_url {
                    Some(url) => view! { <img src=url.clone() alt=d.description.clone()/> }.into_any(),
                    None => view! { <div class="diagram__placeholder">"Diagram"</div> }.into_any(),
                };
                view! {
                    <figure class="diagram">
                        {figure}
                        <figcaption>{d.description.clone()}</figcaption>
                    </figure>
                }
            })
            .collect_view();
        view! {
            <section class="topic__diagrams">
                <h3>"Diagrams"</h3>
                {items}
            </section>
        }
    });

    let context = ChatContext::for_topic(&topic);

    view! {
        <a href=paths::unit(&course, &unit) class="back-link">"← Back"</a>
        <header class="page__header">
            <p class="page__eyebrow">{unit.clone()}</p>
            <h1>{topic.topic.clone()}</h1>
        </header>
        <div class="tabs">
            {TopicTab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == t
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <section class="topic__body">{tab_body}</section>
        {tips}
        {diagrams}
        <TopicActions course=course.clone() unit=unit.clone() topic=topic.topic.clone() badges=badges/>
        <StudyTools topic=topic.clone()/>
        <FollowUps course=course.clone() unit=unit.clone() topic=topic.clone()/>
        <button class="btn btn--secondary topic__chat-toggle" on:click=move |_| chat_open.update(|o| *o = !*o)>
            {move || if chat_open.get() { "Close Chat" } else { "Ask AI Tutor" }}
        </button>
        <Show when=move || chat_open.get()>
            <ChatInterface context=context.clone()/>
        </Show>
    }
}

#[component]
pub fn TopicPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let params = use_params_map();

    let route = Memo::new(move |_| {
        params.with(|p| {
            let get = |key: &str| paths::decode(&p.get(key).unwrap_or_default());
            (get("course"), get("unit"), get("topic"))
        })
    });

    let content = move || {
        let (course, unit, name) = route.get();
        if catalog.with(CatalogState::pending) {
            return view! { <p class="loading">"Loading topic content..."</p> }.into_any();
        }
        match catalog.with(|c| c.topic(&course, &unit, &name)) {
            Some(topic) => view! { <TopicBody course=course unit=unit topic=topic/> }.into_any(),
            None => view! { <p class="empty">"Topic not found"</p> }.into_any(),
        }
    };

    view! { <div class="page topic-page">{content}</div> }
}
