//! Standalone tutor chat, opened from follow-up chips or the bottom nav.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use curriculum::{ChatContext, paths};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_interface::ChatInterface;
use crate::state::catalog::CatalogState;

/// Topic label when the chat is opened without one.
pub const GENERAL_TOPIC: &str = "ESLCE preparation";

/// Context for the topic named in the query, enriched from the catalog when found.
#[must_use]
pub fn chat_context(catalog: &CatalogState, course: &str, unit: &str, topic: &str) -> ChatContext {
    if topic.trim().is_empty() {
        return ChatContext { topic: GENERAL_TOPIC.to_owned(), ..ChatContext::default() };
    }
    catalog.topic(course, unit, topic).map_or_else(
        || ChatContext { topic: topic.to_owned(), ..ChatContext::default() },
        |t| ChatContext::for_topic(&t),
    )
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let query = use_query_map();

    let content = move || {
        if catalog.with(CatalogState::pending) {
            return view! { <p class="loading">"Loading..."</p> }.into_any();
        }
        let (course, unit, topic, ask) = query.with(|q| {
            let get = |key: &str| q.get(key).map(|v| paths::decode(&v)).unwrap_or_default();
            (get("course"), get("unit"), get("topic"), q.get("ask").map(|v| paths::decode(&v)))
        });
        let context = catalog.with_untracked(|c| chat_context(c, &course, &unit, &topic));
        let back = (!topic.is_empty()).then(|| paths::topic(&course, &unit, &topic));
        view! {
            {back.map(|href| view! { <a href=href class="back-link">"← Back to topic"</a> })}
            <ChatInterface context=context ask=ask.unwrap_or_default()/>
        }
        .into_any()
    };

    view! { <div class="page chat-page">{content}</div> }
}
