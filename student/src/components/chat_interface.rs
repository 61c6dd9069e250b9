//! Tutor chat panel used by the chat page and inline on topic pages.

use curriculum::{ChatContext, Role};
use leptos::prelude::*;

use crate::net::api;
use crate::state::chat::ChatTranscript;

#[component]
pub fn ChatInterface(context: ChatContext, #[prop(optional)] ask: Option<String>) -> impl IntoView {
    let transcript = RwSignal::new(ChatTranscript::new(context));
    if let Some(question) = ask {
        transcript.update(|t| t.set_draft(question));
    }

    let send = move || {
        let Some(request) = transcript.try_update(ChatTranscript::submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let reply = api::send_chat(&request).await;
            if let Err(e) = &reply {
                leptos::logging::warn!("tutor chat failed: {e}");
            }
            transcript.update(|t| t.receive(reply));
        });
    };

    view! {
        <section class="chat">
            <header class="chat__header">
                <h3>"Chat with AI Tutor"</h3>
                <p class="chat__topic">{move || transcript.with(|t| t.topic().to_owned())}</p>
            </header>
            <div class="chat__messages">
                {move || {
                    transcript
                        .with(|t| t.messages().to_vec())
                        .into_iter()
                        .map(|m| {
                            let class = match m.role {
                                Role::User => "chat__bubble chat__bubble--user",
                                Role::Assistant => "chat__bubble chat__bubble--assistant",
                            };
                            view! { <div class=class>{m.content}</div> }
                        })
                        .collect_view()
                }}
                <Show when=move || transcript.with(ChatTranscript::is_pending)>
                    <div class="chat__bubble chat__bubble--assistant chat__typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>
            <form
                class="chat__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || transcript.with(|t| t.draft().to_owned())
                    on:input=move |ev| transcript.update(|t| t.set_draft(event_target_value(&ev)))
                />
                <button class="btn btn--primary" type="submit" disabled=move || !transcript.with(ChatTranscript::can_send)>
                    "Send"
                </button>
            </form>
        </section>
    }
}
