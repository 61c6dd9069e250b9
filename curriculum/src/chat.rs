//! Tutor chat wire types and the canned reply composer.
//!
//! The student client posts the whole transcript plus topic context to
//! `/api/chat`; the host answers with one reply string. Replies are composed
//! from catalog content until a real tutor service exists.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::{KeyConcepts, Topic};

/// Shown in place of a reply when the request fails.
pub const FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }

    /// Opening line of a fresh transcript.
    #[must_use]
    pub fn greeting(topic: &str) -> Self {
        Self::assistant(format!("Hi there! I'm your AI tutor. Ask me anything about \"{topic}\"."))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub key_concepts: Option<KeyConcepts>,
}

impl ChatContext {
    #[must_use]
    pub fn for_topic(topic: &Topic) -> Self {
        let notes = &topic.refresher_notes;
        Self {
            topic: topic.topic.clone(),
            overview: (!notes.overview.is_empty()).then(|| notes.overview.clone()),
            key_concepts: (!notes.key_concepts.is_empty()).then(|| notes.key_concepts.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: ChatContext,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("no user message in transcript")]
    NoUserMessage,
}

/// Reply to the last user message in `request`.
///
/// # Errors
///
/// Returns [`ChatError::NoUserMessage`] when the transcript has no user turn.
pub fn compose_reply(request: &ChatRequest) -> Result<String, ChatError> {
    let last = request
        .messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .ok_or(ChatError::NoUserMessage)?;
    let asked = last.content.to_lowercase();
    let ctx = &request.context;

    let mut reply = format!("I understand you're asking about \"{}\". ", ctx.topic);
    if asked.contains("what is") {
        reply.push_str("This topic covers ");
        reply.push_str(ctx.overview.as_deref().unwrap_or_default());
    } else if asked.contains("key concept") {
        let concepts: Vec<String> = ctx
            .key_concepts
            .iter()
            .flat_map(KeyConcepts::iter)
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        reply.push_str("The key concepts include: ");
        reply.push_str(&concepts.join(". "));
    } else {
        reply.push_str("Feel free to ask specific questions about this topic, and I'll do my best to help!");
    }
    Ok(reply)
}
