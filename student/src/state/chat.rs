//! Tutor chat transcript for one topic.
//!
//! The transcript is local to the chat page. Sending appends the user turn
//! immediately, then exactly one assistant turn arrives: the tutor's reply or
//! a fixed apology when the request fails.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use curriculum::chat::FAILURE_REPLY;
use curriculum::{ChatContext, ChatMessage, ChatRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    context: ChatContext,
    draft: String,
    pending: bool,
}

impl ChatTranscript {
    /// Fresh transcript opened with the tutor's greeting.
    #[must_use]
    pub fn new(context: ChatContext) -> Self {
        Self {
            messages: vec![ChatMessage::greeting(&context.topic)],
            context,
            draft: String::new(),
            pending: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.context.topic
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Waiting for the tutor; drives the typing indicator.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Move the draft into the transcript and build the request to post.
    ///
    /// Returns `None` for a blank draft or while a reply is outstanding.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(text.trim()));
        self.pending = true;
        Some(ChatRequest { messages: self.messages.clone(), context: self.context.clone() })
    }

    /// Append the tutor's answer to the outstanding request.
    pub fn receive(&mut self, reply: Result<String, String>) {
        if !self.pending {
            return;
        }
        self.pending = false;
        let text = reply.unwrap_or_else(|_| FAILURE_REPLY.to_owned());
        self.messages.push(ChatMessage::assistant(text));
    }
}
