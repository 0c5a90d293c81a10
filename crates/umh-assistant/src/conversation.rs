//! Chat widget conversation state

use crate::{AssistantContext, ChatMessage, Role};

/// First message shown when the chat widget opens
pub const GREETING: &str = "Hello! I am your AI Cinema Concierge. Looking for a recommendation?";

/// Messages shown in the chat widget plus the in-flight gate.
///
/// While a reply is pending no further input is accepted.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Model, GREETING)],
            loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Accept user input unless it is blank or a reply is pending.
    ///
    /// Returns the text to send to the assistant.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Some(input.to_string())
    }

    /// Record the assistant's reply and reopen input
    pub fn resolve(&mut self, reply: impl Into<String>) -> &ChatMessage {
        self.loading = false;
        self.messages.push(ChatMessage::model(reply));
        &self.messages[self.messages.len() - 1]
    }

    /// Submit `input`, wait for the assistant and record its reply.
    ///
    /// Returns `None` when the input was refused.
    pub async fn send(&mut self, ctx: &mut AssistantContext, input: &str) -> Option<&ChatMessage> {
        let text = self.submit(input)?;
        let reply = ctx.send_message(&text).await;
        Some(self.resolve(reply))
    }
}
