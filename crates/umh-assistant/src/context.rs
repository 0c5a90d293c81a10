//! Assistant context and chat session

use crate::{system_instruction, CatalogEntry, ChatMessage, ChatProvider, ProviderMetadata};

/// Reply shown when the model returns no text
pub const EMPTY_REPLY_FALLBACK: &str = "I'm having trouble processing that request.";
/// Reply shown when the provider call fails
pub const ERROR_FALLBACK: &str = "Connection interrupted. Please try again later.";

/// A running chat with the model: fixed instruction plus the exchanged turns
#[derive(Debug, Clone)]
pub struct ChatSession {
    system_instruction: String,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(system_instruction: String) -> Self {
        Self {
            system_instruction,
            history: Vec::new(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

/// Owns the chat provider and the session created on first use.
///
/// The session lives as long as the context; there is no teardown.
pub struct AssistantContext {
    provider: Box<dyn ChatProvider>,
    catalog: Vec<CatalogEntry>,
    session: Option<ChatSession>,
}

impl AssistantContext {
    pub fn new(provider: Box<dyn ChatProvider>, catalog: Vec<CatalogEntry>) -> Self {
        Self {
            provider,
            catalog,
            session: None,
        }
    }

    pub fn provider_metadata(&self) -> ProviderMetadata {
        self.provider.metadata()
    }

    /// The session, if a message has been sent yet
    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    /// Send `text` to the model and return its reply.
    ///
    /// Never fails: an empty reply or a provider error is turned into a
    /// fallback message. Only exchanges with a non-empty reply are added to
    /// the session history.
    #[tracing::instrument(skip_all, fields(provider = %self.provider.metadata().name))]
    pub async fn send_message(&mut self, text: &str) -> String {
        let catalog = &self.catalog;
        let session = self.session.get_or_insert_with(|| {
            tracing::debug!(titles = catalog.len(), "Creating chat session");
            ChatSession::new(system_instruction(catalog))
        });

        let result = self
            .provider
            .send(&session.system_instruction, &session.history, text)
            .await;

        match result {
            Ok(reply) if reply.trim().is_empty() => {
                tracing::warn!("Assistant returned an empty reply");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Ok(reply) => {
                session.history.push(ChatMessage::user(text));
                session.history.push(ChatMessage::model(reply.clone()));
                reply
            }
            Err(err) => {
                tracing::error!("Assistant error: {}", err);
                ERROR_FALLBACK.to_string()
            }
        }
    }
}
