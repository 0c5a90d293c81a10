//! Chat provider trait and message model

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use umh_settings::{AssistantProvider, AssistantSettings};
use uuid::Uuid;

use crate::{ChatResult, GeminiConfig, GeminiProvider, OfflineProvider};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One message in a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }
}

/// Metadata about a chat provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// The provider's display name (e.g., "Gemini")
    pub name: String,
    /// The model being used (e.g., "gemini-2.5-flash")
    pub model: String,
}

impl ProviderMetadata {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Chat backend trait.
///
/// Implement this trait to plug a new model API behind the concierge.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send `message` after `history`, under `system_instruction`, and return
    /// the model's reply text. An empty string means the model said nothing.
    async fn send(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> ChatResult<String>;

    /// Get metadata about the provider.
    fn metadata(&self) -> ProviderMetadata;

    /// Whether the provider can reach a real model.
    fn is_available(&self) -> bool;
}

#[async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for Arc<P> {
    async fn send(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> ChatResult<String> {
        (**self).send(system_instruction, history, message).await
    }

    fn metadata(&self) -> ProviderMetadata {
        (**self).metadata()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Factory for creating chat providers based on settings.
pub struct ChatProviderFactory;

impl ChatProviderFactory {
    /// Creates the provider selected in `settings`.
    ///
    /// Falls back to the offline provider when no API key is configured or
    /// the HTTP client cannot be built.
    pub fn create_provider(settings: &AssistantSettings) -> Box<dyn ChatProvider> {
        let offline = || -> Box<dyn ChatProvider> {
            Box::new(OfflineProvider::new(settings.offline_delay()))
        };

        match settings.provider {
            AssistantProvider::Offline => offline(),
            AssistantProvider::Gemini => {
                let Some(api_key) = settings.api_key() else {
                    tracing::warn!(
                        env = %settings.api_key_env,
                        "No API key configured, using offline assistant"
                    );
                    return offline();
                };

                let config = GeminiConfig {
                    api_key,
                    model: settings.model.clone(),
                    base_url: settings.base_url.clone(),
                    timeout: settings.timeout(),
                };
                match GeminiProvider::new(config) {
                    Ok(provider) => Box::new(provider),
                    Err(err) => {
                        tracing::error!("Failed to create Gemini provider: {}", err);
                        offline()
                    }
                }
            }
        }
    }
}
