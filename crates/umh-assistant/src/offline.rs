//! Offline provider used when no API key is configured

use async_trait::async_trait;
use std::time::Duration;

use crate::{ChatMessage, ChatProvider, ChatResult, ProviderMetadata};

/// Reply given when the concierge has no model to talk to
pub const OFFLINE_REPLY: &str = "I can't connect to the neural network (API Key missing), but I'd recommend checking out 'Cyberpunk Chronicles' for a thrill!";

/// Answers every message with [`OFFLINE_REPLY`] after a fixed delay.
pub struct OfflineProvider {
    delay: Duration,
}

impl OfflineProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl ChatProvider for OfflineProvider {
    async fn send(
        &self,
        _system_instruction: &str,
        _history: &[ChatMessage],
        _message: &str,
    ) -> ChatResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(OFFLINE_REPLY.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new("Offline", "N/A")
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_then_replies() {
        let provider = OfflineProvider::default();
        let start = tokio::time::Instant::now();
        let reply = provider.send("", &[], "anything good?").await.unwrap();

        assert_eq!(reply, OFFLINE_REPLY);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
