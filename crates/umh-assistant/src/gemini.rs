//! Google Gemini provider

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{ChatError, ChatMessage, ChatProvider, ChatResult, ProviderMetadata, Role};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Gemini `generateContent` provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> ChatResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::ProviderUnavailable(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize, Default)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize, Default)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

impl GeminiContent {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart {
                text: text.to_string(),
            }],
        }
    }
}

fn build_request(
    system_instruction: &str,
    history: &[ChatMessage],
    message: &str,
) -> GenerateContentRequest {
    let mut contents: Vec<GeminiContent> = history
        .iter()
        .map(|msg| GeminiContent::text(Some(msg.role.as_str()), &msg.text))
        .collect();
    contents.push(GeminiContent::text(Some(Role::User.as_str()), message));

    GenerateContentRequest {
        system_instruction: GeminiContent::text(None, system_instruction),
        contents,
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    #[tracing::instrument(skip_all, fields(model = %self.config.model, history = history.len()))]
    async fn send(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> ChatResult<String> {
        let req = build_request(system_instruction, history, message);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&req)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ChatError::Authentication(
                "Invalid Gemini API key".to_string(),
            ));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatError::RateLimited("Rate limit exceeded".to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::InvalidResponse(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        tracing::debug!(chars = text.len(), "Gemini reply received");
        Ok(text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new("Gemini", &self.config.model)
    }

    fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::model("hello")];
        let req = build_request("be brief", &history, "recommend something");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"].as_array().unwrap().len(), 3);
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][2]["role"], "user");
        assert_eq!(json["contents"][2]["parts"][0]["text"], "recommend something");
    }

    #[test]
    fn test_endpoint() {
        let provider = GeminiProvider::new(GeminiConfig {
            api_key: "key".into(),
            base_url: "http://localhost:9999/".into(),
            ..GeminiConfig::default()
        })
        .unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(provider.is_available());
        assert_eq!(provider.metadata().name, "Gemini");
    }
}
