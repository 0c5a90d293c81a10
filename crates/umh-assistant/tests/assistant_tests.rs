//! Assistant context, conversation and Gemini provider tests

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use umh_assistant::{
    AssistantContext, CatalogEntry, ChatError, ChatMessage, ChatProvider, ChatResult,
    Conversation, GeminiConfig, GeminiProvider, ProviderMetadata, EMPTY_REPLY_FALLBACK,
    ERROR_FALLBACK,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────

/// Provider that replays scripted results and records what it was sent
#[derive(Default)]
struct ScriptedProvider {
    replies: Mutex<Vec<ChatResult<String>>>,
    calls: Mutex<Vec<(String, usize, String)>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<ChatResult<String>>) -> Arc<Self> {
        let mut replies = replies;
        replies.reverse();
        Arc::new(Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, usize, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn send(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> ChatResult<String> {
        self.calls.lock().unwrap().push((
            system_instruction.to_string(),
            history.len(),
            message.to_string(),
        ));
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new("Scripted", "test")
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn catalog() -> Vec<CatalogEntry> {
    vec![CatalogEntry {
        title: "Cyberpunk Chronicles".into(),
        year: 2024,
        genres: vec!["Sci-Fi".into()],
        description: "Neon and rain.".into(),
    }]
}

fn gemini(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(GeminiConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        ..GeminiConfig::default()
    })
    .unwrap()
}

// ── AssistantContext ────────────────────────────────────────────

#[tokio::test]
async fn session_created_once_and_history_grows() {
    let provider = ScriptedProvider::new(vec![Ok("First".into()), Ok("Second".into())]);
    let mut ctx = AssistantContext::new(Box::new(provider.clone()), catalog());
    assert!(ctx.session().is_none());

    assert_eq!(ctx.send_message("hi").await, "First");
    assert_eq!(ctx.send_message("more").await, "Second");

    let calls = provider.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].0.contains("- Cyberpunk Chronicles (2024): Sci-Fi. Plot: Neon and rain."));
    assert_eq!(calls[0].0, calls[1].0);
    assert_eq!(calls[0].1, 0);
    assert_eq!(calls[1].1, 2);
    assert_eq!(ctx.session().unwrap().history().len(), 4);
}

#[tokio::test]
async fn empty_reply_uses_fallback() {
    let provider = ScriptedProvider::new(vec![Ok("   ".into())]);
    let mut ctx = AssistantContext::new(Box::new(provider), catalog());
    assert_eq!(ctx.send_message("hi").await, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn empty_reply_stays_out_of_history() {
    let provider = ScriptedProvider::new(vec![Ok(String::new()), Ok("second".into())]);
    let mut ctx = AssistantContext::new(Box::new(provider.clone()), catalog());

    assert_eq!(ctx.send_message("hi").await, EMPTY_REPLY_FALLBACK);
    assert!(ctx.session().unwrap().history().is_empty());

    assert_eq!(ctx.send_message("again").await, "second");
    let calls = provider.calls();
    assert_eq!(calls[1].1, 0);
    assert_eq!(ctx.session().unwrap().history().len(), 2);
}

#[tokio::test]
async fn provider_error_uses_fallback() {
    let provider = ScriptedProvider::new(vec![Err(ChatError::Network("offline".into()))]);
    let mut ctx = AssistantContext::new(Box::new(provider), catalog());

    assert_eq!(ctx.send_message("hi").await, ERROR_FALLBACK);
    assert!(ctx.session().unwrap().history().is_empty());
}

// ── Conversation ────────────────────────────────────────────────

#[tokio::test]
async fn conversation_send_appends_reply() {
    let provider = ScriptedProvider::new(vec![Ok("Watch Cyberpunk Chronicles.".into())]);
    let mut ctx = AssistantContext::new(Box::new(provider), catalog());
    let mut conversation = Conversation::new();

    let reply = conversation
        .send(&mut ctx, "Something futuristic?")
        .await
        .map(|msg| msg.text.clone());
    assert_eq!(reply.as_deref(), Some("Watch Cyberpunk Chronicles."));

    let texts: Vec<&str> = conversation
        .messages()
        .iter()
        .map(|msg| msg.text.as_str())
        .collect();
    assert_eq!(
        &texts[1..],
        &["Something futuristic?", "Watch Cyberpunk Chronicles."]
    );
    assert!(!conversation.is_loading());
}

#[tokio::test]
async fn conversation_refuses_blank_without_calling_provider() {
    let provider = ScriptedProvider::new(vec![]);
    let mut ctx = AssistantContext::new(Box::new(provider.clone()), catalog());
    let mut conversation = Conversation::new();

    assert!(conversation.send(&mut ctx, "  ").await.is_none());
    assert!(provider.calls().is_empty());
}

// ── GeminiProvider ──────────────────────────────────────────────

#[tokio::test]
async fn gemini_posts_generate_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "systemInstruction": { "parts": [{ "text": "be brief" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi " }, { "text": "there" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = gemini(&server).send("be brief", &[], "hello").await.unwrap();
    assert_eq!(reply, "Hi there");
}

#[tokio::test]
async fn gemini_no_candidates_is_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let reply = gemini(&server).send("", &[], "hello").await.unwrap();
    assert_eq!(reply, "");
}

#[tokio::test]
async fn gemini_maps_error_statuses() {
    for (status, expected) in [
        (401u16, "auth"),
        (403, "auth"),
        (429, "rate"),
        (500, "invalid"),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let err = gemini(&server).send("", &[], "hello").await.unwrap_err();
        let kind = match err {
            ChatError::Authentication(_) => "auth",
            ChatError::RateLimited(_) => "rate",
            ChatError::InvalidResponse(_) => "invalid",
            other => panic!("unexpected error {:?}", other),
        };
        assert_eq!(kind, expected, "status {}", status);
    }
}

#[tokio::test]
async fn gemini_unreachable_is_network_error() {
    let provider = GeminiProvider::new(GeminiConfig {
        api_key: "test-key".into(),
        base_url: "http://127.0.0.1:9".into(),
        timeout: Duration::from_secs(2),
        ..GeminiConfig::default()
    })
    .unwrap();

    let err = provider.send("", &[], "hello").await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_)), "{:?}", err);
}
