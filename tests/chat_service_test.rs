use std::sync::Arc;

use async_trait::async_trait;
use campusmate::{
    domain::ChatRole,
    error::{AppError, Result},
    integrations::{gemini::parse_sse_line, ChatBackend, ChatService, CHAT_FALLBACK_MESSAGE},
};
use futures_util::{
    stream::{self, BoxStream},
    StreamExt,
};

/// A backend that replays a fixed script of fragments and errors.
struct ScriptedBackend {
    script: Vec<std::result::Result<&'static str, &'static str>>,
    fail_on_open: bool,
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn stream_reply(&self, _message: &str) -> Result<BoxStream<'static, Result<String>>> {
        if self.fail_on_open {
            return Err(AppError::Integration("quota exceeded".to_string()));
        }

        let items: Vec<Result<String>> = self
            .script
            .iter()
            .map(|entry| match entry {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(AppError::Integration(msg.to_string())),
            })
            .collect();

        Ok(stream::iter(items).boxed())
    }
}

fn service(script: Vec<std::result::Result<&'static str, &'static str>>) -> ChatService {
    ChatService::new(Some(Arc::new(ScriptedBackend {
        script,
        fail_on_open: false,
    })))
}

#[tokio::test]
async fn test_fragment_accumulation() {
    let chat = service(vec![Ok("Hel"), Ok("lo!")]);

    let fragments = chat.send_message("hi there").await;

    // The placeholder model entry exists before the first fragment arrives
    let before = chat.messages().await;
    assert_eq!(before.len(), 2);
    assert_eq!(before[0].role, ChatRole::User);
    assert_eq!(before[0].text, "hi there");
    assert_eq!(before[1].role, ChatRole::Model);
    assert_eq!(before[1].text, "");

    let received: Vec<String> = fragments.collect().await;
    assert_eq!(received, vec!["Hel".to_string(), "lo!".to_string()]);

    // Exactly one model entry, holding the assembled reply
    let after = chat.messages().await;
    assert_eq!(after.len(), 2);
    assert_eq!(after[1].role, ChatRole::Model);
    assert_eq!(after[1].text, "Hello!");
}

#[tokio::test]
async fn test_failure_on_open_becomes_fallback() {
    let chat = ChatService::new(Some(Arc::new(ScriptedBackend {
        script: vec![],
        fail_on_open: true,
    })));

    let received: Vec<String> = chat.send_message("hi").await.collect().await;
    assert_eq!(received, vec![CHAT_FALLBACK_MESSAGE.to_string()]);

    let messages = chat.messages().await;
    assert_eq!(messages.last().unwrap().text, CHAT_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_mid_stream_failure_keeps_partial_reply() {
    let chat = service(vec![Ok("Let me chec"), Err("connection reset")]);

    let received: Vec<String> = chat.send_message("when are finals?").await.collect().await;
    assert_eq!(
        received,
        vec![
            "Let me chec".to_string(),
            CHAT_FALLBACK_MESSAGE.to_string()
        ]
    );

    let messages = chat.messages().await;
    // user, partial model reply, then the fallback appended as its own entry
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].text, "Let me chec");
    assert_eq!(messages[2].text, CHAT_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_unconfigured_backend_answers_with_fallback() {
    let chat = ChatService::new(None);

    let received: Vec<String> = chat.send_message("hello?").await.collect().await;
    assert_eq!(received, vec![CHAT_FALLBACK_MESSAGE.to_string()]);
}

#[test]
fn test_parse_sse_line() {
    let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hello"},{"text":" there"}]}}]}"#;
    assert_eq!(parse_sse_line(line), Some("Hello there".to_string()));

    // Non-data and malformed lines carry nothing
    assert_eq!(parse_sse_line(""), None);
    assert_eq!(parse_sse_line(": keep-alive"), None);
    assert_eq!(parse_sse_line("event: done"), None);
    assert_eq!(parse_sse_line("data: not json"), None);
    assert_eq!(parse_sse_line("data: [DONE]"), None);

    // A chunk with no candidates (e.g. usage metadata only)
    assert_eq!(parse_sse_line(r#"data: {"usageMetadata":{}}"#), None);
}
