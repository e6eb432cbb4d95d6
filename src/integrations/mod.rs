use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{
    stream::{self, BoxStream},
    StreamExt,
};
use tokio::sync::RwLock;

use crate::{
    domain::{ChatMessage, ChatTranscript},
    error::{AppError, Result},
};

pub mod gemini;
pub mod knowledge;

pub use gemini::GeminiChat;

/// The single user-visible failure message for the chat boundary. Remote
/// errors are never surfaced as distinguishable codes.
pub const CHAT_FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to the campus network. Please try again later.";

#[async_trait]
pub trait Integration: Send + Sync {
    fn name(&self) -> &str;
    fn is_enabled(&self) -> bool;
    async fn health_check(&self) -> Result<()>;
}

/// A conversational backend: one user utterance in, an incremental sequence
/// of reply text fragments out.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn stream_reply(&self, message: &str) -> Result<BoxStream<'static, Result<String>>>;
}

/// Owns the remote chat handle and the in-memory transcript. Explicitly
/// constructed at process start and dropped with the process; the transcript
/// is transient and never persisted.
pub struct ChatService {
    backend: Option<Arc<dyn ChatBackend>>,
    transcript: Arc<RwLock<ChatTranscript>>,
}

impl ChatService {
    pub fn new(backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self {
            backend,
            transcript: Arc::new(RwLock::new(ChatTranscript::new())),
        }
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.messages().to_vec()
    }

    /// Sends one utterance and returns the reply fragments as they arrive.
    ///
    /// The transcript gains the user message and a placeholder model message
    /// before the first fragment; fragments are folded into the placeholder
    /// as the returned stream is consumed. Every failure, up-front or
    /// mid-stream, collapses into the fixed fallback fragment.
    pub async fn send_message(&self, text: &str) -> BoxStream<'static, String> {
        self.transcript.write().await.push_user(text);

        let opened = match &self.backend {
            Some(backend) => backend.stream_reply(text).await,
            None => Err(AppError::Integration(
                "Chat backend not configured".to_string(),
            )),
        };

        let transcript = self.transcript.clone();
        let fragments = match opened {
            Ok(fragments) => fragments,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                transcript.write().await.fail_model_reply(CHAT_FALLBACK_MESSAGE);
                return stream::once(async { CHAT_FALLBACK_MESSAGE.to_string() }).boxed();
            }
        };

        transcript.write().await.begin_model_reply();

        stream::unfold(
            (fragments, transcript, false),
            |(mut fragments, transcript, failed)| async move {
                if failed {
                    return None;
                }
                match fragments.next().await {
                    Some(Ok(fragment)) => {
                        transcript.write().await.append_fragment(&fragment);
                        Some((fragment, (fragments, transcript, false)))
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Chat stream failed: {}", e);
                        transcript.write().await.fail_model_reply(CHAT_FALLBACK_MESSAGE);
                        Some((
                            CHAT_FALLBACK_MESSAGE.to_string(),
                            (fragments, transcript, true),
                        ))
                    }
                    None => {
                        transcript.write().await.finish_model_reply();
                        None
                    }
                }
            },
        )
        .boxed()
    }
}
