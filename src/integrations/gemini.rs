use std::collections::VecDeque;

use async_trait::async_trait;
use futures_util::{
    stream::{self, BoxStream},
    StreamExt,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::GeminiConfig,
    error::{AppError, Result},
    integrations::{knowledge::UNIVERSITY_KNOWLEDGE_BASE, ChatBackend, Integration},
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Streaming client for the hosted Gemini model. Each request carries the
/// fixed knowledge-base system instruction plus the latest user utterance;
/// the reply arrives as SSE events that are decoded into text fragments.
pub struct GeminiChat {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiChat {
    pub fn new(config: Option<GeminiConfig>) -> Option<Self> {
        config.and_then(|cfg| {
            if cfg.enabled {
                Some(Self {
                    config: cfg,
                    client: reqwest::Client::new(),
                })
            } else {
                None
            }
        })
    }
}

#[async_trait]
impl Integration for GeminiChat {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn health_check(&self) -> Result<()> {
        if self.config.api_key.is_empty() {
            return Err(AppError::Integration(
                "Gemini API key not configured".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatBackend for GeminiChat {
    async fn stream_reply(&self, message: &str) -> Result<BoxStream<'static, Result<String>>> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            GEMINI_API_BASE, self.config.model
        );

        let body = json!({
            "system_instruction": {
                "parts": [{ "text": UNIVERSITY_KNOWLEDGE_BASE }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": message }]
            }]
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Integration(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Integration(format!(
                "Gemini API returned {}",
                response.status()
            )));
        }

        struct SseState {
            bytes: BoxStream<'static, reqwest::Result<Vec<u8>>>,
            buffer: String,
            ready: VecDeque<String>,
            failed: bool,
        }

        let state = SseState {
            bytes: response
                .bytes_stream()
                .map(|chunk| chunk.map(|b| b.to_vec()))
                .boxed(),
            buffer: String::new(),
            ready: VecDeque::new(),
            failed: false,
        };

        let fragments = stream::unfold(state, |mut st| async move {
            loop {
                if st.failed {
                    return None;
                }
                if let Some(fragment) = st.ready.pop_front() {
                    return Some((Ok(fragment), st));
                }
                match st.bytes.next().await {
                    Some(Ok(chunk)) => {
                        st.buffer.push_str(&String::from_utf8_lossy(&chunk));
                        while let Some(pos) = st.buffer.find('\n') {
                            let line: String = st.buffer.drain(..=pos).collect();
                            if let Some(fragment) = parse_sse_line(line.trim_end()) {
                                if !fragment.is_empty() {
                                    st.ready.push_back(fragment);
                                }
                            }
                        }
                    }
                    Some(Err(e)) => {
                        st.failed = true;
                        return Some((Err(AppError::Integration(e.to_string())), st));
                    }
                    None => return None,
                }
            }
        });

        Ok(fragments.boxed())
    }
}

/// Decodes one SSE line into the text it carries, if any. Non-data lines
/// (comments, event names, blanks) and undecodable payloads yield nothing.
pub fn parse_sse_line(line: &str) -> Option<String> {
    let data = line.strip_prefix("data:")?.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }

    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    let text: String = chunk
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    Some(text)
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
