use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// An in-memory conversation transcript. Transient by design: chat history
/// is never written to durable storage.
///
/// A model reply starts as an empty placeholder message appended before the
/// first fragment arrives; fragments are then folded into that placeholder.
#[derive(Debug, Default, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    reply_in_progress: Option<String>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage::new(ChatRole::User, text));
        self.messages.last().unwrap()
    }

    /// Appends the empty placeholder model message and returns its id.
    pub fn begin_model_reply(&mut self) -> String {
        let placeholder = ChatMessage::new(ChatRole::Model, "");
        let id = placeholder.id.clone();
        self.messages.push(placeholder);
        self.reply_in_progress = Some(id.clone());
        id
    }

    /// Concatenates one streamed fragment onto the in-progress reply.
    pub fn append_fragment(&mut self, fragment: &str) {
        if let Some(id) = &self.reply_in_progress {
            if let Some(msg) = self.messages.iter_mut().find(|m| &m.id == id) {
                msg.text.push_str(fragment);
            }
        }
    }

    pub fn finish_model_reply(&mut self) {
        self.reply_in_progress = None;
    }

    /// Abandons whatever was in flight and appends the fixed fallback as its
    /// own message. The triggering error is absorbed here and never retried.
    pub fn fail_model_reply(&mut self, fallback: &str) {
        self.reply_in_progress = None;
        self.messages.push(ChatMessage::new(ChatRole::Model, fallback));
    }
}
