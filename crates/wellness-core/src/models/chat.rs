//! Chat transcript models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConditionInfo;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    /// Attached condition lookup, when the reply came from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_data: Option<ConditionInfo>,
}

impl ChatMessage {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            role,
            timestamp: Utc::now(),
            medical_data: None,
        }
    }

    /// Message typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    /// Message produced by the assistant.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Bot, text)
    }

    /// Attach a condition lookup result.
    pub fn with_medical_data(mut self, info: ConditionInfo) -> Self {
        self.medical_data = Some(info);
        self
    }
}
