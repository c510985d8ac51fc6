use crate::ChannelId;
use serde::{Deserialize, Serialize};

pub const MESSAGE_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    pub channel_id: ChannelId,
    pub content: String,
}

/// Validation result for message contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValidation {
    Valid,
    Empty,
    TooLong,
}

impl MessageValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Message cannot be empty"),
            Self::TooLong => Some("Message must be at most 2000 characters"),
        }
    }
}

/// Validate the content of a message about to be sent.
///
/// Whitespace-only content counts as empty. Length is measured in
/// characters, not bytes.
pub fn validate_message_content(content: &str) -> MessageValidation {
    if content.trim().is_empty() {
        return MessageValidation::Empty;
    }
    if content.chars().count() > MESSAGE_MAX_LEN {
        return MessageValidation::TooLong;
    }
    MessageValidation::Valid
}
