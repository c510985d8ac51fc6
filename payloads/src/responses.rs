use crate::{ChannelId, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// Profile of a TutorDeck member.
///
/// The subject and language lists keep the order they were entered in; the
/// frontend displays them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub bio: String,
    pub grade_level: String,
    pub school: String,
    pub subjects_tutoring: Vec<String>,
    pub subjects_learning: Vec<String>,
    pub country: String,
    pub languages: Vec<String>,
}

/// A named discussion topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub description: String,
}

/// The author reference embedded in every message.
///
/// Only carries what the chat view needs to render; use the id to look up
/// the full profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAuthor {
    pub id: UserId,
    pub name: String,
}

impl MessageAuthor {
    /// Upper-cased first character of the author's name, or `?` when the
    /// name is empty.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

impl From<&UserProfile> for MessageAuthor {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub author: MessageAuthor,
}

impl Message {
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author.id == user_id
    }
}
