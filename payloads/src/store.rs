//! Collaborator interfaces the frontend reads its data through.
//!
//! The prototype answers all of them from [`crate::FixtureBackend`]. A real
//! backend client implements the same traits.

use crate::{
    ChannelId, UserId, requests,
    responses::{Channel, Message, UserProfile},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Network error. Please check your connection.")]
    Transport(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub trait AuthService {
    fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<UserProfile, StoreError>;

    fn sign_up(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<UserProfile, StoreError>;
}

pub trait ChannelStore {
    /// All channels, in display order.
    fn list_channels(&self) -> Result<Vec<Channel>, StoreError>;

    fn channel(&self, channel_id: &ChannelId) -> Result<Channel, StoreError>;
}

pub trait MessageStore {
    /// Messages of a channel, oldest first.
    fn list_messages(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Vec<Message>, StoreError>;

    fn send_message(
        &self,
        details: &requests::SendMessage,
    ) -> Result<Message, StoreError>;
}

pub trait UserStore {
    fn user(&self, user_id: &UserId) -> Result<UserProfile, StoreError>;
}
