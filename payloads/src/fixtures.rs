//! In-memory stand-in for the TutorDeck backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{
    AuthService, ChannelId, ChannelStore, MessageId, MessageStore, StoreError,
    UserId, UserStore, requests,
    responses::{Channel, Message, MessageAuthor, UserProfile},
};

/// Serves a fixed dataset from memory.
///
/// Logging in or signing up always succeeds and yields the profile of the
/// session user, whatever the credentials. Sent messages are kept until the
/// backend is dropped. Not thread safe; the UI owns one per tab.
#[derive(Debug)]
pub struct FixtureBackend {
    session_user: UserId,
    users: HashMap<UserId, UserProfile>,
    channels: Vec<Channel>,
    messages: RefCell<HashMap<ChannelId, Vec<Message>>>,
    next_message_number: Cell<u64>,
}

impl FixtureBackend {
    pub fn new(
        session_user: UserProfile,
        channels: Vec<Channel>,
        messages: HashMap<ChannelId, Vec<Message>>,
    ) -> Self {
        let highest = messages
            .values()
            .flatten()
            .filter_map(|message| message_number(&message.id))
            .max()
            .unwrap_or(0);

        let session_id = session_user.id.clone();
        let mut users = HashMap::new();
        users.insert(session_id.clone(), session_user);

        Self {
            session_user: session_id,
            users,
            channels,
            messages: RefCell::new(messages),
            next_message_number: Cell::new(highest.saturating_add(1)),
        }
    }

    /// The dataset the prototype ships with.
    pub fn tutordeck() -> Self {
        let system = author("sys", "System");
        let bob = author("u2", "Bob");

        let mut messages = HashMap::new();
        messages.insert(
            ChannelId::from("1"),
            vec![
                message("m1", "Welcome to TutorDeck! 👋", &system),
                message(
                    "m2",
                    "Feel free to ask questions or help others!",
                    &system,
                ),
                message("m3", "Hey everyone! Glad to be here.", &bob),
            ],
        );
        messages.insert(
            ChannelId::from("2"),
            vec![message("m4", "Welcome to the math channel!", &system)],
        );

        Self::new(alex_doe(), tutordeck_channels(), messages)
    }

    pub fn session_user_id(&self) -> &UserId {
        &self.session_user
    }
}

impl Default for FixtureBackend {
    fn default() -> Self {
        Self::tutordeck()
    }
}

impl AuthService for FixtureBackend {
    fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<UserProfile, StoreError> {
        tracing::debug!(username = %credentials.username, "fixture login");
        self.user(&self.session_user)
    }

    fn sign_up(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<UserProfile, StoreError> {
        tracing::debug!(username = %details.username, "fixture sign up");
        self.user(&self.session_user)
    }
}

impl ChannelStore for FixtureBackend {
    fn list_channels(&self) -> Result<Vec<Channel>, StoreError> {
        Ok(self.channels.clone())
    }

    fn channel(&self, channel_id: &ChannelId) -> Result<Channel, StoreError> {
        self.channels
            .iter()
            .find(|channel| &channel.id == channel_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("channel", channel_id))
    }
}

impl MessageStore for FixtureBackend {
    /// Unknown channels have no messages rather than being an error.
    fn list_messages(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Vec<Message>, StoreError> {
        Ok(self
            .messages
            .borrow()
            .get(channel_id)
            .cloned()
            .unwrap_or_default())
    }

    fn send_message(
        &self,
        details: &requests::SendMessage,
    ) -> Result<Message, StoreError> {
        let validation = requests::validate_message_content(&details.content);
        if let Some(error) = validation.error_message() {
            return Err(StoreError::Validation(error.to_string()));
        }
        self.channel(&details.channel_id)?;
        let sender = self.user(&self.session_user)?;

        let number = self.next_message_number.get();
        let Some(next_number) = number.checked_add(1) else {
            return Err(StoreError::Validation(
                "No more message ids available".to_string(),
            ));
        };
        self.next_message_number.set(next_number);
        let message = Message {
            id: MessageId(format!("m{number}")),
            content: details.content.clone(),
            author: MessageAuthor::from(&sender),
        };

        tracing::debug!(
            channel_id = %details.channel_id,
            message_id = %message.id,
            "stored message"
        );
        self.messages
            .borrow_mut()
            .entry(details.channel_id.clone())
            .or_default()
            .push(message.clone());
        Ok(message)
    }
}

impl UserStore for FixtureBackend {
    fn user(&self, user_id: &UserId) -> Result<UserProfile, StoreError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", user_id))
    }
}

/// Credentials the Login button submits. The fixture accepts anything.
pub fn demo_login_credentials() -> requests::LoginCredentials {
    requests::LoginCredentials {
        username: "alex".into(),
        password: "tutordeck".into(),
    }
}

/// Account details the Sign Up button submits.
pub fn demo_account() -> requests::CreateAccount {
    requests::CreateAccount {
        email: "alex@example.com".into(),
        username: "alex".into(),
        password: "tutordeck".into(),
    }
}

pub fn alex_doe() -> UserProfile {
    UserProfile {
        id: UserId::from("u1"),
        name: "Alex Doe".into(),
        bio: "A high school junior passionate about STEM and peer tutoring."
            .into(),
        grade_level: "11th Grade".into(),
        school: "Innovation High".into(),
        subjects_tutoring: vec!["Algebra".into(), "Chemistry".into()],
        subjects_learning: vec!["Calculus".into()],
        country: "Canada".into(),
        languages: vec!["English".into(), "French".into()],
    }
}

fn tutordeck_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: ChannelId::from("1"),
            name: "general".into(),
            description: "General discussion for all users".into(),
        },
        Channel {
            id: ChannelId::from("2"),
            name: "math-help".into(),
            description: "Get help with mathematics".into(),
        },
    ]
}

fn author(id: &str, name: &str) -> MessageAuthor {
    MessageAuthor {
        id: UserId::from(id),
        name: name.into(),
    }
}

fn message(id: &str, content: &str, author: &MessageAuthor) -> Message {
    Message {
        id: MessageId::from(id),
        content: content.into(),
        author: author.clone(),
    }
}

/// Parses ids of the form `m<number>`.
fn message_number(id: &MessageId) -> Option<u64> {
    id.0.strip_prefix('m')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::SendMessage;

    fn contents(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_login_and_sign_up_yield_session_user() {
        let backend = FixtureBackend::tutordeck();
        let wrong = requests::LoginCredentials {
            username: "nobody".into(),
            password: "".into(),
        };
        assert_eq!(backend.login(&wrong).unwrap(), alex_doe());
        assert_eq!(backend.login(&demo_login_credentials()).unwrap(), alex_doe());
        assert_eq!(backend.sign_up(&demo_account()).unwrap(), alex_doe());
        assert_eq!(backend.session_user_id(), &UserId::from("u1"));
    }

    #[test]
    fn test_channels_in_fixture_order() {
        let backend = FixtureBackend::tutordeck();
        let names: Vec<String> = backend
            .list_channels()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["general", "math-help"]);

        let math = backend.channel(&ChannelId::from("2")).unwrap();
        assert_eq!(math.description, "Get help with mathematics");
        assert_eq!(
            backend.channel(&ChannelId::from("9")),
            Err(StoreError::not_found("channel", "9"))
        );
    }

    #[test]
    fn test_messages_in_fixture_order() {
        let backend = FixtureBackend::tutordeck();
        let general = backend.list_messages(&ChannelId::from("1")).unwrap();
        assert_eq!(
            contents(&general),
            vec![
                "Welcome to TutorDeck! 👋",
                "Feel free to ask questions or help others!",
                "Hey everyone! Glad to be here.",
            ]
        );
        assert_eq!(general[2].author, author("u2", "Bob"));
    }

    #[test]
    fn test_unknown_channel_has_no_messages() {
        let backend = FixtureBackend::tutordeck();
        assert!(backend.list_messages(&ChannelId::from("3")).unwrap().is_empty());
        assert!(backend.list_messages(&ChannelId::from("")).unwrap().is_empty());
    }

    #[test]
    fn test_user_lookup() {
        let backend = FixtureBackend::tutordeck();
        assert_eq!(backend.user(&UserId::from("u1")).unwrap().name, "Alex Doe");
        let err = backend.user(&UserId::from("u2")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "user u2 not found");
    }

    #[test]
    fn test_send_message_appends_after_fixture() {
        let backend = FixtureBackend::tutordeck();
        let sent = backend
            .send_message(&SendMessage {
                channel_id: ChannelId::from("2"),
                content: "Can someone explain limits?".into(),
            })
            .unwrap();
        assert_eq!(sent.id, MessageId::from("m5"));
        assert_eq!(sent.author, author("u1", "Alex Doe"));

        let math = backend.list_messages(&ChannelId::from("2")).unwrap();
        assert_eq!(
            contents(&math),
            vec!["Welcome to the math channel!", "Can someone explain limits?"]
        );

        let next = backend
            .send_message(&SendMessage {
                channel_id: ChannelId::from("1"),
                content: "hi".into(),
            })
            .unwrap();
        assert_eq!(next.id, MessageId::from("m6"));
    }

    #[test]
    fn test_send_message_rejects_invalid_input() {
        let backend = FixtureBackend::tutordeck();
        let blank = backend.send_message(&SendMessage {
            channel_id: ChannelId::from("1"),
            content: "   ".into(),
        });
        assert!(matches!(blank, Err(StoreError::Validation(_))));

        let unknown = backend.send_message(&SendMessage {
            channel_id: ChannelId::from("42"),
            content: "hello?".into(),
        });
        assert_eq!(unknown, Err(StoreError::not_found("channel", "42")));

        // failed sends leave the fixture untouched
        assert_eq!(backend.list_messages(&ChannelId::from("1")).unwrap().len(), 3);
        assert!(backend.list_messages(&ChannelId::from("42")).unwrap().is_empty());
    }

    #[test]
    fn test_highest_possible_message_id() {
        let last = MessageId(format!("m{}", u64::MAX));
        let mut messages = HashMap::new();
        messages.insert(
            ChannelId::from("1"),
            vec![message(&last.0, "last one", &author("sys", "System"))],
        );
        let backend =
            FixtureBackend::new(alex_doe(), tutordeck_channels(), messages);

        let sent = backend.send_message(&SendMessage {
            channel_id: ChannelId::from("1"),
            content: "one more".into(),
        });
        assert!(matches!(sent, Err(StoreError::Validation(_))));
        assert_eq!(
            backend.list_messages(&ChannelId::from("1")).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_message_wire_shape() {
        let backend = FixtureBackend::tutordeck();
        let math = backend.list_messages(&ChannelId::from("2")).unwrap();
        let json = serde_json::to_value(&math[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "m4",
                "content": "Welcome to the math channel!",
                "author": { "id": "sys", "name": "System" }
            })
        );
    }

    #[test]
    fn test_message_number() {
        assert_eq!(message_number(&MessageId::from("m12")), Some(12));
        assert_eq!(message_number(&MessageId::from("x1")), None);
        assert_eq!(message_number(&MessageId::from("m")), None);
    }

    #[test]
    fn test_author_initial() {
        assert_eq!(author("u2", "bob").initial(), "B");
        assert_eq!(author("x", "").initial(), "?");
    }
}
