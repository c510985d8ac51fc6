use std::rc::Rc;

use payloads::{
    ChannelId, ChannelStore, MessageStore,
    responses::{Channel, Message, UserProfile},
};
use yew::Reducible;

/// Channel selection of the chat page. Lives only as long as the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatState {
    pub active_channel: Option<ChannelId>,
}

impl ChatState {
    /// Starts on the first channel, if there is one.
    pub fn new(channels: &[Channel]) -> Self {
        Self {
            active_channel: channels.first().map(|channel| channel.id.clone()),
        }
    }

    pub fn is_active(&self, channel_id: &ChannelId) -> bool {
        self.active_channel.as_ref() == Some(channel_id)
    }
}

pub enum ChatAction {
    /// Ids are not checked against the channel list; an unknown id just
    /// shows no messages.
    SelectChannel(ChannelId),
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChatAction::SelectChannel(channel_id) => {
                tracing::debug!(%channel_id, "select channel");
                Rc::new(ChatState {
                    active_channel: Some(channel_id),
                })
            }
        }
    }
}

/// Channels to list in the sidebar. A failing store shows none.
pub fn load_channels<S>(store: &S) -> Vec<Channel>
where
    S: ChannelStore + ?Sized,
{
    store.list_channels().unwrap_or_else(|e| {
        tracing::warn!("failed to list channels: {e}");
        Vec::new()
    })
}

/// Messages of the active channel in store order, or an empty list when no
/// channel is selected or the store has nothing for it.
pub fn load_messages<S>(store: &S, state: &ChatState) -> Vec<Message>
where
    S: MessageStore + ?Sized,
{
    let Some(channel_id) = &state.active_channel else {
        return Vec::new();
    };
    store.list_messages(channel_id).unwrap_or_else(|e| {
        tracing::debug!(%channel_id, "no messages: {e}");
        Vec::new()
    })
}

/// Which side of the conversation a message is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSide {
    Own,
    Other,
}

impl MessageSide {
    /// `Own` when the viewer wrote the message. Without a viewer every
    /// message is `Other`.
    pub fn of(message: &Message, viewer: Option<&UserProfile>) -> Self {
        match viewer {
            Some(user) if message.is_authored_by(&user.id) => MessageSide::Own,
            _ => MessageSide::Other,
        }
    }
}
