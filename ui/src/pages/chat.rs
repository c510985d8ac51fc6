use payloads::{ChannelId, responses::UserProfile};
use yew::prelude::*;

use crate::backend::BackendHandle;
use crate::chat::{ChatAction, ChatState, load_channels, load_messages};
use crate::components::{ChatSidebar, MessageArea, MessageInput};

#[derive(Properties, PartialEq)]
pub struct ChatPageProps {
    pub backend: BackendHandle,
    /// Logged-in user, used to tell own messages from others.
    pub viewer: Option<UserProfile>,
}

#[function_component]
pub fn ChatPage(props: &ChatPageProps) -> Html {
    let channels = use_memo(props.backend.clone(), |backend| {
        load_channels(&**backend)
    });
    let chat = {
        let channels = channels.clone();
        use_reducer(move || ChatState::new(&channels))
    };
    let messages = load_messages(&*props.backend, &chat);

    let on_select = {
        let chat = chat.clone();
        Callback::from(move |channel_id: ChannelId| {
            chat.dispatch(ChatAction::SelectChannel(channel_id));
        })
    };

    html! {
        <div class="h-[calc(100vh-10rem)] flex glassmorphism rounded-2xl overflow-hidden">
            <ChatSidebar
                channels={(*channels).clone()}
                active_channel={chat.active_channel.clone()}
                {on_select}
            />
            <div class="flex-1 flex flex-col">
                <MessageArea
                    channel_id={chat.active_channel.clone()}
                    {messages}
                    viewer={props.viewer.clone()}
                />
                <MessageInput />
            </div>
        </div>
    }
}
