use payloads::{ChannelId, responses::{Message, UserProfile}};
use yew::prelude::*;

use crate::chat::MessageSide;
use crate::components::author_avatar::render_author_avatar;
use crate::hooks::use_scroll_to_latest;

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
    pub channel_id: Option<ChannelId>,
    pub messages: Vec<Message>,
    pub viewer: Option<UserProfile>,
}

/// Scrollable message list. Follows the newest message when the channel or
/// the number of messages changes.
#[function_component]
pub fn MessageArea(props: &MessageAreaProps) -> Html {
    let end_of_messages = use_node_ref();
    use_scroll_to_latest(
        end_of_messages.clone(),
        (props.channel_id.clone(), props.messages.len()),
    );

    html! {
        <div class="flex-1 p-4 overflow-y-auto">
            { for props.messages.iter().map(|message| {
                let side = MessageSide::of(message, props.viewer.as_ref());
                let (row_classes, bubble_classes) = match side {
                    MessageSide::Own => (
                        "flex items-end gap-2 mb-4 justify-end",
                        "max-w-xs p-3 rounded-2xl bg-blue-600 rounded-br-none",
                    ),
                    MessageSide::Other => (
                        "flex items-end gap-2 mb-4",
                        "max-w-xs p-3 rounded-2xl glassmorphism rounded-bl-none",
                    ),
                };

                html! {
                    <div key={message.id.to_string()} class={row_classes}>
                        if side == MessageSide::Other {
                            {render_author_avatar(&message.author)}
                        }
                        <div class={bubble_classes}>
                            <p class="text-sm">{&message.content}</p>
                        </div>
                    </div>
                }
            })}
            <div ref={end_of_messages} />
        </div>
    }
}
