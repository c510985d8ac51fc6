use payloads::{ChannelId, responses::Channel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatSidebarProps {
    pub channels: Vec<Channel>,
    pub active_channel: Option<ChannelId>,
    pub on_select: Callback<ChannelId>,
}

#[function_component]
pub fn ChatSidebar(props: &ChatSidebarProps) -> Html {
    html! {
        <div class="w-1/3 md:w-1/4 border-r border-white/20 p-4">
            <h2 class="text-lg font-bold mb-4">{"Channels"}</h2>
            <ul>
                { for props.channels.iter().map(|channel| {
                    let is_active =
                        props.active_channel.as_ref() == Some(&channel.id);
                    let onclick = {
                        let channel_id = channel.id.clone();
                        props
                            .on_select
                            .reform(move |_: MouseEvent| channel_id.clone())
                    };

                    html! {
                        <li key={channel.id.to_string()}>
                            <button
                                {onclick}
                                title={channel.description.clone()}
                                class={classes!(
                                    "w-full", "text-left", "p-2", "rounded-lg",
                                    if is_active { "bg-white/20" } else { "hover:bg-white/10" }
                                )}
                            >
                                {format!("# {}", channel.name)}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
