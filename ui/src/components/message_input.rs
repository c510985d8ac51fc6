use yew::prelude::*;

/// Message composer. Not wired to anything yet: typing and pressing Send
/// leave the conversation unchanged.
#[function_component]
pub fn MessageInput() -> Html {
    html! {
        <div class="p-4">
            <div class="glassmorphism flex items-center p-1 rounded-2xl">
                <input
                    type="text"
                    placeholder="Type a message..."
                    class="flex-1 bg-transparent outline-none px-3 py-2"
                />
                <button
                    type="button"
                    class="cta-gradient p-2 rounded-xl text-white font-bold"
                >
                    {"Send"}
                </button>
            </div>
        </div>
    }
}
