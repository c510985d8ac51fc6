use yew::prelude::*;

use crate::state::Session;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub app_name: AttrValue,
    pub session: Session,
    pub on_logout: Callback<()>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <header class="fixed top-0 left-0 right-0 flex justify-center p-4 z-50">
            <div class="glassmorphism flex items-center gap-4 px-4 py-2 rounded-2xl shadow-lg">
                <h1 class="text-xl font-bold tracking-wider text-white">
                    {props.app_name.clone()}
                </h1>
                if props.session.is_authenticated() {
                    <button
                        onclick={on_logout}
                        class="text-xs font-semibold px-3 py-1 rounded-xl \
                               bg-white/10 hover:bg-white/20 transition-colors"
                    >
                        {"Log out"}
                    </button>
                }
            </div>
        </header>
    }
}
