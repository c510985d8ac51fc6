use yew::prelude::*;

use crate::state::{Page, Session, nav_items};

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub session: Session,
    /// Current page, for highlighting.
    pub active_page: Page,
    pub on_navigate: Callback<Page>,
    pub on_login: Callback<()>,
    pub on_sign_up: Callback<()>,
}

const ITEM_BASE_CLASSES: &str = "flex flex-col items-center text-xs p-2 \
    rounded-2xl transition-all duration-300";
const ITEM_ACTIVE_CLASSES: &str = "text-white";
const ITEM_INACTIVE_CLASSES: &str = "text-white/70 hover:text-white";

/// Navigation bar pinned to the bottom of the viewport.
///
/// Logged-out visitors only get Home plus the Login and Sign Up buttons.
#[function_component]
pub fn BottomNav(props: &BottomNavProps) -> Html {
    let logged_out = !props.session.is_authenticated();

    html! {
        <nav class="fixed bottom-4 left-1/2 -translate-x-1/2 w-[95%] max-w-sm z-50">
            <div class="glassmorphism flex justify-around items-center p-2 rounded-3xl shadow-2xl">
                { for nav_items(&props.session).iter().map(|&page| {
                    let classes = format!(
                        "{} {}",
                        ITEM_BASE_CLASSES,
                        if page == props.active_page {
                            ITEM_ACTIVE_CLASSES
                        } else {
                            ITEM_INACTIVE_CLASSES
                        }
                    );
                    let onclick =
                        props.on_navigate.reform(move |_: MouseEvent| page);

                    html! {
                        <button key={page.to_string()} {onclick} class={classes}>
                            <span class="text-2xl mb-1">{page.icon()}</span>
                            {page.to_string()}
                        </button>
                    }
                })}
                if logged_out {
                    <>
                        <button
                            onclick={props.on_login.reform(|_: MouseEvent| ())}
                            class="cta-gradient font-bold text-sm px-5 py-2.5 rounded-2xl \
                                   shadow-lg hover:scale-105 transition-transform"
                        >
                            {"Login"}
                        </button>
                        <button
                            onclick={props.on_sign_up.reform(|_: MouseEvent| ())}
                            class="bg-white/10 font-bold text-sm px-5 py-2.5 rounded-2xl \
                                   hover:bg-white/20 transition-colors"
                        >
                            {"Sign Up"}
                        </button>
                    </>
                }
            </div>
        </nav>
    }
}
