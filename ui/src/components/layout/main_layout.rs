use yew::prelude::*;

use super::{BottomNav, Header};
use crate::state::{Page, Session};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub app_name: AttrValue,
    pub session: Session,
    pub active_page: Page,
    pub on_navigate: Callback<Page>,
    pub on_login: Callback<()>,
    pub on_sign_up: Callback<()>,
    pub on_logout: Callback<()>,
    pub children: Children,
}

/// Header, scrollable content area and bottom navigation. The same shell is
/// used for every page.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen hero-bg-pattern text-white">
            <Header
                app_name={props.app_name.clone()}
                session={props.session.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main class="pb-28 pt-20 px-4 sm:px-6 lg:px-8">
                {for props.children.iter()}
            </main>
            <BottomNav
                session={props.session.clone()}
                active_page={props.active_page}
                on_navigate={props.on_navigate.clone()}
                on_login={props.on_login.clone()}
                on_sign_up={props.on_sign_up.clone()}
            />
        </div>
    }
}
