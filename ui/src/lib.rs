use payloads::fixtures::{demo_account, demo_login_credentials};
use yew::prelude::*;

pub mod backend;
pub mod chat;
mod components;
pub mod config;
mod hooks;
pub mod logs;
mod pages;
pub mod state;

pub use backend::{Backend, BackendHandle};
pub use config::AppConfig;
pub use state::{AppAction, AppState, Page, Session, login_action, nav_items};

use components::layout::MainLayout;
use hooks::use_title;
use pages::{ChatPage, CommunityPage, HomePage, ProfilePage};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub backend: BackendHandle,
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let state = use_reducer(AppState::default);
    use_title(&state.page.to_string(), &props.config.app_name);

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |page: Page| {
            state.dispatch(AppAction::Navigate(page));
        })
    };

    let on_login = {
        let state = state.clone();
        let backend = props.backend.clone();
        Callback::from(move |()| {
            let result = backend.login(&demo_login_credentials());
            if let Some(action) = login_action("login", result) {
                state.dispatch(action);
            }
        })
    };

    // Same outcome as Login for now: the fixture backend signs everyone up
    // as the demo user.
    let on_sign_up = {
        let state = state.clone();
        let backend = props.backend.clone();
        Callback::from(move |()| {
            let result = backend.sign_up(&demo_account());
            if let Some(action) = login_action("sign up", result) {
                state.dispatch(action);
            }
        })
    };

    let on_logout = {
        let state = state.clone();
        Callback::from(move |()| {
            state.dispatch(AppAction::LogOut);
        })
    };

    let content = match state.page {
        Page::Home => html! {
            <HomePage is_authenticated={state.session.is_authenticated()} />
        },
        Page::Chat => html! {
            <ChatPage
                backend={props.backend.clone()}
                viewer={state.session.user().cloned()}
            />
        },
        Page::Community => html! { <CommunityPage /> },
        Page::Profile => html! { <ProfilePage /> },
    };

    html! {
        <MainLayout
            app_name={props.config.app_name.clone()}
            session={state.session.clone()}
            active_page={state.page}
            {on_navigate}
            {on_login}
            {on_sign_up}
            {on_logout}
        >
            {content}
        </MainLayout>
    }
}
