use std::rc::Rc;

use payloads::StoreError;
use payloads::responses::UserProfile;
use yew::Reducible;

/// The pages the shell can show. `Home` on every fresh load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Page {
    #[default]
    Home,
    Chat,
    Community,
    Profile,
}

impl Page {
    pub const ALL: [Page; 4] =
        [Page::Home, Page::Chat, Page::Community, Page::Profile];

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Chat => "💬",
            Page::Community => "🌍",
            Page::Profile => "👤",
        }
    }
}

const LOGGED_OUT_NAV: &[Page] = &[Page::Home];
const LOGGED_IN_NAV: &[Page] = &Page::ALL;

/// The pages offered by the bottom navigation.
///
/// Only a restriction of what is displayed: `AppAction::Navigate` accepts
/// any page regardless of the session.
pub fn nav_items(session: &Session) -> &'static [Page] {
    if session.is_authenticated() {
        LOGGED_IN_NAV
    } else {
        LOGGED_OUT_NAV
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(UserProfile),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedIn(profile) => Some(profile),
            Session::LoggedOut => None,
        }
    }
}

/// All state owned by the application root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub session: Session,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    LogIn(UserProfile),
    LogOut,
    Navigate(Page),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            AppAction::LogIn(profile) => {
                tracing::info!(user_id = %profile.id, "logged in");
                next.session = Session::LoggedIn(profile);
            }
            AppAction::LogOut => {
                tracing::info!("logged out");
                next.session = Session::LoggedOut;
            }
            AppAction::Navigate(page) => {
                tracing::debug!(from = %self.page, to = %page, "navigate");
                next.page = page;
            }
        }

        Rc::new(next)
    }
}

/// Turns the answer of a login or sign-up call into the action to dispatch.
///
/// Failures are logged and produce no action, so the session stays as it
/// was.
pub fn login_action(
    flow: &str,
    result: Result<UserProfile, StoreError>,
) -> Option<AppAction> {
    match result {
        Ok(profile) => Some(AppAction::LogIn(profile)),
        Err(e) => {
            tracing::warn!("{flow} failed: {e}");
            None
        }
    }
}
