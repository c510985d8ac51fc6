use std::rc::Rc;

use payloads::{
    AuthService, StoreError, fixtures, requests, responses::UserProfile,
};
use test_helpers::{alex_profile, fixture_backend, init_test_tracing};
use ui::{AppAction, AppState, Page, Session, login_action, nav_items};
use yew::Reducible;

/// Auth service that turns every visitor away.
struct RejectingAuth;

impl AuthService for RejectingAuth {
    fn login(
        &self,
        _credentials: &requests::LoginCredentials,
    ) -> Result<UserProfile, StoreError> {
        Err(StoreError::Authentication("wrong password".into()))
    }

    fn sign_up(
        &self,
        _details: &requests::CreateAccount,
    ) -> Result<UserProfile, StoreError> {
        Err(StoreError::Transport("offline".into()))
    }
}

fn apply(
    state: Rc<AppState>,
    actions: impl IntoIterator<Item = AppAction>,
) -> Rc<AppState> {
    actions
        .into_iter()
        .fold(state, |state, action| state.reduce(action))
}

fn fresh() -> Rc<AppState> {
    Rc::new(AppState::default())
}

/// State right after pressing Login against the fixture backend.
fn logged_in() -> Rc<AppState> {
    apply(fresh(), [AppAction::LogIn(alex_profile())])
}

/// Dispatch the outcome of a login or sign-up call, as the root component
/// does.
fn answer(
    state: Rc<AppState>,
    flow: &str,
    result: Result<UserProfile, StoreError>,
) -> Rc<AppState> {
    apply(state, login_action(flow, result))
}

#[test]
fn test_starts_logged_out_on_home() {
    let state = fresh();
    assert_eq!(state.page, Page::Home);
    assert_eq!(state.session, Session::LoggedOut);
    assert!(!state.session.is_authenticated());
    assert!(state.session.user().is_none());
}

#[test]
fn test_session_follows_last_toggle() {
    init_test_tracing();
    use AppAction::{LogIn, LogOut};
    let profile = alex_profile();

    let sequences: Vec<Vec<AppAction>> = vec![
        vec![],
        vec![LogIn(profile.clone())],
        vec![LogOut],
        vec![LogIn(profile.clone()), LogOut],
        vec![LogOut, LogIn(profile.clone())],
        vec![LogIn(profile.clone()), LogIn(profile.clone())],
        vec![LogIn(profile.clone()), LogOut, LogOut],
        vec![LogOut, LogIn(profile.clone()), LogOut, LogIn(profile.clone())],
    ];

    for actions in sequences {
        let expect_logged_in = matches!(actions.last(), Some(LogIn(_)));
        let state = apply(fresh(), actions.clone());
        assert_eq!(
            state.session.is_authenticated(),
            expect_logged_in,
            "after {actions:?}"
        );
        assert_eq!(state.session.user().is_some(), expect_logged_in);
        if expect_logged_in {
            assert_eq!(state.session.user(), Some(&profile));
        }
    }
}

#[test]
fn test_navigate_sets_requested_page() {
    init_test_tracing();
    for from in Page::ALL {
        for to in Page::ALL {
            let state = apply(
                fresh(),
                [AppAction::Navigate(from), AppAction::Navigate(to)],
            );
            assert_eq!(state.page, to);
        }
    }
}

#[test]
fn test_navigate_is_not_guarded_by_session() {
    // The bottom nav hides the other pages, but the state accepts them.
    let state = apply(fresh(), [AppAction::Navigate(Page::Profile)]);
    assert_eq!(state.page, Page::Profile);
    assert!(!state.session.is_authenticated());
}

#[test]
fn test_nav_items_depend_on_session() {
    assert_eq!(nav_items(&Session::LoggedOut), &[Page::Home]);
    assert_eq!(
        nav_items(&Session::LoggedIn(alex_profile())),
        &[Page::Home, Page::Chat, Page::Community, Page::Profile]
    );

    let state = logged_in();
    assert_eq!(nav_items(&state.session).len(), 4);
    let state = apply(state, [AppAction::LogOut]);
    assert_eq!(nav_items(&state.session), &[Page::Home]);
}

#[test]
fn test_session_changes_keep_page() {
    let state = apply(
        logged_in(),
        [AppAction::Navigate(Page::Chat), AppAction::LogOut],
    );
    assert_eq!(state.page, Page::Chat);
    assert_eq!(nav_items(&state.session), &[Page::Home]);

    let state = apply(state, [AppAction::LogIn(alex_profile())]);
    assert_eq!(state.page, Page::Chat);
}

#[test]
fn test_reduce_does_not_mutate_previous_state() {
    let before = fresh();
    let after = before.clone().reduce(AppAction::Navigate(Page::Community));
    assert_eq!(before.page, Page::Home);
    assert_eq!(after.page, Page::Community);
}

#[test]
fn test_login_and_sign_up_buttons_log_in() {
    let backend = fixture_backend();

    let result = backend.login(&fixtures::demo_login_credentials());
    let state = answer(fresh(), "login", result);
    assert_eq!(state.session.user(), Some(&alex_profile()));

    let result = backend.sign_up(&fixtures::demo_account());
    let state = answer(fresh(), "sign up", result);
    assert_eq!(state.session.user(), Some(&alex_profile()));
}

#[test]
fn test_failed_login_leaves_session_unchanged() {
    init_test_tracing();
    let auth = RejectingAuth;

    let result = auth.login(&fixtures::demo_login_credentials());
    assert!(login_action("login", result.clone()).is_none());
    let state = answer(fresh(), "login", result);
    assert_eq!(state.session, Session::LoggedOut);

    let result = auth.sign_up(&fixtures::demo_account());
    let state = answer(fresh(), "sign up", result);
    assert_eq!(state.session, Session::LoggedOut);

    // an already logged-in visitor stays logged in
    let result = auth.login(&fixtures::demo_login_credentials());
    let state = answer(logged_in(), "login", result);
    assert_eq!(state.session.user(), Some(&alex_profile()));
}
