use payloads::{
    AuthService, FixtureBackend, MessageId, UserId, fixtures,
    responses::{Message, MessageAuthor, UserProfile},
};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Install a stderr subscriber for the test binary. Safe to call from
/// every test; only the first call takes effect.
///
/// Set `RUST_LOG=debug` and run with `--nocapture` to see state transitions.
pub fn init_test_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer());
    let _ = LogTracer::init();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// The backend the app ships with.
pub fn fixture_backend() -> FixtureBackend {
    FixtureBackend::tutordeck()
}

/// The profile the Login button yields.
pub fn alex_profile() -> UserProfile {
    fixture_backend()
        .login(&fixtures::demo_login_credentials())
        .expect("fixture login never fails")
}

/// A message whose author is named after the upper-cased author id.
pub fn message(id: &str, author_id: &str, content: &str) -> Message {
    Message {
        id: MessageId::from(id),
        content: content.into(),
        author: MessageAuthor {
            id: UserId::from(author_id),
            name: author_id.to_uppercase(),
        },
    }
}
