use payloads::FixtureBackend;
use ui::{App, AppConfig, AppProps, BackendHandle, logs};

fn main() {
    let config = AppConfig::from_build_env();
    logs::init_logging(&config);

    let props = AppProps {
        backend: BackendHandle::new(FixtureBackend::tutordeck()),
        config,
    };
    yew::Renderer::<App>::with_props(props).render();
}
