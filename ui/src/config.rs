//! Build-time configuration.
//!
//! There is no process environment in the browser, so settings are read
//! with `option_env!` when the wasm bundle is compiled, e.g.
//! `UI_LOG_FILTER=debug trunk build`.

pub(crate) const DEFAULT_LOG_FILTER: &str = "error,ui=debug";
const DEFAULT_APP_NAME: &str = "TutorDeck";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `EnvFilter` directive for the console logger.
    pub log_filter: String,
    /// Brand shown in the header and the document title.
    pub app_name: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("UI_LOG_FILTER"),
            option_env!("UI_APP_NAME"),
        )
    }

    fn from_values(log_filter: Option<&str>, app_name: Option<&str>) -> Self {
        Self {
            log_filter: non_empty(log_filter)
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
            app_name: non_empty(app_name)
                .unwrap_or(DEFAULT_APP_NAME)
                .to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
