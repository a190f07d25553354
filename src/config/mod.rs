use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::dashboard::Locale;
use crate::infrastructure::api::ApiSettings;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// One selectable entry of the quick action select
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionOption {
    pub value: String,
    pub label: Option<String>,
}

impl ActionOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: Some(label.to_string()),
        }
    }

    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.value)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub locale: Locale,

    /// Fetch the counters once on startup
    #[serde(default = "default_true")]
    pub refresh_on_start: bool,

    /// Periodic stats refresh; unset keeps polling dormant
    #[serde(default)]
    pub stats_refresh_secs: Option<u64>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub session_cookie: Option<String>,

    #[serde(default = "default_actions")]
    pub actions: Vec<ActionOption>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            locale: Locale::default(),
            refresh_on_start: true,
            stats_refresh_secs: None,
            request_timeout_secs: None,
            session_cookie: None,
            actions: default_actions(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

/// Lead lifecycle transitions plus sending the intake form
fn default_actions() -> Vec<ActionOption> {
    vec![
        ActionOption::new("em_contato", "Marcar em contato"),
        ActionOption::new("convertido", "Marcar convertido"),
        ActionOption::new("perdido", "Marcar perdido"),
        ActionOption::new("enviar_formulario", "Enviar formulário"),
    ]
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    pub fn stats_refresh_interval(&self) -> Option<Duration> {
        self.stats_refresh_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: normalize_http_endpoint(&self.base_url),
            timeout: self
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            session_cookie: self
                .session_cookie
                .clone()
                .filter(|value| !value.trim().is_empty()),
        }
    }
}

/// Load the config from `path` or the default location. A missing file
/// yields defaults; a malformed one is logged and also yields defaults.
pub fn load(path: Option<&Path>) -> Config {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no config file, using defaults");
            return Config::default();
        }
    };
    match Config::parse(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("LEADDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("leaddash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("leaddash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "leaddash", "leaddash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("leaddash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("leaddash"));
    }
    directories::ProjectDirs::from("io", "leaddash", "leaddash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> PathBuf {
    data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("leaddash.log")
}

pub fn normalize_http_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
