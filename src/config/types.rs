use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Build/runtime mode. Decides the store's debug flag and version suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// "development" or "production" (default).
    #[serde(default)]
    pub mode: Mode,
}

/// Settings for the recent-callers endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host of the API (e.g., "https://example.execute-api.us-east-1.amazonaws.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the recent-callers resource (default: "/dev/recent").
    #[serde(default = "default_recent_path")]
    pub recent_path: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
}

/// Terminal view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Fetch recent callers as soon as the view opens (default: true).
    #[serde(default = "default_fetch_on_start")]
    pub fetch_on_start: bool,
}

fn default_base_url() -> String {
    "https://omtuqhov52.execute-api.us-east-1.amazonaws.com".to_string()
}

fn default_recent_path() -> String {
    "/dev/recent".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_fetch_on_start() -> bool {
    true
}

impl ApiConfig {
    /// Full URL of the recent-callers resource.
    pub fn recent_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.recent_path
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recent_path: default_recent_path(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            fetch_on_start: default_fetch_on_start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_url_joins_without_double_slash() {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:9000/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(api.recent_url(), "http://127.0.0.1:9000/dev/recent");
    }

    #[test]
    fn mode_parses_lowercase() {
        let app: AppConfig = toml::from_str(r#"mode = "development""#).unwrap();
        assert!(app.mode.is_development());
    }
}
