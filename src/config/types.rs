use std::time::Duration;

/// Time budget for one upstream call. Fixed; no retries follow it.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(super) fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

pub(super) fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

pub(super) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_port() -> u16 {
    5000
}

pub(super) fn default_static_dir() -> String {
    "static".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
