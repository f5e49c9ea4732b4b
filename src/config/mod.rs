mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Reads the process configuration from the environment. Called once at
/// startup; the resulting `Config` is immutable for the process lifetime.
pub fn load() -> Result<Config> {
    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| Error::config("GEMINI_API_KEY environment variable not set"))?;

    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{raw}'")))?,
        Err(_) => default_port(),
    };

    debug!("Configuration loaded from environment");

    Ok(Config {
        gemini: GeminiConfig {
            api_key,
            base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| default_base_url()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model()),
            timeout: UPSTREAM_TIMEOUT,
        },
        server: ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir()),
            logs: LogsConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            },
        },
    })
}
