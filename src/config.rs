//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TYPST_BIN: &str = "typst";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

/// Runtime configuration read once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bot API token. The server starts without it, but the webhook refuses updates.
    pub bot_token: Option<String>,
    pub webhook_secret: Option<String>,
    /// Public origin used in verification links, without a trailing slash.
    pub base_url: String,
    /// Free-text line printed on every generated document.
    pub admin_info: Option<String>,
    pub bind_address: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub typst_bin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let static_dir = non_empty_var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);

        Ok(Self {
            bot_token: non_empty_var("TELEGRAM_BOT_TOKEN"),
            webhook_secret: non_empty_var("TELEGRAM_WEBHOOK_SECRET"),
            base_url: normalize_base_url(non_empty_var("APP_BASE_URL").as_deref()),
            admin_info: non_empty_var("ADMIN_INFO"),
            bind_address: non_empty_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            static_dir,
            typst_bin: non_empty_var("TYPST_BIN").unwrap_or_else(|| DEFAULT_TYPST_BIN.to_string()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            webhook_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            admin_info: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
            typst_bin: DEFAULT_TYPST_BIN.to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

pub fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(|value| value.trim().trim_end_matches('/')) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
