use slant_common::error::{SlantError, SlantResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Directory served under `/static`; `index.html` inside it backs `/`.
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every var has a default.
    pub fn from_env() -> SlantResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port: parse_var_or("PORT", 8000)?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            static_dir: PathBuf::from(get_var_or("STATIC_DIR", ".")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

pub(crate) fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse `key` if set, otherwise return `default`. A value that is set but
/// unparsable is a config error rather than a silent fallback.
pub(crate) fn parse_var_or<T>(key: &str, default: T) -> SlantResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| SlantError::Config(format!("invalid {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
