use std::time::Duration;

use slant_common::error::{SlantError, SlantResult};

use crate::env::{get_var_or, parse_var_or};

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434/api/generate";
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// HTTP statuses that trigger a retry of a generate call.
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Settings for the inference backend connection.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Linear backoff unit: retry `n` waits `n * backoff`.
    pub backoff: Duration,
    /// Per-attempt deadline.
    pub timeout: Duration,
    /// Concurrent outbound calls, and idle connections kept per host.
    pub pool_size: usize,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OLLAMA_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            max_retries: 3,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(60),
            pool_size: 1,
        }
    }
}

impl OllamaConfig {
    pub fn from_env() -> SlantResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let pool_size = parse_var_or("OLLAMA_POOL_SIZE", defaults.pool_size)?;
        if pool_size == 0 {
            return Err(SlantError::Config(
                "OLLAMA_POOL_SIZE must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            url: get_var_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            model: get_var_or("OLLAMA_MODEL", DEFAULT_MODEL),
            max_retries: parse_var_or("OLLAMA_MAX_RETRIES", defaults.max_retries)?,
            backoff: Duration::from_secs(parse_var_or("OLLAMA_BACKOFF_SECS", 1)?),
            timeout: Duration::from_secs(parse_var_or("OLLAMA_TIMEOUT_SECS", 60)?),
            pool_size,
        })
    }

    /// Total attempts per call, the first plus retries.
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    pub fn backoff_for(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(retry)
    }
}
