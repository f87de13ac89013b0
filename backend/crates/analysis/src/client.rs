use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use slant_config::ollama::{OllamaConfig, RETRY_STATUSES};
use tokio::sync::Semaphore;

/// Longest `Retry-After` we are willing to honour.
const MAX_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Client for a local Ollama `generate` endpoint.
///
/// Calls queue on a semaphore sized to the connection pool, so with the
/// default pool of one the backend never sees more than one request at a time.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
    slots: Arc<Semaphore>,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_size)
            .build()?;
        let slots = Arc::new(Semaphore::new(config.pool_size));
        Ok(Self {
            client,
            config,
            slots,
        })
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Request a single non-streamed completion and return the model's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        // The semaphore is owned here and never closed.
        let _slot = self
            .slots
            .acquire()
            .await
            .expect("connection slots are never closed");

        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };
        let reply: GenerateResponse = self.post_with_retry(&body).await?;
        Ok(reply.response)
    }

    async fn post_with_retry(
        &self,
        body: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, ClientError> {
        let mut last_error = String::new();
        let mut retry_after: Option<Duration> = None;

        for attempt in 0..self.config.attempts() {
            if attempt > 0 {
                let wait = retry_after
                    .take()
                    .unwrap_or_else(|| self.config.backoff_for(attempt));
                tracing::warn!(attempt, wait_ms = wait.as_millis() as u64, %last_error, "retrying generate");
                tokio::time::sleep(wait).await;
            }

            let response = match self.client.post(&self.config.url).json(body).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    last_error = e.to_string();
                    // is_request: the connection dropped before any response arrived.
                    if e.is_timeout() || e.is_connect() || e.is_request() {
                        continue;
                    }
                    return Err(ClientError::RequestError(e));
                }
            };

            let status = response.status();

            if status.is_success() {
                return response
                    .json::<GenerateResponse>()
                    .await
                    .map_err(ClientError::RequestError);
            }

            if is_retryable(status) {
                if matches!(
                    status,
                    StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
                ) {
                    retry_after = parse_retry_after(response.headers());
                }
                let body = response.text().await.unwrap_or_default();
                last_error = format!("{status}: {body}");
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpError { status, body });
        }

        Err(ClientError::MaxRetriesExceeded {
            attempts: self.config.attempts(),
            last_error,
        })
    }
}

fn is_retryable(status: StatusCode) -> bool {
    RETRY_STATUSES.contains(&status.as_u16())
}

fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs.min(MAX_RETRY_AFTER_SECS)))
}
