use async_trait::async_trait;

use crate::client::{ClientError, OllamaClient};
use crate::models::Finding;
use crate::parse::{parse_findings, ParseError};
use crate::prompt::build_prompt;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("backend call failed: {0}")]
    Transport(#[from] ClientError),

    #[error("unusable model reply: {0}")]
    Parse(#[from] ParseError),
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Vec<Finding>, AnalysisError>;
}

/// Finds biased spans by asking a local model and parsing its JSON reply.
pub struct OllamaAnalyzer {
    client: OllamaClient,
}

impl OllamaAnalyzer {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Analyzer for OllamaAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Vec<Finding>, AnalysisError> {
        let prompt = build_prompt(text);
        let raw = self.client.generate(&prompt).await?;
        tracing::debug!(model = %self.client.config().model, raw = %raw, "model reply");

        let findings = parse_findings(&raw)?;
        tracing::debug!(count = findings.len(), "parsed findings");
        Ok(findings)
    }
}
