use crate::models::Finding;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("reply is not a JSON array and holds no bracketed span: {0}")]
    NotAnArray(serde_json::Error),

    #[error("bracketed span is not a JSON array: {0}")]
    Salvage(serde_json::Error),
}

/// Parse a model reply into findings.
///
/// A strict parse of the trimmed reply is tried first. If that fails, the
/// span from the first `[` to the last `]` is parsed instead, which recovers
/// arrays wrapped in prose.
pub fn parse_findings(raw: &str) -> Result<Vec<Finding>, ParseError> {
    let trimmed = raw.trim();

    let strict_err = match serde_json::from_str::<Vec<Finding>>(trimmed) {
        Ok(findings) => return Ok(findings),
        Err(e) => e,
    };
    tracing::debug!(error = %strict_err, "strict parse failed, trying bracketed span");

    let span = bracketed_span(trimmed).ok_or(ParseError::NotAnArray(strict_err))?;
    serde_json::from_str(span).map_err(|e| {
        tracing::warn!(error = %e, span_len = span.len(), "salvage parse of bracketed span failed");
        ParseError::Salvage(e)
    })
}

fn bracketed_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}
