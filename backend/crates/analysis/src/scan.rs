use std::sync::Arc;

use crate::analyzer::Analyzer;
use crate::cache::{fingerprint, ResultCache};
use crate::models::Finding;

/// Scans text for bias, memoizing results per exact input.
///
/// This is the one place analysis errors are collapsed: a failed analysis
/// yields an empty result, which callers cannot tell apart from "no bias".
/// Failed analyses are cached like any other result. The cache is not locked
/// across the analyzer call, so concurrent misses on the same text each
/// analyze and the last write wins.
pub struct ScanService {
    analyzer: Arc<dyn Analyzer>,
    cache: ResultCache,
}

impl ScanService {
    pub fn new(analyzer: Arc<dyn Analyzer>, cache: ResultCache) -> Self {
        Self { analyzer, cache }
    }

    pub async fn handle(&self, raw_text: &str) -> Vec<Finding> {
        if raw_text.trim().is_empty() {
            return Vec::new();
        }

        let key = fingerprint(raw_text);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(fingerprint = %key, "cache hit");
            return cached;
        }
        tracing::debug!(fingerprint = %key, "cache miss");

        let findings = match self.analyzer.analyze(raw_text).await {
            Ok(findings) => findings,
            Err(e) => {
                tracing::warn!(fingerprint = %key, error = %e, "analysis failed, returning no findings");
                Vec::new()
            }
        };

        self.cache.put(key, findings.clone());
        findings
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisError;
    use crate::client::ClientError;
    use crate::models::BiasType;
    use crate::parse::parse_findings;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Raw(&'static str),
        Slow(&'static str),
        Unreachable,
    }

    struct MockAnalyzer {
        reply: Reply,
        calls: Mutex<Vec<String>>,
    }

    impl MockAnalyzer {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Analyzer for MockAnalyzer {
        async fn analyze(&self, text: &str) -> Result<Vec<Finding>, AnalysisError> {
            self.calls.lock().unwrap().push(text.to_string());
            match &self.reply {
                Reply::Raw(raw) => Ok(parse_findings(raw)?),
                Reply::Slow(raw) => {
                    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                    Ok(parse_findings(raw)?)
                }
                Reply::Unreachable => Err(AnalysisError::Transport(
                    ClientError::MaxRetriesExceeded {
                        attempts: 4,
                        last_error: "connection refused".to_string(),
                    },
                )),
            }
        }
    }

    const TERRIBLE: &str = r#"[{"text":"terrible","severity":0.6,"type":"emotional","reason":"loaded adjective","suggestion":"ineffective"}]"#;

    fn service(analyzer: &Arc<MockAnalyzer>) -> ScanService {
        ScanService::new(analyzer.clone(), ResultCache::in_memory())
    }

    #[tokio::test]
    async fn blank_input_skips_cache_and_backend() {
        let analyzer = MockAnalyzer::new(Reply::Raw(TERRIBLE));
        let svc = service(&analyzer);

        for text in ["", "   ", "\n\t  \r\n"] {
            assert!(svc.handle(text).await.is_empty());
        }
        assert_eq!(analyzer.call_count(), 0);
        assert_eq!(svc.cached_entries(), 0);
    }

    #[tokio::test]
    async fn end_to_end_example_is_returned_and_cached() {
        let analyzer = MockAnalyzer::new(Reply::Raw(TERRIBLE));
        let svc = service(&analyzer);
        let text = "This politician is terrible and should be fired immediately.";

        let findings = svc.handle(text).await;
        assert_eq!(
            findings,
            vec![Finding::new(
                "terrible",
                0.6,
                BiasType::Emotional,
                "loaded adjective",
                "ineffective"
            )]
        );
        assert_eq!(svc.cache.get(&fingerprint(text)), Some(findings));
    }

    #[tokio::test]
    async fn second_call_is_cache_hit() {
        let analyzer = MockAnalyzer::new(Reply::Raw(TERRIBLE));
        let svc = service(&analyzer);

        let first = svc.handle("Some text").await;
        let second = svc.handle("Some text").await;

        assert_eq!(first, second);
        assert_eq!(analyzer.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_array_reply_is_cached() {
        let analyzer = MockAnalyzer::new(Reply::Raw("[]"));
        let svc = service(&analyzer);

        assert!(svc.handle("Neutral statement.").await.is_empty());
        assert!(svc.handle("Neutral statement.").await.is_empty());
        assert_eq!(analyzer.call_count(), 1);
        assert_eq!(svc.cached_entries(), 1);
    }

    #[tokio::test]
    async fn unreachable_backend_yields_empty_result() {
        let analyzer = MockAnalyzer::new(Reply::Unreachable);
        let svc = service(&analyzer);

        assert!(svc.handle("Some text").await.is_empty());
        assert!(svc.handle("Some text").await.is_empty());
        assert_eq!(analyzer.call_count(), 1);
    }

    #[tokio::test]
    async fn unparsable_reply_yields_empty_result() {
        let analyzer = MockAnalyzer::new(Reply::Raw("No JSON today."));
        let svc = service(&analyzer);

        assert!(svc.handle("Some text").await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_misses_on_same_text_both_analyze() {
        let analyzer = MockAnalyzer::new(Reply::Slow(TERRIBLE));
        let svc = service(&analyzer);

        let (a, b) = tokio::join!(svc.handle("Same text"), svc.handle("Same text"));

        assert_eq!(a, b);
        assert_eq!(analyzer.call_count(), 2);
        assert_eq!(svc.cached_entries(), 1);

        svc.handle("Same text").await;
        assert_eq!(analyzer.call_count(), 2);
    }

    #[tokio::test]
    async fn fingerprint_uses_untrimmed_text() {
        let analyzer = MockAnalyzer::new(Reply::Raw(TERRIBLE));
        let svc = service(&analyzer);

        svc.handle("Some text").await;
        svc.handle("  Some text  ").await;

        assert_eq!(analyzer.call_count(), 2);
        assert_eq!(svc.cached_entries(), 2);
        assert_eq!(
            analyzer.calls.lock().unwrap().as_slice(),
            ["Some text", "  Some text  "]
        );
    }
}
