pub mod analyzer;
pub mod cache;
pub mod client;
pub mod models;
pub mod parse;
pub mod prompt;
pub mod scan;

pub use analyzer::{AnalysisError, Analyzer, OllamaAnalyzer};
pub use cache::{fingerprint, CacheStore, MemoryStore, ResultCache};
pub use client::{ClientError, OllamaClient};
pub use models::{BiasType, Finding};
pub use parse::{parse_findings, ParseError};
pub use scan::ScanService;
