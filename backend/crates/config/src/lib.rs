pub mod env;
pub mod ollama;
pub mod tracing_init;

pub use env::AppConfig;
pub use ollama::OllamaConfig;
pub use tracing_init::init_tracing;
