use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlantError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type SlantResult<T> = Result<T, SlantError>;
