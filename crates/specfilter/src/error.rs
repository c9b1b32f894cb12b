use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecFilterError {
    #[error("Invalid color: {0} (expected red, green or blue)")]
    InvalidColor(String),

    #[error("Invalid size: {0} (expected small, medium or large)")]
    InvalidSize(String),

    #[error("Invalid output format: {0} (expected text or json)")]
    InvalidOutputFormat(String),

    #[error("Product name must not be empty")]
    EmptyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, SpecFilterError>;
