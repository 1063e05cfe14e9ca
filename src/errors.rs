// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoursegateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The raw catalog does not have the shape the normalizer accepts.
    /// The whole load is rejected; nothing is partially normalized.
    #[error("Catalog shape error: {0}")]
    DataShape(String),

    /// The catalog could not be retrieved or parsed at all.
    #[error("Catalog unavailable: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CoursegateError>;
