//! Translation error types.

use thiserror::Error;

/// Failures raised by the native conversion capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NativeError {
    #[error("unknown legacy material: {0}")]
    UnknownMaterial(String),

    #[error("illegal legacy data {data} for {material}")]
    IllegalData { material: String, data: u8 },
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown modern block type: {0}")]
    UnknownModernType(String),

    #[error("native conversion failed: {0}")]
    Native(#[from] NativeError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
