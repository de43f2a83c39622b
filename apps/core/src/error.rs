use std::io;
use thiserror::Error;

/// Application-wide error type for startup and the server run loop.
///
/// The analysis/synthesis pipeline is fail-soft and never produces an
/// error: the service converts feed failures to fallback data and the web
/// layer maps validation problems straight to HTTP statuses. Only
/// configuration and server I/O surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}
