//! Crate-level error type
//!
//! [`Error`] covers start-up and infrastructure failures: loading
//! configuration, binding the listener, installing the subscriber. Resource
//! handler outcomes use [`crate::handlers::ApiError`] instead, so nothing
//! here is rendered as an HTTP response.

use thiserror::Error;

/// Crate-level error type
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
