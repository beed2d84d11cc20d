//! Error types for configuration and calls to the external services.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a positive number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[cfg(feature = "server")]
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not signed in")]
    Unauthenticated,
    /// Signed in, but the backend refused this request for the current role.
    #[error("access denied")]
    Forbidden,
    #[error("unexpected status {0}")]
    Status(u16),
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("response carried no data")]
    MissingData,
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}
