//! Crate-level error type.
//!
//! Operations on a built client return [`ApiError`] directly. This type only
//! appears where configuration and client construction meet, e.g.
//! [`JiraClient::from_config`](crate::JiraClient::from_config).

use thiserror::Error;

use crate::api::error::ApiError;
use crate::config::ConfigError;

/// Either a configuration or an API failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
