//! Connection configuration.
//!
//! A [`Profile`] holds the settings a host needs to build a
//! [`JiraClient`](crate::JiraClient): the instance URL, the username and an
//! optional request timeout. Tokens are never part of a profile; the host
//! supplies them when building the client.

mod profile;

use std::path::PathBuf;

use thiserror::Error;

pub use profile::Profile;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for a profile.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
