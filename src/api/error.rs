//! API error types for the JIRA client.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::null_as_default;

/// Opaque error produced by a [`Transport`](super::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when interacting with the JIRA API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built from the client's inputs.
    #[error("Failed to build request: {0}")]
    Construction(String),

    /// The network call did not complete.
    #[error("Network error: {0}")]
    Transport(#[source] TransportError),

    /// JIRA answered with its error envelope.
    #[error("JIRA error: {0}")]
    Service(#[from] ServiceError),

    /// The response body did not match the expected payload.
    #[error("Invalid API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Wrap a transport failure.
    pub fn transport(err: impl Into<TransportError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// The service error envelope, if JIRA reported one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            ApiError::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// The error envelope JIRA returns instead of a success payload.
///
/// JIRA does not reliably signal failures through HTTP status codes, so this
/// shape is recognized from the body itself (see [`classify`](super::classify)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Free-form error messages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_messages: Vec<String>,
    /// Field name to message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: BTreeMap<String, String>,
}

impl ServiceError {
    /// True when the envelope carries neither messages nor field errors.
    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty() && self.errors.is_empty()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .error_messages
            .iter()
            .cloned()
            .chain(
                self.errors
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message)),
            )
            .collect();

        if parts.is_empty() {
            write!(f, "empty error envelope")
        } else {
            write!(f, "{}", parts.join("; "))
        }
    }
}

impl std::error::Error for ServiceError {}
