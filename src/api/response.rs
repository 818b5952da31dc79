//! Response interpretation.
//!
//! Every body is first checked against JIRA's error envelope and only then
//! decoded as the expected payload. A body is never interpreted as both.

use serde::de::DeserializeOwned;
use tracing::trace;

use super::error::{Result, ServiceError};

/// Outcome of checking a response body for JIRA's error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The body is an error envelope with at least one message.
    ServiceError(ServiceError),
    /// The body should be decoded as a success payload.
    NotAnError,
}

impl Classification {
    /// Whether the body was recognized as a service error.
    pub fn is_error(&self) -> bool {
        matches!(self, Classification::ServiceError(_))
    }
}

/// Check a raw response body for JIRA's error envelope.
///
/// Bodies that do not decode into the envelope, and envelopes with neither
/// messages nor field errors, are not errors.
pub fn classify(body: &[u8]) -> Classification {
    match serde_json::from_slice::<ServiceError>(body) {
        Ok(envelope) if !envelope.is_empty() => {
            trace!(
                messages = envelope.error_messages.len(),
                field_errors = envelope.errors.len(),
                "Body is a service error envelope"
            );
            Classification::ServiceError(envelope)
        }
        Ok(_) => {
            trace!("Body decodes as an empty error envelope");
            Classification::NotAnError
        }
        Err(e) => {
            trace!("Body is not an error envelope: {}", e);
            Classification::NotAnError
        }
    }
}

/// Classify a body and, if it is not a service error, decode it as `T`.
///
/// A failed classification decode is discarded: when the success decode
/// fails too, its error is the one returned.
pub fn interpret<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if let Classification::ServiceError(envelope) = classify(body) {
        return Err(envelope.into());
    }
    Ok(serde_json::from_slice(body)?)
}
