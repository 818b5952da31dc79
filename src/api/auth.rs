//! Authentication handling for the JIRA API.
//!
//! JIRA accepts HTTP Basic authentication with a username (or account email)
//! and a password or API token. The credentials are encoded once, when the
//! client is built, and attached to every request.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Authentication credentials for JIRA.
#[derive(Clone)]
pub struct Auth {
    /// The username or account email.
    username: String,
    /// The complete `Basic ...` authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from a username and token.
    ///
    /// The token is immediately encoded and the raw token is not stored.
    pub fn new(username: &str, token: &str) -> Self {
        Self {
            username: username.to_string(),
            auth_header: build_auth_header(username, token),
        }
    }

    /// Get the authorization header value for HTTP requests.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "username:token" in Base64 and prepends "Basic ".
fn build_auth_header(username: &str, token: &str) -> String {
    let credentials = format!("{}:{}", username, token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}
