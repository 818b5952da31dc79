//! JIRA connection profile.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// A JIRA connection profile.
///
/// ```toml
/// url = "https://company.atlassian.net"
/// username = "user@company.com"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// The JIRA instance URL.
    ///
    /// Should be an HTTPS URL (e.g., "https://company.atlassian.net").
    pub url: String,

    /// The username or account email used for Basic authentication.
    pub username: String,

    /// Request timeout applied to the HTTP client. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Create a new profile without a timeout.
    pub fn new(url: String, username: String) -> Self {
        Self {
            url,
            username,
            timeout_secs: None,
        }
    }

    /// Parse a profile from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile from a TOML file.
    ///
    /// The profile is parsed but not validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate this profile.
    ///
    /// Checks that:
    /// - The URL is non-empty and uses http:// or https://
    /// - The username is non-empty
    /// - The timeout, if set, is non-zero
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "URL '{}' must start with http:// or https://",
                self.url
            )));
        }

        if self.username.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "username cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn work_profile() -> Profile {
        Profile::new(
            "https://company.atlassian.net".to_string(),
            "user@company.com".to_string(),
        )
    }

    #[test]
    fn test_valid_profile() {
        assert!(work_profile().validate().is_ok());
    }

    #[test]
    fn test_http_url_accepted() {
        let profile = Profile::new("http://localhost:8080".to_string(), "admin".to_string());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let profile = Profile {
            url: String::new(),
            ..work_profile()
        };

        let result = profile.validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("URL cannot be empty"));
    }

    #[test]
    fn test_invalid_url_scheme_rejected() {
        let profile = Profile {
            url: "company.atlassian.net".to_string(),
            ..work_profile()
        };

        let result = profile.validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must start with http"));
    }

    #[test]
    fn test_empty_username_rejected() {
        let profile = Profile {
            username: "  ".to_string(),
            ..work_profile()
        };

        let result = profile.validate();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("username cannot be empty"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let profile = Profile {
            timeout_secs: Some(0),
            ..work_profile()
        };

        assert!(matches!(
            profile.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let profile = Profile::from_toml_str(
            r#"
            url = "https://company.atlassian.net"
            username = "user@company.com"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(profile.url, "https://company.atlassian.net");
        assert_eq!(profile.username, "user@company.com");
        assert_eq!(profile.timeout_secs, Some(30));
    }

    #[test]
    fn test_from_toml_str_missing_username() {
        let result = Profile::from_toml_str(r#"url = "https://company.atlassian.net""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"url = "https://jira.example.com/""#).unwrap();
        writeln!(file, r#"username = "admin""#).unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.url, "https://jira.example.com/");
        assert_eq!(profile.username, "admin");
        assert!(profile.timeout_secs.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Profile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_profile_serialization() {
        let profile = work_profile();

        let toml_str = toml::to_string(&profile).unwrap();
        assert!(!toml_str.contains("timeout_secs"));

        let parsed: Profile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, profile);
    }
}
