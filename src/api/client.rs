//! JIRA API client implementation.
//!
//! This module provides the blocking client for the JIRA REST API v2. Each
//! operation builds an authenticated request, hands it to a [`Transport`],
//! and interprets the returned body. Nothing is retried or cached.

use std::time::Duration;

use reqwest::blocking::{Body, Client, Request};
use reqwest::header::{self, HeaderValue};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::response;
use super::transport::Transport;
use super::types::{Issue, IssueList, NewIssue};
use crate::config::Profile;

/// Version segment of the REST path prefix.
pub const API_VERSION: &str = "2";

/// The JIRA API client.
///
/// Holds the base URL, the encoded credentials and a transport. Nothing is
/// mutated after construction, so a client can serve concurrent calls from
/// several threads whenever its transport is `Sync`.
#[derive(Debug)]
pub struct JiraClient<T = Client> {
    /// Executes requests.
    transport: T,
    /// The base URL for the JIRA instance, without a trailing slash.
    base_url: String,
    /// Authentication credentials.
    auth: Auth,
}

impl JiraClient<Client> {
    /// Create a client backed by a default `reqwest` blocking client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn with_credentials(base_url: &str, username: &str, token: &str) -> Result<Self> {
        let client = build_http_client(None)?;
        Ok(Self::with_transport(base_url, username, token, client))
    }

    /// Create a client from a connection profile.
    ///
    /// The profile is validated first; its timeout, if any, is applied to the
    /// underlying HTTP client.
    pub fn from_config(profile: &Profile, token: &str) -> crate::Result<Self> {
        profile.validate()?;

        let timeout = profile.timeout_secs.map(Duration::from_secs);
        let client = build_http_client(timeout)?;
        Ok(Self::with_transport(
            &profile.url,
            &profile.username,
            token,
            client,
        ))
    }
}

impl<T: Transport> JiraClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(base_url: &str, username: &str, token: &str, transport: T) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
            auth: Auth::new(username, token),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a single issue by key.
    ///
    /// # Arguments
    ///
    /// * `key` - The issue key (e.g., "PROJ-123")
    #[instrument(skip(self), fields(issue_key = %key))]
    pub fn get_issue(&self, key: &str) -> Result<Issue> {
        let path = format!("issue/{}", urlencoding::encode(key));
        let request = self.build_request(Method::GET, &path, None)?;

        let issue: Issue = self.send(request)?;
        debug!("Fetched issue: {}", issue.key);
        Ok(issue)
    }

    /// Search for issues using JQL.
    ///
    /// Returns whatever single page the service answers with.
    #[instrument(skip(self), fields(jql = %jql))]
    pub fn search_issues(&self, jql: &str) -> Result<IssueList> {
        let path = format!("search?jql={}", urlencoding::encode(jql));
        let request = self.build_request(Method::GET, &path, None)?;

        let result: IssueList = self.send(request)?;
        debug!(
            "Found {} issues (total: {})",
            result.issues.len(),
            result.total
        );
        Ok(result)
    }

    /// Create an issue.
    ///
    /// The returned issue is the stub JIRA answers with: ID, key and REST URL
    /// are set, the fields are not echoed back.
    #[instrument(skip(self, issue))]
    pub fn create_issue(&self, issue: &NewIssue) -> Result<Issue> {
        let body = serde_json::to_vec(issue)
            .map_err(|e| ApiError::Construction(format!("Failed to serialize issue: {}", e)))?;
        let request = self.build_request(Method::POST, "issue", Some(body))?;

        let created: Issue = self.send(request)?;
        debug!("Created issue: {}", created.key);
        Ok(created)
    }

    /// Build an authenticated request for `path`, relative to the REST prefix.
    ///
    /// Does no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Construction`] if the composed URL is not a valid
    /// HTTP(S) request target or the credentials cannot form a header.
    pub fn build_request(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Request> {
        let url = self.build_url(path)?;
        debug!("Building {} request for {}", method, url);

        let mut request = Request::new(method, url);

        let mut auth = HeaderValue::from_str(self.auth.header_value())
            .map_err(|e| ApiError::Construction(format!("Invalid credentials: {}", e)))?;
        auth.set_sensitive(true);

        let headers = request.headers_mut();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }

    /// Compose `<base>/rest/api/<version>/<path>`.
    ///
    /// The base is checked on its own first, so a base without a host cannot
    /// borrow one from the joined path.
    fn build_url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            ApiError::Construction(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        match base.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Construction(format!(
                    "Unsupported URL scheme '{}' in '{}'",
                    scheme, self.base_url
                )))
            }
        }
        if base.cannot_be_a_base() || base.host_str().map_or(true, str::is_empty) {
            return Err(ApiError::Construction(format!(
                "Base URL '{}' has no host",
                self.base_url
            )));
        }

        let raw = format!("{}/rest/api/{}/{}", self.base_url, API_VERSION, path);
        Url::parse(&raw)
            .map_err(|e| ApiError::Construction(format!("Invalid URL '{}': {}", raw, e)))
    }

    /// Execute a request and interpret the body as `R`.
    fn send<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
        let body = self
            .transport
            .execute(request)
            .map_err(ApiError::Transport)?;
        response::interpret(&body)
    }
}

/// Build the HTTP client, applying an optional request timeout.
fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ApiError::transport)
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    // Warn if not HTTPS (but don't enforce for localhost/testing)
    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}
