//! A blocking client library for the JIRA REST API.
//!
//! Supports fetching an issue by key, searching with JQL and creating issues.
//! Every response body is checked against JIRA's error envelope before it is
//! decoded, because the service does not use HTTP status codes reliably.
//!
//! ```no_run
//! use jira_rest::{JiraClient, NewIssue};
//!
//! # fn main() -> Result<(), jira_rest::ApiError> {
//! let client = JiraClient::with_credentials("https://jira.example.com", "user", "token")?;
//!
//! let issue = client.get_issue("PROJ-1")?;
//! println!("{}", issue);
//!
//! let open = client.search_issues("project = PROJ AND resolution = Unresolved")?;
//! println!("{} open issues", open.total);
//!
//! let created = client.create_issue(&NewIssue::new("PROJ", "Bug", "Login fails"))?;
//! println!("created {}", created.key);
//! # Ok(())
//! # }
//! ```
//!
//! The library emits `tracing` events but never installs a subscriber.

pub mod api;
pub mod config;
mod error;

pub use api::{
    classify, interpret, ApiError, Auth, AvatarUrls, Classification, Issue, IssueFields, IssueList,
    IssueType, JiraClient, NewIssue, Priority, Project, ServiceError, Transport, TransportError, User,
    API_VERSION,
};
pub use config::{ConfigError, Profile};
pub use error::{Error, Result};
