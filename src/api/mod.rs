//! JIRA API client and types.
//!
//! This module provides the interface for communicating with the JIRA REST API.

mod auth;
mod client;
pub mod error;
mod response;
mod transport;
pub mod types;

pub use auth::Auth;
pub use client::{JiraClient, API_VERSION};
pub use error::{ApiError, ServiceError, TransportError};
pub use response::{classify, interpret, Classification};
pub use transport::Transport;
pub use types::{AvatarUrls, Issue, IssueFields, IssueList, IssueType, NewIssue, Priority, Project, User};
