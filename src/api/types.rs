//! JIRA API request and response types.
//!
//! These types model the JIRA REST API v2 payloads for issues, search results
//! and issue creation. Only a representative subset of the issue fields is
//! modeled; everything else the service sends is ignored.
//!
//! Absent attributes are `None` rather than empty strings, and absent
//! attributes are left out when serializing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A JIRA issue.
///
/// Returned by `GET /rest/api/2/issue/{issueKey}`, as part of search results,
/// and (as a stub without fields) by `POST /rest/api/2/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    pub id: String,
    /// The issue key (e.g., "PROJ-123").
    pub key: String,
    /// REST URL of the issue.
    #[serde(rename = "self")]
    pub self_url: String,
    /// Which optional parts the service can expand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    /// The issue fields. Absent on creation stubs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields>,
}

impl Issue {
    /// Get the issue summary, if set.
    pub fn summary(&self) -> Option<&str> {
        self.fields.as_ref()?.summary.as_deref()
    }

    /// Get the issue type name, if set.
    pub fn issue_type(&self) -> Option<&str> {
        self.fields.as_ref()?.issue_type.as_ref()?.name.as_deref()
    }

    /// Get the issue priority name, if set.
    pub fn priority(&self) -> Option<&str> {
        self.fields.as_ref()?.priority.as_ref()?.name.as_deref()
    }

    /// Get the assignee display name, if assigned.
    pub fn assignee(&self) -> Option<&str> {
        self.fields.as_ref()?.assignee.as_ref()?.display_name.as_deref()
    }

    /// Get the reporter display name, if set.
    pub fn reporter(&self) -> Option<&str> {
        self.fields.as_ref()?.reporter.as_ref()?.display_name.as_deref()
    }

    /// Get the project key, if available.
    pub fn project_key(&self) -> Option<&str> {
        self.fields.as_ref()?.project.as_ref()?.key.as_deref()
    }

    /// Labels attached to the issue, in service order.
    pub fn labels(&self) -> &[String] {
        self.fields
            .as_ref()
            .map(|f| f.labels.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary() {
            Some(summary) => write!(f, "{}: {}", self.key, summary),
            None => write!(f, "{}", self.key),
        }
    }
}

/// Issue fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    /// The issue type (Bug, Story, Task, etc.).
    #[serde(
        default,
        rename = "issuetype",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_type: Option<IssueType>,
    /// The issue summary/title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The issue description (wiki markup in API v2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The issue reporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,
    /// The issue assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    /// The project this issue belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    /// When the issue was created, as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// The user who created the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    /// Labels attached to the issue.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,
    /// The issue priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Issue type (Bug, Story, Task, Epic, etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    /// REST URL of the issue type.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The issue type ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The issue type description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL to the issue type icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// The issue type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether this is a subtask type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<bool>,
}

impl IssueType {
    /// Reference an issue type by name, as issue creation expects.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}

/// A JIRA user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// REST URL of the user.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The user's email address (may be hidden).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// URLs for the user's avatar images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
    /// The user's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the user is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl User {
    /// Reference a user by username.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default();
        write!(f, "{}", name)
    }
}

/// A JIRA project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// REST URL of the project.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The project ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The project key (e.g., "PROJ").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The project name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URLs for the project's avatar images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
}

impl Project {
    /// Reference a project by key, as issue creation expects.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .key
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default();
        write!(f, "{}", name)
    }
}

/// Issue priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    /// REST URL of the priority.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The priority ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The priority name (e.g., "Blocker", "Major", "Minor").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL to the priority icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Priority {
    /// Reference a priority by name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}

/// Avatar URLs for a user or project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrls {
    /// 48x48 pixel avatar.
    #[serde(default, rename = "48x48", skip_serializing_if = "Option::is_none")]
    pub size_48: Option<String>,
    /// 24x24 pixel avatar.
    #[serde(default, rename = "24x24", skip_serializing_if = "Option::is_none")]
    pub size_24: Option<String>,
    /// 16x16 pixel avatar.
    #[serde(default, rename = "16x16", skip_serializing_if = "Option::is_none")]
    pub size_16: Option<String>,
    /// 32x32 pixel avatar.
    #[serde(default, rename = "32x32", skip_serializing_if = "Option::is_none")]
    pub size_32: Option<String>,
}

/// Search result from a JQL query.
///
/// Returned by `GET /rest/api/2/search`. Issues keep the order the service
/// returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueList {
    /// Which optional parts the service can expand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    /// The index of the first result.
    pub start_at: u32,
    /// Maximum results per page.
    pub max_results: u32,
    /// Total number of matching issues.
    pub total: u32,
    /// The issues on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl IssueList {
    /// Check if the service holds more matches than this page returned.
    pub fn has_more(&self) -> bool {
        // Counts come from the service; widen so a bogus page cannot overflow.
        u64::from(self.start_at) + (self.issues.len() as u64) < u64::from(self.total)
    }
}

/// Payload for `POST /rest/api/2/issue`.
///
/// The service assigns the ID, key and REST URL, so only the fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    /// Fields of the issue to create. Unset fields are not sent.
    pub fields: IssueFields,
}

impl NewIssue {
    /// Start an issue in `project_key` of type `issue_type`.
    pub fn new(project_key: &str, issue_type: &str, summary: &str) -> Self {
        Self {
            fields: IssueFields {
                project: Some(Project::with_key(project_key)),
                issue_type: Some(IssueType::named(issue_type)),
                summary: Some(summary.to_string()),
                ..IssueFields::default()
            },
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.fields.description = Some(description.to_string());
        self
    }

    /// Set the priority by name.
    pub fn with_priority(mut self, priority: &str) -> Self {
        self.fields.priority = Some(Priority::named(priority));
        self
    }

    /// Set the assignee by username.
    pub fn with_assignee(mut self, username: &str) -> Self {
        self.fields.assignee = Some(User::named(username));
        self
    }

    /// Replace the labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Treat an explicit `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
