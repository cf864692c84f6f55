use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::shared::{Result, TicketError};

/// Reference to an issue that exists on the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub id: String,
    pub key: String,
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// One issue type configured for a project.
#[derive(Debug, Clone)]
pub struct IssueTypeMeta {
    pub id: String,
    pub name: String,
}

/// Field definition for a project/issue-type pair.
#[derive(Debug, Clone)]
pub struct FieldMeta {
    pub field_id: String,
    pub name: String,
    pub required: bool,
    pub has_default_value: bool,
    /// Allowed-values enumeration, each rendered by its string form.
    pub allowed_values: Vec<String>,
}

/// TrackerClient port for the remote issue tracker.
///
/// Every call is a blocking round trip; failures surface as
/// `TicketError::TrackerRequest` and are not retried.
pub trait TrackerClient {
    /// Creates an issue from the final field set and returns its reference.
    fn create_issue(&self, fields: &Value) -> Result<IssueRef>;

    /// Uploads in-memory content as a named attachment on an issue.
    fn add_attachment(&self, issue: &IssueRef, file_name: &str, content: &[u8]) -> Result<()>;

    /// Uploads a local file as an attachment on an issue.
    fn attach_file(&self, issue: &IssueRef, path: &Path) -> Result<()> {
        let content = std::fs::read(path).map_err(|e| TicketError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.add_attachment(issue, &file_name, &content)
    }

    /// Searches existing issues with a conjunctive JQL filter.
    fn search_issues(&self, jql: &str) -> Result<Vec<IssueRef>>;

    /// Lists the issue types configured for a project.
    fn project_issue_types(&self, project: &str) -> Result<Vec<IssueTypeMeta>>;

    /// Lists the field definitions for a project/issue-type pair.
    fn project_issue_fields(&self, project: &str, issue_type_id: &str) -> Result<Vec<FieldMeta>>;
}
