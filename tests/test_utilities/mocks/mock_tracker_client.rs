use std::cell::RefCell;
use std::rc::Rc;

use rl_jira::prelude::*;
use serde_json::Value;

#[derive(Default)]
struct TrackerState {
    created: Vec<Value>,
    attachments: Vec<(String, String, Vec<u8>)>,
    searches: Vec<String>,
}

/// Mock TrackerClient for testing
///
/// Records every call; clones share state so tests can inspect what the
/// use case did after handing the mock over.
#[derive(Clone, Default)]
pub struct MockTrackerClient {
    state: Rc<RefCell<TrackerState>>,
    existing_summaries: Vec<String>,
    issue_types: Vec<IssueTypeMeta>,
    fields: Vec<FieldMeta>,
    should_fail: bool,
}

impl MockTrackerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an issue summary that already exists on the tracker, so
    /// duplicate-guard searches against it find a match.
    pub fn with_existing_summary(mut self, summary: &str) -> Self {
        self.existing_summaries.push(summary.to_string());
        self
    }

    pub fn with_issue_types(mut self, issue_types: Vec<IssueTypeMeta>) -> Self {
        self.issue_types = issue_types;
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldMeta>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<Value> {
        self.state.borrow().created.clone()
    }

    /// (issue key, attachment name, content) triples in upload order.
    pub fn attachments(&self) -> Vec<(String, String, Vec<u8>)> {
        self.state.borrow().attachments.clone()
    }

    pub fn searches(&self) -> Vec<String> {
        self.state.borrow().searches.clone()
    }
}

impl TrackerClient for MockTrackerClient {
    fn create_issue(&self, fields: &Value) -> Result<IssueRef> {
        if self.should_fail {
            anyhow::bail!("mock tracker rejected the create call");
        }
        let mut state = self.state.borrow_mut();
        state.created.push(fields.clone());
        let n = state.created.len();
        Ok(IssueRef {
            id: format!("{}", 10000 + n),
            key: format!("SEC-{}", n),
        })
    }

    fn add_attachment(&self, issue: &IssueRef, file_name: &str, content: &[u8]) -> Result<()> {
        self.state.borrow_mut().attachments.push((
            issue.key.clone(),
            file_name.to_string(),
            content.to_vec(),
        ));
        Ok(())
    }

    fn search_issues(&self, jql: &str) -> Result<Vec<IssueRef>> {
        self.state.borrow_mut().searches.push(jql.to_string());

        // the guard's JQL is `summary ~ '<candidate>' AND project = '..'`;
        // an existing issue matches when its summary contains the candidate
        let candidate = jql
            .split("summary ~ '")
            .nth(1)
            .and_then(|rest| rest.split("' AND").next())
            .unwrap_or("");

        let matched = self
            .existing_summaries
            .iter()
            .any(|existing| existing.contains(candidate));
        if matched {
            return Ok(vec![IssueRef {
                id: "1".to_string(),
                key: "SEC-OLD".to_string(),
            }]);
        }
        Ok(vec![])
    }

    fn project_issue_types(&self, _project: &str) -> Result<Vec<IssueTypeMeta>> {
        Ok(self.issue_types.clone())
    }

    fn project_issue_fields(&self, _project: &str, _issue_type_id: &str) -> Result<Vec<FieldMeta>> {
        Ok(self.fields.clone())
    }
}
