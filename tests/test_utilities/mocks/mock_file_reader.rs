use std::path::Path;

use rl_jira::prelude::*;
use serde_json::{Map, Value};

/// Mock report/template source for testing
#[derive(Clone)]
pub struct MockFileReader {
    report: Value,
    template: Option<Map<String, Value>>,
    should_fail: bool,
}

impl MockFileReader {
    pub fn new(report: Value) -> Self {
        Self {
            report,
            template: None,
            should_fail: false,
        }
    }

    pub fn with_template(mut self, template: Value) -> Self {
        self.template = template.as_object().cloned();
        self
    }

    pub fn with_failure() -> Self {
        Self {
            report: Value::Null,
            template: None,
            should_fail: true,
        }
    }
}

impl ReportReader for MockFileReader {
    fn read_report(&self, _path: &Path) -> Result<Value> {
        if self.should_fail {
            anyhow::bail!("mock report read failure");
        }
        Ok(self.report.clone())
    }
}

impl TemplateReader for MockFileReader {
    fn read_template(&self, _path: &Path) -> Result<Map<String, Value>> {
        self.template
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock has no template"))
    }
}
