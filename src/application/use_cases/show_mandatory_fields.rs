use std::fmt::Write;

use crate::ports::outbound::TrackerClient;
use crate::shared::Result;

/// Field ids the ticket pipeline populates on its own. Every other
/// mandatory field has to come from the issue template.
pub const KNOWN_FIELDS: &[&str] = &["summary", "issuetype", "reporter", "project"];

/// ShowMandatoryFieldsUseCase - Read-only tracker introspection
///
/// Renders the required, defaultless fields of the configured
/// project/issue-type pair so template authors can see what the tracker
/// will reject. Creates nothing.
pub struct ShowMandatoryFieldsUseCase<C: TrackerClient> {
    tracker: C,
}

impl<C: TrackerClient> ShowMandatoryFieldsUseCase<C> {
    pub fn new(tracker: C) -> Self {
        Self { tracker }
    }

    pub fn execute(&self, project: &str, issue_type_name: &str) -> Result<String> {
        let mut rendered = String::new();

        for issue_type in self.tracker.project_issue_types(project)? {
            if !issue_type.name.eq_ignore_ascii_case(issue_type_name) {
                continue;
            }

            writeln!(rendered, "{}:", issue_type.name)?;

            for field in self.tracker.project_issue_fields(project, &issue_type.id)? {
                if !field.required || field.has_default_value {
                    continue;
                }

                let verdict = if KNOWN_FIELDS.contains(&field.field_id.as_str()) {
                    "Known"
                } else {
                    "Unknown: This field must be added to the json template"
                };
                writeln!(rendered, "  {}: {}", field.name, verdict)?;
                writeln!(rendered, "    name: {}", field.name)?;
                writeln!(rendered, "    fieldId: {}", field.field_id)?;
                if !field.allowed_values.is_empty() {
                    writeln!(rendered, "    allowedValues:")?;
                    for value in &field.allowed_values {
                        writeln!(rendered, "       {}", value)?;
                    }
                }
            }
        }

        Ok(rendered)
    }
}
