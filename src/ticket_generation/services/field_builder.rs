use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::shared::Result;
use crate::ticket_generation::domain::report::{ScanReport, Violation};
use crate::ticket_generation::domain::ticket::{AttachmentPayload, TicketFields};
use crate::ticket_generation::policies::{category_doc_url, shape_payload, ShapedPayload};

/// Attachment names for payloads redirected by the size limit.
pub const VIOLATIONS_ATTACHMENT: &str = "upload_violations.json";
pub const COMPONENTS_ATTACHMENT: &str = "upload_components.json";

/// Bucket used when a violation carries no category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Builds the summary/description field set for one ticket, per violation
/// or aggregated over the whole report.
pub struct FieldBuilder<'a> {
    report: &'a ScanReport,
    include_violations_pass: bool,
}

impl<'a> FieldBuilder<'a> {
    pub fn new(report: &'a ScanReport, include_violations_pass: bool) -> Self {
        Self {
            report,
            include_violations_pass,
        }
    }

    /// Resolves referenced component keys into full component records.
    /// A key missing from the component map is preserved as an explicit
    /// null entry, not silently dropped.
    fn resolve_components(&self, refs: &[String], into: &mut Map<String, Value>) {
        for key in refs {
            into.insert(
                key.clone(),
                self.report.component(key).cloned().unwrap_or(Value::Null),
            );
        }
    }

    /// Field set for a single violation.
    pub fn build_single_ticket_fields(&self, violation: &Violation) -> Result<TicketFields> {
        let mut components = Map::new();
        self.resolve_components(&violation.component_refs, &mut components);

        let category = violation.category.as_deref().unwrap_or(UNCATEGORIZED);
        let category_url = category_doc_url(category)
            .map(|url| format!(": {}", url))
            .unwrap_or_default();

        let summary = format!(
            "RL: {} - {} File: {}",
            violation.rule_id,
            violation.description,
            self.report.file_name()
        );

        let violations_block = shape_payload(violation.raw(), "violations")?;
        let components_block = shape_payload(&Value::Object(components), "components")?;

        let description = format!(
            "\nStatus: {status}\nRL Policy ID: {rule_id}\nDescription: {descr}\nCategory: {category}{category_url}\nPriority: {priority}\nFile scanned by RL: {file_name}\n\nViolation:\n{{code}}{violations}{{code}}\n\nAffected components:\n{{code}}{components}{{code}}\n",
            status = violation.status.label(),
            rule_id = violation.rule_id,
            descr = violation.description,
            category = category,
            category_url = category_url,
            priority = violation.priority.as_deref().unwrap_or("unspecified"),
            file_name = self.report.file_name(),
            violations = violations_block.display_text(),
            components = components_block.display_text(),
        );

        Ok(collect_fields(
            summary,
            description,
            violations_block,
            components_block,
        ))
    }

    /// One aggregate field set covering every retained violation, grouped
    /// by category.
    pub fn build_global_ticket_fields(&self) -> Result<TicketFields> {
        let status = self.report.global_status();
        let mut components = Map::new();
        let mut grouped: BTreeMap<String, Vec<Value>> = BTreeMap::new();

        for (key, violation) in self.report.violations() {
            if !self.include_violations_pass && !violation.status.is_fail() {
                continue;
            }

            self.resolve_components(&violation.component_refs, &mut components);

            let category = violation
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            grouped
                .entry(category)
                .or_default()
                .push(json!({ key: violation.raw() }));
        }

        let summary = format!(
            "RL Status: {}, File: {}",
            status.label(),
            self.report.file_name()
        );

        let violations_block = shape_payload(&json!(grouped), "violations")?;
        let components_block = shape_payload(&Value::Object(components), "components")?;

        let description = format!(
            "\nStatus: {status};\nFile: {file_name}\n\nViolations:\n{{code}}{violations}{{code}}\n\nAffected components:\n{{code}}{components}{{code}}\n",
            status = status.label(),
            file_name = self.report.file_name(),
            violations = violations_block.display_text(),
            components = components_block.display_text(),
        );

        Ok(collect_fields(
            summary,
            description,
            violations_block,
            components_block,
        ))
    }
}

fn collect_fields(
    summary: String,
    description: String,
    violations_block: ShapedPayload,
    components_block: ShapedPayload,
) -> TicketFields {
    let mut attachments = Vec::new();
    if let Some(content) = violations_block.attached_content() {
        attachments.push(AttachmentPayload {
            file_name: VIOLATIONS_ATTACHMENT.to_string(),
            content: content.to_string(),
        });
    }
    if let Some(content) = components_block.attached_content() {
        attachments.push(AttachmentPayload {
            file_name: COMPONENTS_ATTACHMENT.to_string(),
            content: content.to_string(),
        });
    }

    TicketFields {
        summary,
        description,
        attachments,
    }
}
