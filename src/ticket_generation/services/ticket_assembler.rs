use serde_json::{Map, Value};

use crate::shared::Result;
use crate::ticket_generation::domain::report::ScanReport;
use crate::ticket_generation::domain::ticket::{
    PendingTicket, PendingTicketSet, TicketDraft, TicketFields,
};
use crate::ticket_generation::services::field_builder::{FieldBuilder, UNCATEGORIZED};

/// Result of turning one report into the run's pending tickets.
#[derive(Debug, Default)]
pub struct Extraction {
    pub pending: PendingTicketSet,
    /// Informational skip messages for violations filtered out of the run.
    pub skipped: Vec<String>,
}

/// Merges the field skeleton, the optional template and the field builder
/// output into submission-ready drafts, one per violation or one aggregate.
pub struct TicketAssembler {
    project_key: String,
    issue_type: String,
    template: Option<Map<String, Value>>,
}

impl TicketAssembler {
    pub fn new(
        project_key: String,
        issue_type: String,
        template: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            project_key,
            issue_type,
            template,
        }
    }

    /// Skeleton, then template, then run configuration, then built fields.
    pub fn assemble(&self, fields: TicketFields) -> TicketDraft {
        let mut draft = TicketDraft::skeleton();
        if let Some(template) = &self.template {
            draft.merge_template(template);
        }
        draft.set_project_key(&self.project_key);
        draft.set_issue_type(&self.issue_type);
        draft.apply_fields(fields);
        draft
    }

    /// Extracts the run's pending ticket set from the report.
    ///
    /// In split mode every retained violation becomes one ticket titled
    /// `category: .., rule: .., status: ..`; otherwise a single aggregate
    /// ticket titled by its summary is produced.
    pub fn extract(
        &self,
        report: &ScanReport,
        split_violations: bool,
        include_violations_pass: bool,
    ) -> Result<Extraction> {
        let builder = FieldBuilder::new(report, include_violations_pass);
        let mut extraction = Extraction::default();

        if !split_violations {
            let fields = builder.build_global_ticket_fields()?;
            extraction.pending.push(PendingTicket {
                title: fields.summary.clone(),
                draft: self.assemble(fields),
            });
            return Ok(extraction);
        }

        for violation in report.violations().values() {
            let category = violation.category.as_deref().unwrap_or(UNCATEGORIZED);

            if !include_violations_pass && !violation.status.is_fail() {
                extraction.skipped.push(format!(
                    "skip: category: {}, rule: {}, status: {}",
                    category,
                    violation.rule_id,
                    violation.status.as_str()
                ));
                continue;
            }

            let title = format!(
                "category: {}, rule: {}, status: {}",
                category,
                violation.rule_id,
                violation.status.as_str()
            );
            let fields = builder.build_single_ticket_fields(violation)?;
            extraction.pending.push(PendingTicket {
                title,
                draft: self.assemble(fields),
            });
        }

        Ok(extraction)
    }
}
