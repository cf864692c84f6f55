use crate::application::dto::{RunSummary, TicketRunRequest};
use crate::ports::outbound::{OutcomeReporter, ReportReader, TemplateReader, TrackerClient};
use crate::shared::Result;
use crate::ticket_generation::domain::report::ScanReport;
use crate::ticket_generation::services::TicketAssembler;

/// The duplicate-guard filter: a substring match on the summary, scoped to
/// the target project.
pub fn duplicate_query(project: &str, summary: &str) -> String {
    format!("summary ~ '{}' AND project = '{}'", summary, project)
}

/// FileTicketsUseCase - Turns one scan report into tracker tickets
///
/// Sequential pipeline: load report, extract the pending ticket set, then
/// for each pending ticket run the duplicate guard, create the issue and
/// upload its attachments. A tracker failure aborts the remaining run.
///
/// # Type Parameters
/// * `C` - TrackerClient implementation
/// * `F` - file access implementation (report + template)
/// * `O` - OutcomeReporter implementation
pub struct FileTicketsUseCase<C, F, O>
where
    C: TrackerClient,
    F: ReportReader + TemplateReader,
    O: OutcomeReporter,
{
    tracker: C,
    files: F,
    reporter: O,
}

impl<C, F, O> FileTicketsUseCase<C, F, O>
where
    C: TrackerClient,
    F: ReportReader + TemplateReader,
    O: OutcomeReporter,
{
    pub fn new(tracker: C, files: F, reporter: O) -> Self {
        Self {
            tracker,
            files,
            reporter,
        }
    }

    fn has_duplicate(&self, project: &str, summary: &str) -> Result<bool> {
        let query = duplicate_query(project, summary);
        self.reporter.debug(&format!("search jira: {}", query));
        let matches = self.tracker.search_issues(&query)?;
        self.reporter
            .debug(&format!("search jira result: {} issue(s)", matches.len()));
        Ok(!matches.is_empty())
    }

    pub fn execute(&self, request: TicketRunRequest) -> Result<RunSummary> {
        let document = self.files.read_report(&request.report_path)?;
        let report = ScanReport::from_value(&document)?;

        let mut summary = RunSummary::default();

        if !report.is_global_fail() && !request.include_violations_pass {
            self.reporter.info(&format!(
                "File: {}; no issue created: scan produced status: 'Pass' and --include-violations-pass is not set",
                report.file_name()
            ));
            return Ok(summary);
        }

        let template = match &request.template_path {
            Some(path) => {
                self.reporter
                    .info(&format!("reading template file: {}", path.display()));
                Some(self.files.read_template(path)?)
            }
            None => None,
        };

        let assembler = TicketAssembler::new(
            request.project_key.clone(),
            request.issue_type.clone(),
            template,
        );
        let extraction = assembler.extract(
            &report,
            request.split_violations,
            request.include_violations_pass,
        )?;

        for message in &extraction.skipped {
            self.reporter.info(message);
        }
        summary.violations_skipped = extraction.skipped.len();

        if extraction.pending.is_empty() {
            self.reporter.info(&format!(
                "no tickets created: file: {}, report status: {}",
                report.file_name(),
                report.global_status().label()
            ));
            return Ok(summary);
        }

        for pending in extraction.pending {
            if !request.force_new_ticket
                && self.has_duplicate(&request.project_key, pending.draft.summary())?
            {
                self.reporter.info(&format!(
                    "duplicate issue already exists with the same summary string: {}",
                    pending.draft.summary()
                ));
                summary.duplicates_skipped += 1;
                continue;
            }

            let issue = self.tracker.create_issue(&pending.draft.to_payload())?;
            self.reporter
                .info(&format!("new ticket created: {}: {}", issue, pending.title));

            // oversized payloads first, then the run-wide file attachments
            for attachment in pending.draft.attachments() {
                self.tracker
                    .add_attachment(&issue, &attachment.file_name, attachment.content.as_bytes())?;
                self.reporter.info(&format!(
                    "attachment: {} uploaded to {}",
                    attachment.file_name, issue
                ));
            }

            for path in &request.attach_files {
                self.tracker.attach_file(&issue, path)?;
                self.reporter.info(&format!(
                    "attachment: {} uploaded to {}",
                    path.display(),
                    issue
                ));
            }

            summary.created.push(issue);
        }

        Ok(summary)
    }
}
