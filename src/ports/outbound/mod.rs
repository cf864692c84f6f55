/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (tracker API, file system, console).
pub mod outcome_reporter;
pub mod report_reader;
pub mod template_reader;
pub mod tracker_client;

pub use outcome_reporter::OutcomeReporter;
pub use report_reader::ReportReader;
pub use template_reader::TemplateReader;
pub use tracker_client::{FieldMeta, IssueRef, IssueTypeMeta, TrackerClient};
