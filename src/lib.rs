//! rl-jira - Create Jira tickets from ReversingLabs rl-json scan reports
//!
//! This library turns the policy violations of an rl-json security-scan
//! report into issue-tracker tickets, with per-run deduplication,
//! size-limited payload shaping and template-based field merging.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`ticket_generation`): report model, ticket model,
//!   field building and assembly policies
//! - **Application Layer** (`application`): use cases and run DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use rl_jira::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let tracker = JiraClient::new("https://jira.example.com", "token", true)?;
//! let files = FileSystemReader::new();
//! let reporter = StderrOutcomeReporter::new(false);
//!
//! // Create use case
//! let use_case = FileTicketsUseCase::new(tracker, files, reporter);
//!
//! // Execute
//! let request = TicketRunRequest {
//!     report_path: PathBuf::from("report.rl.json"),
//!     template_path: None,
//!     project_key: "SEC".to_string(),
//!     issue_type: "Task".to_string(),
//!     split_violations: true,
//!     include_violations_pass: false,
//!     force_new_ticket: false,
//!     attach_files: vec![],
//! };
//! let summary = use_case.execute(request)?;
//! println!("created {} ticket(s)", summary.created.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod shared;
pub mod ticket_generation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrOutcomeReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::network::JiraClient;
    pub use crate::application::dto::{RunSummary, TicketRunRequest};
    pub use crate::application::use_cases::{
        duplicate_query, FileTicketsUseCase, ShowMandatoryFieldsUseCase, KNOWN_FIELDS,
    };
    pub use crate::ports::outbound::{
        FieldMeta, IssueRef, IssueTypeMeta, OutcomeReporter, ReportReader, TemplateReader,
        TrackerClient,
    };
    pub use crate::shared::{ExitCode, Result, TicketError};
    pub use crate::ticket_generation::domain::{
        resolve_path, AttachmentPayload, PendingTicket, PendingTicketSet, PolicyStatus, ScanReport,
        TicketDraft, TicketFields, Violation,
    };
    pub use crate::ticket_generation::policies::{category_doc_url, MAX_DESCRIPTION};
    pub use crate::ticket_generation::services::{FieldBuilder, TicketAssembler};
}
