use std::path::PathBuf;

/// TicketRunRequest - Internal request DTO for one ticket-filing run
#[derive(Debug, Clone)]
pub struct TicketRunRequest {
    /// Path to the rl-json report to parse
    pub report_path: PathBuf,
    /// Optional issue template merged into every created ticket
    pub template_path: Option<PathBuf>,
    /// Target project key on the tracker
    pub project_key: String,
    /// Issue type name for created tickets
    pub issue_type: String,
    /// One ticket per violation (true) or one aggregate ticket (false)
    pub split_violations: bool,
    /// Keep violations whose status is pass
    pub include_violations_pass: bool,
    /// Create a ticket even when one with the same summary exists
    pub force_new_ticket: bool,
    /// Local files uploaded to every created ticket
    pub attach_files: Vec<PathBuf>,
}
