use crate::ports::outbound::IssueRef;

/// RunSummary - Outcome of one ticket-filing run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Issues created on the tracker, in submission order
    pub created: Vec<IssueRef>,
    /// Tickets suppressed because a summary match already existed
    pub duplicates_skipped: usize,
    /// Violations filtered out before assembly (pass status)
    pub violations_skipped: usize,
}
