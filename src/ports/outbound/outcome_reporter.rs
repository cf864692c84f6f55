/// OutcomeReporter port for user-visible run outcomes
///
/// Informational outcomes (tickets created, duplicates skipped, violations
/// filtered out) go through this port so tests can capture them; fatal
/// errors are displayed by the binary with their cause chain.
pub trait OutcomeReporter {
    /// Reports an informational outcome.
    fn info(&self, message: &str);

    /// Reports a non-fatal problem.
    fn error(&self, message: &str);

    /// Reports diagnostic detail, shown only in verbose runs.
    fn debug(&self, message: &str);
}
