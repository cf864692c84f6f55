use owo_colors::OwoColorize;

use crate::ports::outbound::OutcomeReporter;

/// Console adapter for run outcomes.
///
/// Informational outcomes go to stdout (they are the program's result for
/// CI log scraping); errors and verbose diagnostics go to stderr.
pub struct StderrOutcomeReporter {
    verbose: bool,
}

impl StderrOutcomeReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Default for StderrOutcomeReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutcomeReporter for StderrOutcomeReporter {
    fn info(&self, message: &str) {
        println!("{} {}", "INFO:".green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR:".red(), message);
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "verbose:".dimmed(), message);
        }
    }
}
