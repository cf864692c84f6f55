mod stderr_reporter;

pub use stderr_reporter::StderrOutcomeReporter;
