use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - tickets created, duplicates skipped, or nothing to do
    Success = 0,
    /// Mandatory configuration was missing (server, token, project, report)
    ConfigurationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed report, tracker rejection, file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for ticket creation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("mandatory argument {name} was not provided\n\n💡 Hint: {hint}")]
    Configuration { name: String, hint: String },

    #[error("report document is not usable at path {path}: {reason}\n\n💡 Hint: the report must be produced in rl-json format")]
    ReportFormat { path: String, reason: String },

    #[error("tracker request failed: {method} {url}\nDetails: {details}")]
    TrackerRequest {
        method: String,
        url: String,
        details: String,
    },

    #[error("failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("failed to parse issue template: {path}\nDetails: {details}\n\n💡 Hint: the template must be a JSON object of field name to field value")]
    TemplateParse { path: PathBuf, details: String },
}

impl TicketError {
    /// Maps the error to the process exit code reported to CI.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TicketError::Configuration { .. } => ExitCode::ConfigurationError,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ConfigurationError),
            "Configuration Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let error = TicketError::Configuration {
            name: "jira_server".to_string(),
            hint: "pass --jira-server or set MY_JIRA_SERVER".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("mandatory argument jira_server"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("MY_JIRA_SERVER"));
    }

    #[test]
    fn test_report_format_error_display() {
        let error = TicketError::ReportFormat {
            path: ".report.info.file.name".to_string(),
            reason: "path not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains(".report.info.file.name"));
        assert!(display.contains("path not found"));
        assert!(display.contains("rl-json"));
    }

    #[test]
    fn test_tracker_request_error_display() {
        let error = TicketError::TrackerRequest {
            method: "POST".to_string(),
            url: "https://jira.example.com/rest/api/2/issue".to_string(),
            details: "403 Forbidden".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("POST"));
        assert!(display.contains("rest/api/2/issue"));
        assert!(display.contains("403 Forbidden"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let config = TicketError::Configuration {
            name: "jira_token".to_string(),
            hint: "x".to_string(),
        };
        assert_eq!(config.exit_code(), ExitCode::ConfigurationError);

        let format = TicketError::ReportFormat {
            path: ".report".to_string(),
            reason: "x".to_string(),
        };
        assert_eq!(format.exit_code(), ExitCode::ApplicationError);

        let tracker = TicketError::TrackerRequest {
            method: "GET".to_string(),
            url: "u".to_string(),
            details: "d".to_string(),
        };
        assert_eq!(tracker.exit_code(), ExitCode::ApplicationError);
    }
}
