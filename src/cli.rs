use std::path::PathBuf;

use clap::Parser;

use crate::shared::{Result, TicketError};

/// Environment variables that override the corresponding CLI flags, so CI
/// pipelines can keep credentials out of command lines.
pub const SERVER_ENV: &str = "MY_JIRA_SERVER";
pub const TOKEN_ENV: &str = "MY_JIRA_TOKEN";
pub const PROJECT_ENV: &str = "MY_JIRA_PROJECT";

/// Create Jira tickets from ReversingLabs rl-json security scan reports
#[derive(Parser, Debug)]
#[command(name = "rl-jira")]
#[command(version)]
#[command(about = "Create Jira tickets from rl-json security scan reports", long_about = None)]
pub struct Args {
    /// The report to parse; must be in rl-json format
    #[arg(long = "rl-json-report")]
    pub rl_json_report: Option<PathBuf>,

    /// Upload the specified files to each created issue (repeatable)
    #[arg(long = "attach-file", value_name = "FILE")]
    pub attach_file: Vec<PathBuf>,

    /// The jira server url; mandatory only if not specified via the environment
    #[arg(short = 'S', long = "jira-server")]
    pub jira_server: Option<String>,

    /// The jira access token; mandatory only if not specified via the environment
    #[arg(short = 'T', long = "jira-token")]
    pub jira_token: Option<String>,

    /// The jira project to create issues in; mandatory only if not specified via the environment
    #[arg(short = 'P', long = "jira-project")]
    pub jira_project: Option<String>,

    /// The jira issue type for created tickets
    #[arg(long = "jira-issuetype", default_value = "Task")]
    pub jira_issuetype: String,

    /// Do not verify the https cert
    #[arg(long = "no-verify-cert")]
    pub no_verify_cert: bool,

    /// Create one aggregate ticket instead of one ticket per violation
    #[arg(long = "no-split-to-individual-violations")]
    pub no_split_to_individual_violations: bool,

    /// By default violations with status 'pass' are removed; include them instead
    #[arg(long = "include-violations-pass")]
    pub include_violations_pass: bool,

    /// The optional jira issue template file, in json
    #[arg(long = "issue-template-file")]
    pub issue_template_file: Option<PathBuf>,

    /// Don't create any new issue, just show the mandatory fields of the
    /// current project and issue type
    #[arg(long = "show-current-project-task-mandatory-fields")]
    pub show_current_project_task_mandatory_fields: bool,

    /// By default duplicate tickets are skipped; enforce a new ticket instead
    #[arg(long = "force-new-ticket-on-duplicate")]
    pub force_new_ticket_on_duplicate: bool,

    /// Increase verbosity during processing
    #[arg(long)]
    pub verbose: bool,
}

/// Validated run configuration after environment resolution.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub server: String,
    pub token: String,
    pub project: String,
    pub issue_type: String,
    pub verify_cert: bool,
    pub report_path: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub attach_files: Vec<PathBuf>,
    pub split_violations: bool,
    pub include_violations_pass: bool,
    pub force_new_ticket: bool,
    pub show_mandatory_fields: bool,
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the process environment over the flags and validates the
    /// mandatory configuration.
    pub fn resolve(self) -> Result<RunConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Environment lookup is injected so tests stay independent of the
    /// process environment.
    pub fn resolve_with<E>(self, env: E) -> Result<RunConfig>
    where
        E: Fn(&str) -> Option<String>,
    {
        let server = env(SERVER_ENV)
            .or(self.jira_server)
            .ok_or_else(|| missing("jira_server", "--jira-server", SERVER_ENV))?;
        let token = env(TOKEN_ENV)
            .or(self.jira_token)
            .ok_or_else(|| missing("jira_token", "--jira-token", TOKEN_ENV))?;
        let project = env(PROJECT_ENV)
            .or(self.jira_project)
            .ok_or_else(|| missing("jira_project", "--jira-project", PROJECT_ENV))?;

        if !self.show_current_project_task_mandatory_fields && self.rl_json_report.is_none() {
            return Err(TicketError::Configuration {
                name: "rl_json_report".to_string(),
                hint: "pass --rl-json-report with the report to parse".to_string(),
            }
            .into());
        }

        // repeated --attach-file values collapse to one upload each
        let mut attach_files: Vec<PathBuf> = Vec::new();
        for path in self.attach_file {
            if !attach_files.contains(&path) {
                attach_files.push(path);
            }
        }

        Ok(RunConfig {
            server,
            token,
            project,
            issue_type: self.jira_issuetype,
            verify_cert: !self.no_verify_cert,
            report_path: self.rl_json_report,
            template_path: self.issue_template_file,
            attach_files,
            split_violations: !self.no_split_to_individual_violations,
            include_violations_pass: self.include_violations_pass,
            force_new_ticket: self.force_new_ticket_on_duplicate,
            show_mandatory_fields: self.show_current_project_task_mandatory_fields,
            verbose: self.verbose,
        })
    }
}

fn missing(name: &str, flag: &str, env_var: &str) -> anyhow::Error {
    TicketError::Configuration {
        name: name.to_string(),
        hint: format!("pass {} or set {}", flag, env_var),
    }
    .into()
}
