use std::process;

use rl_jira::adapters::outbound::console::StderrOutcomeReporter;
use rl_jira::adapters::outbound::filesystem::FileSystemReader;
use rl_jira::adapters::outbound::network::JiraClient;
use rl_jira::application::dto::TicketRunRequest;
use rl_jira::application::use_cases::{FileTicketsUseCase, ShowMandatoryFieldsUseCase};
use rl_jira::cli::Args;
use rl_jira::shared::{ExitCode, Result, TicketError};

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        let code = e
            .downcast_ref::<TicketError>()
            .map(TicketError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(code.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments, then resolve the environment overrides
    let args = Args::parse_args();
    let config = args.resolve()?;

    // Create adapters (Dependency Injection)
    let tracker = JiraClient::new(&config.server, &config.token, config.verify_cert)?;

    // Introspection mode: render the mandatory-field report and stop
    if config.show_mandatory_fields {
        let use_case = ShowMandatoryFieldsUseCase::new(tracker);
        let rendered = use_case.execute(&config.project, &config.issue_type)?;
        print!("{}", rendered);
        return Ok(());
    }

    let files = FileSystemReader::new();
    let reporter = StderrOutcomeReporter::new(config.verbose);
    let use_case = FileTicketsUseCase::new(tracker, files, reporter);

    let report_path = config.report_path.ok_or_else(|| TicketError::Configuration {
        name: "rl_json_report".to_string(),
        hint: "pass --rl-json-report with the report to parse".to_string(),
    })?;

    let request = TicketRunRequest {
        report_path,
        template_path: config.template_path,
        project_key: config.project,
        issue_type: config.issue_type,
        split_violations: config.split_violations,
        include_violations_pass: config.include_violations_pass,
        force_new_ticket: config.force_new_ticket,
        attach_files: config.attach_files,
    };

    use_case.execute(request)?;

    Ok(())
}
