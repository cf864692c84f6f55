/// Network adapters for the remote tracker API
mod jira_client;

pub use jira_client::JiraClient;
