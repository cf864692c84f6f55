mod run_request;
mod run_summary;

pub use run_request::TicketRunRequest;
pub use run_summary::RunSummary;
