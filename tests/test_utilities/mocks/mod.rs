mod mock_file_reader;
mod mock_outcome_reporter;
mod mock_tracker_client;

pub use mock_file_reader::MockFileReader;
pub use mock_outcome_reporter::MockOutcomeReporter;
pub use mock_tracker_client::MockTrackerClient;
