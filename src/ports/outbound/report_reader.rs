use std::path::Path;

use serde_json::Value;

use crate::shared::Result;

/// ReportReader port for loading the scan report document.
///
/// Abstracts the file system so the ticket pipeline can be driven from
/// in-memory documents in tests.
pub trait ReportReader {
    /// Reads and parses the rl-json report at `path`.
    fn read_report(&self, path: &Path) -> Result<Value>;
}
