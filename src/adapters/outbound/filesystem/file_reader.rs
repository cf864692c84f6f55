use std::path::Path;

use serde_json::{Map, Value};

use crate::ports::outbound::{ReportReader, TemplateReader};
use crate::shared::{Result, TicketError};

/// FileSystemReader adapter for the report and template files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_to_string(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            TicketError::FileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<Value> {
        let content = Self::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            TicketError::ReportFormat {
                path: ".".to_string(),
                reason: format!("{} is not valid JSON: {}", path.display(), e),
            }
            .into()
        })
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<Map<String, Value>> {
        let content = Self::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content).map_err(|e| {
            TicketError::TemplateParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        match document {
            Value::Object(map) => Ok(map),
            _ => Err(TicketError::TemplateParse {
                path: path.to_path_buf(),
                details: "document root is not a JSON object".to_string(),
            }
            .into()),
        }
    }
}
