use std::path::Path;

use serde_json::{Map, Value};

use crate::shared::Result;

/// TemplateReader port for loading the optional issue template.
pub trait TemplateReader {
    /// Reads the template at `path`; the document root must be a JSON
    /// object of field name to field value.
    fn read_template(&self, path: &Path) -> Result<Map<String, Value>>;
}
