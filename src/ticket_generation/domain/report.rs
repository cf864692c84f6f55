use std::collections::BTreeMap;

use serde_json::Value;

use crate::shared::{Result, TicketError};

/// Fixed rl-json paths consumed by the typed access layer.
pub const QUALITY_STATUS_PATH: &str = ".report.info.statistics.quality.status";
pub const FILE_NAME_PATH: &str = ".report.info.file.name";
pub const VIOLATIONS_PATH: &str = ".report.metadata.violations";
pub const COMPONENTS_PATH: &str = ".report.metadata.components";

/// Walks a dotted path (`.a.b.c`, first segment dropped) over nested JSON
/// objects. Returns `None` as soon as a segment is absent or the current
/// node is not an object. Array-indexing segments are not supported.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.').skip(1) {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Pass/fail status of the whole scan or a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStatus {
    Pass,
    Fail,
}

impl PolicyStatus {
    /// Case-insensitive parse of the report's status strings.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "pass" => Some(PolicyStatus::Pass),
            "fail" => Some(PolicyStatus::Fail),
            _ => None,
        }
    }

    pub fn is_fail(self) -> bool {
        matches!(self, PolicyStatus::Fail)
    }

    /// Capitalized form used in summaries and descriptions.
    pub fn label(self) -> &'static str {
        match self {
            PolicyStatus::Pass => "Pass",
            PolicyStatus::Fail => "Fail",
        }
    }

    /// Lowercase form as it appears in the report document.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyStatus::Pass => "pass",
            PolicyStatus::Fail => "fail",
        }
    }
}

/// One policy finding from the scan report.
///
/// The typed fields cover everything the ticket pipeline branches on; the
/// raw record is retained verbatim for the code-block serialization so the
/// ticket keeps full fidelity.
#[derive(Debug, Clone)]
pub struct Violation {
    pub key: String,
    pub status: PolicyStatus,
    pub rule_id: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub component_refs: Vec<String>,
    raw: Value,
}

impl Violation {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn from_value(key: &str, value: &Value) -> Result<Self> {
        let base = format!("{}.{}", VIOLATIONS_PATH, key);
        let record = value.as_object().ok_or_else(|| TicketError::ReportFormat {
            path: base.clone(),
            reason: "violation record is not an object".to_string(),
        })?;

        let status_raw = record
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| TicketError::ReportFormat {
                path: format!("{}.status", base),
                reason: "path not found or not a string".to_string(),
            })?;
        let status = PolicyStatus::parse(status_raw).ok_or_else(|| TicketError::ReportFormat {
            path: format!("{}.status", base),
            reason: format!("'{}' is not one of pass/fail", status_raw),
        })?;

        let rule_id = record
            .get("rule_id")
            .and_then(scalar_string)
            .ok_or_else(|| TicketError::ReportFormat {
                path: format!("{}.rule_id", base),
                reason: "path not found".to_string(),
            })?;

        let description = record
            .get("description")
            .and_then(scalar_string)
            .ok_or_else(|| TicketError::ReportFormat {
                path: format!("{}.description", base),
                reason: "path not found".to_string(),
            })?;

        let category = record.get("category").and_then(scalar_string);
        let priority = record.get("priority").and_then(scalar_string);

        let component_refs = record
            .get("references")
            .and_then(|r| r.get("component"))
            .and_then(Value::as_array)
            .map(|refs| refs.iter().filter_map(scalar_string).collect())
            .unwrap_or_default();

        Ok(Self {
            key: key.to_string(),
            status,
            rule_id,
            description,
            category,
            priority,
            component_refs,
            raw: value.clone(),
        })
    }
}

/// Typed view over a parsed rl-json report document.
///
/// Parsing happens once at load time and fails fast with the exact dotted
/// path that is missing or malformed. The loaded report is immutable.
#[derive(Debug)]
pub struct ScanReport {
    global_status: PolicyStatus,
    file_name: String,
    violations: BTreeMap<String, Violation>,
    components: BTreeMap<String, Value>,
}

impl ScanReport {
    pub fn from_value(document: &Value) -> Result<Self> {
        let status_raw = require_str(document, QUALITY_STATUS_PATH)?;
        let global_status =
            PolicyStatus::parse(status_raw).ok_or_else(|| TicketError::ReportFormat {
                path: QUALITY_STATUS_PATH.to_string(),
                reason: format!("'{}' is not one of pass/fail", status_raw),
            })?;

        let file_name = require_str(document, FILE_NAME_PATH)?.to_string();

        let mut violations = BTreeMap::new();
        for (key, value) in require_object(document, VIOLATIONS_PATH)? {
            violations.insert(key.clone(), Violation::from_value(key, value)?);
        }

        let components = require_object(document, COMPONENTS_PATH)?
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            global_status,
            file_name,
            violations,
            components,
        })
    }

    pub fn is_global_fail(&self) -> bool {
        self.global_status.is_fail()
    }

    pub fn global_status(&self) -> PolicyStatus {
        self.global_status
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn violations(&self) -> &BTreeMap<String, Violation> {
        &self.violations
    }

    pub fn components(&self) -> &BTreeMap<String, Value> {
        &self.components
    }

    pub fn component(&self, key: &str) -> Option<&Value> {
        self.components.get(key)
    }
}

fn require_str<'a>(document: &'a Value, path: &str) -> Result<&'a str> {
    let value = resolve_path(document, path).ok_or_else(|| TicketError::ReportFormat {
        path: path.to_string(),
        reason: "path not found in the report document".to_string(),
    })?;
    value.as_str().ok_or_else(|| {
        TicketError::ReportFormat {
            path: path.to_string(),
            reason: "value is not a string".to_string(),
        }
        .into()
    })
}

fn require_object<'a>(
    document: &'a Value,
    path: &str,
) -> Result<&'a serde_json::Map<String, Value>> {
    let value = resolve_path(document, path).ok_or_else(|| TicketError::ReportFormat {
        path: path.to_string(),
        reason: "path not found in the report document".to_string(),
    })?;
    value.as_object().ok_or_else(|| {
        TicketError::ReportFormat {
            path: path.to_string(),
            reason: "value is not an object".to_string(),
        }
        .into()
    })
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
