use serde_json::{json, Map, Value};

/// Content queued for out-of-band upload after its ticket is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPayload {
    pub file_name: String,
    pub content: String,
}

/// Output of the field builder for one ticket: the summary/description pair
/// plus any payloads that exceeded the inline size limit.
#[derive(Debug, Clone, Default)]
pub struct TicketFields {
    pub summary: String,
    pub description: String,
    pub attachments: Vec<AttachmentPayload>,
}

/// Mutable working structure for one ticket, built up from the skeleton,
/// an optional template and the field builder output.
///
/// Attachment payloads ride on a typed side channel instead of being
/// smuggled through the field map, so `to_payload` can never leak them
/// into the submitted field set.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    project_key: Option<String>,
    summary: String,
    description: String,
    issue_type: String,
    extra: Map<String, Value>,
    attachments: Vec<AttachmentPayload>,
}

impl TicketDraft {
    /// The minimal field skeleton every ticket starts from.
    pub fn skeleton() -> Self {
        Self {
            project_key: None,
            summary: String::new(),
            description: String::new(),
            issue_type: "Task".to_string(),
            extra: Map::new(),
            attachments: Vec::new(),
        }
    }

    /// Shallow-merges every top-level template key into the draft.
    ///
    /// Well-known keys land in their typed fields; anything else becomes an
    /// extension field submitted verbatim. Run configuration is applied
    /// after the template, so it always wins for project and issue type.
    pub fn merge_template(&mut self, template: &Map<String, Value>) {
        for (key, value) in template {
            match key.as_str() {
                "summary" => {
                    if let Some(text) = value.as_str() {
                        self.summary = text.to_string();
                        continue;
                    }
                }
                "description" => {
                    if let Some(text) = value.as_str() {
                        self.description = text.to_string();
                        continue;
                    }
                }
                "project" => {
                    if let Some(key) = value.get("key").and_then(Value::as_str) {
                        self.project_key = Some(key.to_string());
                        continue;
                    }
                }
                "issuetype" => {
                    if let Some(name) = value.get("name").and_then(Value::as_str) {
                        self.issue_type = name.to_string();
                        continue;
                    }
                }
                _ => {}
            }
            self.extra.insert(key.clone(), value.clone());
        }
    }

    pub fn set_project_key(&mut self, key: &str) {
        self.project_key = Some(key.to_string());
    }

    pub fn set_issue_type(&mut self, name: &str) {
        self.issue_type = name.to_string();
    }

    /// Applies the field builder output, taking over its attachments.
    pub fn apply_fields(&mut self, fields: TicketFields) {
        self.summary = fields.summary;
        self.description = fields.description;
        self.attachments.extend(fields.attachments);
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn attachments(&self) -> &[AttachmentPayload] {
        &self.attachments
    }

    /// Renders the final field set ready for submission.
    pub fn to_payload(&self) -> Value {
        let mut fields = self.extra.clone();
        fields.insert("project".to_string(), json!({ "key": self.project_key }));
        fields.insert("summary".to_string(), json!(self.summary));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("issuetype".to_string(), json!({ "name": self.issue_type }));
        Value::Object(fields)
    }
}

/// One ticket awaiting submission, keyed by a run-unique title.
#[derive(Debug, Clone)]
pub struct PendingTicket {
    pub title: String,
    pub draft: TicketDraft,
}

/// Tickets extracted from one report, in submission order.
pub type PendingTicketSet = Vec<PendingTicket>;
