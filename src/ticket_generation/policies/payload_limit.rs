use serde_json::Value;

use crate::shared::Result;

/// Maximum number of characters a serialized payload may occupy inline in
/// the ticket description. Anything larger is redirected to an attachment.
pub const MAX_DESCRIPTION: usize = 30_000;

/// Result of applying the size-limited payload policy to one code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedPayload {
    /// Fits inline: the indented JSON serialization itself.
    Inline(String),
    /// Too large: a short placeholder goes inline, the full serialization
    /// is queued for upload as a named attachment.
    Attached { placeholder: String, content: String },
}

impl ShapedPayload {
    /// The text that ends up inside the description's code block.
    pub fn display_text(&self) -> &str {
        match self {
            ShapedPayload::Inline(text) => text,
            ShapedPayload::Attached { placeholder, .. } => placeholder,
        }
    }

    /// The content queued for upload, if the payload was redirected.
    pub fn attached_content(&self) -> Option<&str> {
        match self {
            ShapedPayload::Inline(_) => None,
            ShapedPayload::Attached { content, .. } => Some(content),
        }
    }
}

/// Serializes `value` as indented JSON and applies the size limit.
/// `what` names the payload in the placeholder ("violations"/"components").
pub fn shape_payload(value: &Value, what: &str) -> Result<ShapedPayload> {
    let serialized = serde_json::to_string_pretty(value)?;
    if serialized.len() > MAX_DESCRIPTION {
        return Ok(ShapedPayload::Attached {
            placeholder: format!("The {} are too big, changed to upload: see attachments", what),
            content: serialized,
        });
    }
    Ok(ShapedPayload::Inline(serialized))
}
