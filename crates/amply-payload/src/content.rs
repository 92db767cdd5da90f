//! Message body parts and attachments.

use serde::{Deserialize, Serialize};

/// MIME type used for the plain-text shorthand body.
pub const TEXT_PLAIN: &str = "text/plain";

/// MIME type used for the HTML shorthand body.
pub const TEXT_HTML: &str = "text/html";

/// One typed body part.
///
/// Receiving APIs typically render the last part they support, so the order
/// of parts in a request is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPart {
    /// MIME type tag (e.g., `text/plain`).
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    /// Body text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl ContentPart {
    /// Creates a content part.
    #[must_use]
    pub fn new(content_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            value: value.into(),
        }
    }

    /// Creates a `text/plain` part.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TEXT_PLAIN, value)
    }

    /// Creates a `text/html` part.
    #[must_use]
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(TEXT_HTML, value)
    }
}

/// File attached to the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Encoded file content (usually base64).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// File name shown to the recipient.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filename: String,
    /// MIME type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content disposition (`attachment` or `inline`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    /// Content ID for inline references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    /// Creates an attachment from encoded content and a file name.
    #[must_use]
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the content disposition.
    #[must_use]
    pub fn with_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Sets the content ID.
    #[must_use]
    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_content_part_wire_names() {
        let json = serde_json::to_string(&ContentPart::html("<p>hi</p>")).unwrap();
        assert_eq!(json, r#"{"type":"text/html","value":"<p>hi</p>"}"#);
    }

    #[test]
    fn test_attachment_omits_unset_options() {
        let json = serde_json::to_string(&Attachment::new("aGk=", "hi.txt")).unwrap();
        assert_eq!(json, r#"{"content":"aGk=","filename":"hi.txt"}"#);
    }

    #[test]
    fn test_attachment_content_id_wire_name() {
        let attachment = Attachment::new("aGk=", "logo.png")
            .with_type("image/png")
            .with_disposition("inline")
            .with_content_id("logo");
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(value["type"], "image/png");
        assert_eq!(value["disposition"], "inline");
        assert_eq!(value["content_id"], "logo");
    }

    #[test]
    fn test_attachment_deserialize_missing_members() {
        let attachment: Attachment = serde_json::from_str(r#"{"filename":"a.png"}"#).unwrap();
        assert!(attachment.content.is_empty());
        assert_eq!(attachment.filename, "a.png");
    }
}
