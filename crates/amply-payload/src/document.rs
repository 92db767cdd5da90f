//! Canonical request document.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::address::Address;
use crate::content::{Attachment, ContentPart};
use crate::personalization::Personalization;

/// Normalized send request, ready for JSON encoding.
///
/// Produced by [`normalize`](crate::normalize). Unset and empty fields are
/// left out of the encoded output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmailDocument {
    /// Sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Body parts in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentPart>,
    /// Reply-to address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Address>,
    /// Template reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
    /// Template variables.
    #[serde(skip_serializing_if = "is_absent")]
    pub dynamic_template_data: Option<BTreeMap<String, String>>,
    /// Substitution pairs.
    #[serde(skip_serializing_if = "is_absent")]
    pub substitutions: Option<BTreeMap<String, String>>,
    /// Unsubscribe group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_group_uuid: Option<String>,
    /// Dedicated IP or IP pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_or_pool_uuid: Option<String>,
    /// Scheduled send time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    /// File attachments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Extra message headers.
    #[serde(skip_serializing_if = "is_absent")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Categories and click tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    /// Recipient groupings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub personalizations: Vec<Personalization>,
}

/// Analytics settings carried under the `analytics` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analytics {
    /// Categories for reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Whether links are rewritten for click tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicktracking: Option<bool>,
}

#[allow(clippy::ref_option)]
fn is_absent(map: &Option<BTreeMap<String, String>>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_encodes_empty_object() {
        let json = serde_json::to_string(&EmailDocument::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_empty_maps_are_omitted() {
        let document = EmailDocument {
            headers: Some(BTreeMap::new()),
            substitutions: Some(BTreeMap::new()),
            ..EmailDocument::default()
        };
        assert_eq!(serde_json::to_string(&document).unwrap(), "{}");
    }

    #[test]
    fn test_analytics_encoding() {
        let document = EmailDocument {
            analytics: Some(Analytics {
                categories: Some(vec!["a".into()]),
                clicktracking: Some(false),
            }),
            ..EmailDocument::default()
        };
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "analytics": { "categories": ["a"], "clicktracking": false } })
        );
    }
}
