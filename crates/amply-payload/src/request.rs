//! Caller-facing send request.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::address::AddressInput;
use crate::content::{Attachment, ContentPart};
use crate::personalization::Personalization;
use crate::recipients::Recipients;

/// Loosely-shaped description of an email to send.
///
/// Nothing here is validated until the request is normalized into an
/// [`EmailDocument`](crate::EmailDocument). Empty strings mean "not set".
///
/// # Example
///
/// ```
/// use amply_payload::{EmailData, normalize};
///
/// let data = EmailData::new()
///     .from("Acme <noreply@acme.test>")
///     .to(vec!["a@example.com", "b@example.com"])
///     .subject("Welcome")
///     .text("Hello there");
///
/// let document = normalize(&data).unwrap();
/// assert_eq!(document.personalizations[0].to.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmailData {
    /// Sender.
    pub from: Option<AddressInput>,
    /// Primary recipients, used when no personalizations are given.
    pub to: Recipients,
    /// CC recipients, used when no personalizations are given.
    pub cc: Recipients,
    /// BCC recipients, used when no personalizations are given.
    pub bcc: Recipients,
    /// Subject line.
    pub subject: String,
    /// Plain-text body shorthand.
    pub text: String,
    /// HTML body shorthand.
    pub html: String,
    /// Explicit body parts, placed after `text` and `html`.
    pub content: Vec<ContentPart>,
    /// Reply-to address.
    pub reply_to: Option<AddressInput>,
    /// Template reference, passed through untouched.
    pub template: Option<Value>,
    /// Template variables.
    pub dynamic_template_data: Option<BTreeMap<String, String>>,
    /// Substitution pairs.
    pub substitutions: Option<BTreeMap<String, String>>,
    /// Unsubscribe group.
    pub unsubscribe_group_uuid: String,
    /// Dedicated IP or IP pool.
    pub ip_or_pool_uuid: String,
    /// Scheduled send time.
    pub send_at: String,
    /// File attachments.
    pub attachments: Vec<Attachment>,
    /// Extra message headers.
    pub headers: Option<BTreeMap<String, String>>,
    /// Analytics categories.
    pub categories: Option<Vec<String>>,
    /// Click tracking flag. Must be a JSON boolean.
    pub clicktracking: Option<Value>,
    /// Explicit personalizations. When non-empty, `to`/`cc`/`bcc` are ignored.
    pub personalizations: Vec<Personalization>,
}

impl EmailData {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender.
    #[must_use]
    pub fn from(mut self, from: impl Into<AddressInput>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sets the primary recipients.
    #[must_use]
    pub fn to(mut self, to: impl Into<Recipients>) -> Self {
        self.to = to.into();
        self
    }

    /// Sets the CC recipients.
    #[must_use]
    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = cc.into();
        self
    }

    /// Sets the BCC recipients.
    #[must_use]
    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = bcc.into();
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Appends an explicit body part.
    #[must_use]
    pub fn content(mut self, part: ContentPart) -> Self {
        self.content.push(part);
        self
    }

    /// Sets the reply-to address.
    #[must_use]
    pub fn reply_to(mut self, reply_to: impl Into<AddressInput>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Sets the template reference.
    #[must_use]
    pub fn template(mut self, template: impl Into<Value>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the template variables.
    #[must_use]
    pub fn dynamic_template_data(mut self, data: BTreeMap<String, String>) -> Self {
        self.dynamic_template_data = Some(data);
        self
    }

    /// Adds a substitution pair.
    #[must_use]
    pub fn substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions
            .get_or_insert_with(BTreeMap::new)
            .insert(from.into(), to.into());
        self
    }

    /// Sets the unsubscribe group.
    #[must_use]
    pub fn unsubscribe_group_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.unsubscribe_group_uuid = uuid.into();
        self
    }

    /// Sets the dedicated IP or IP pool.
    #[must_use]
    pub fn ip_or_pool_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.ip_or_pool_uuid = uuid.into();
        self
    }

    /// Sets the scheduled send time.
    #[must_use]
    pub fn send_at(mut self, send_at: impl Into<String>) -> Self {
        self.send_at = send_at.into();
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Adds a message header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds an analytics category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories
            .get_or_insert_with(Vec::new)
            .push(category.into());
        self
    }

    /// Enables or disables click tracking.
    #[must_use]
    pub fn clicktracking(mut self, enabled: bool) -> Self {
        self.clicktracking = Some(Value::Bool(enabled));
        self
    }

    /// Appends an explicit personalization.
    #[must_use]
    pub fn personalization(mut self, personalization: Personalization) -> Self {
        self.personalizations.push(personalization);
        self
    }
}
