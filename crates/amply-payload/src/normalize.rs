//! Normalization pipeline.
//!
//! Each step validates one request field and writes it into the document.
//! Steps run in a fixed order and the first failure aborts the run:
//!
//! ```text
//! from → subject → text → html → content → reply_to → template
//!      → dynamic_template_data → unsubscribe_group_uuid → ip_or_pool_uuid
//!      → send_at → attachments → headers → categories → clicktracking
//!      → substitutions → personalizations
//! ```
//!
//! `content` appends after the parts written by `text` and `html`.

use serde_json::Value;
use tracing::{debug, trace};

use crate::document::{Analytics, EmailDocument};
use crate::error::{Error, Result};
use crate::personalization;
use crate::request::EmailData;

type Step = fn(EmailDocument, &EmailData) -> Result<EmailDocument>;

const STEPS: [(&str, Step); 17] = [
    ("from", set_from),
    ("subject", set_subject),
    ("text", set_text),
    ("html", set_html),
    ("content", set_content),
    ("reply_to", set_reply_to),
    ("template", set_template),
    ("dynamic_template_data", set_dynamic_template_data),
    ("unsubscribe_group_uuid", set_unsubscribe_group_uuid),
    ("ip_or_pool_uuid", set_ip_or_pool_uuid),
    ("send_at", set_send_at),
    ("attachments", set_attachments),
    ("headers", set_headers),
    ("categories", set_categories),
    ("clicktracking", set_clicktracking),
    ("substitutions", set_substitutions),
    ("personalizations", set_personalizations),
];

/// Normalizes a send request into its canonical document.
///
/// # Errors
///
/// Returns the first validation error encountered. No partial document is
/// returned.
pub fn normalize(data: &EmailData) -> Result<EmailDocument> {
    let document = STEPS
        .iter()
        .try_fold(EmailDocument::default(), |document, &(field, step)| {
            step(document, data)
                .inspect(|_| trace!(field, "Normalized field"))
                .inspect_err(|error| debug!(field, %error, "Rejected email data"))
        })?;

    debug!(
        content_parts = document.content.len(),
        attachments = document.attachments.len(),
        personalizations = document.personalizations.len(),
        "Normalized email data"
    );

    Ok(document)
}

fn set_from(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if let Some(from) = &data.from {
        document.from = Some(from.resolve()?);
    }
    Ok(document)
}

fn set_subject(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if !data.subject.is_empty() {
        document.subject = Some(data.subject.clone());
    }
    Ok(document)
}

fn set_text(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if !data.text.is_empty() {
        document.content.push(crate::ContentPart::text(&data.text));
    }
    Ok(document)
}

fn set_html(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if !data.html.is_empty() {
        document.content.push(crate::ContentPart::html(&data.html));
    }
    Ok(document)
}

fn set_content(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    for (index, part) in data.content.iter().enumerate() {
        if part.value.is_empty() {
            return Err(Error::invalid_field_shape("content", index, "value"));
        }
        if part.content_type.is_empty() {
            return Err(Error::invalid_field_shape("content", index, "type"));
        }
        document.content.push(part.clone());
    }
    Ok(document)
}

fn set_reply_to(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if let Some(reply_to) = &data.reply_to {
        document.reply_to = Some(reply_to.resolve()?);
    }
    Ok(document)
}

fn set_template(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    document.template.clone_from(&data.template);
    Ok(document)
}

fn set_dynamic_template_data(
    mut document: EmailDocument,
    data: &EmailData,
) -> Result<EmailDocument> {
    if let Some(values) = &data.dynamic_template_data {
        document.dynamic_template_data = Some(
            values
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        );
    }
    Ok(document)
}

fn set_unsubscribe_group_uuid(
    mut document: EmailDocument,
    data: &EmailData,
) -> Result<EmailDocument> {
    document.unsubscribe_group_uuid = non_empty(&data.unsubscribe_group_uuid);
    Ok(document)
}

fn set_ip_or_pool_uuid(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    document.ip_or_pool_uuid = non_empty(&data.ip_or_pool_uuid);
    Ok(document)
}

fn set_send_at(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    document.send_at = non_empty(&data.send_at);
    Ok(document)
}

fn set_attachments(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    for (index, attachment) in data.attachments.iter().enumerate() {
        if attachment.content.is_empty() {
            return Err(Error::invalid_field_shape("attachments", index, "content"));
        }
        if attachment.filename.is_empty() {
            return Err(Error::invalid_field_shape("attachments", index, "filename"));
        }
        document.attachments.push(attachment.clone());
    }
    Ok(document)
}

fn set_headers(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if data.headers.is_some() {
        document.headers.clone_from(&data.headers);
    }
    Ok(document)
}

fn set_categories(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if let Some(categories) = &data.categories {
        analytics(&mut document).categories = Some(categories.clone());
    }
    Ok(document)
}

fn set_clicktracking(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    let Some(value) = &data.clicktracking else {
        return Ok(document);
    };

    let Value::Bool(enabled) = value else {
        return Err(Error::InvalidType {
            field: "clicktracking",
            expected: "bool",
        });
    };

    analytics(&mut document).clicktracking = Some(*enabled);
    Ok(document)
}

fn set_substitutions(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    if let Some(substitutions) = &data.substitutions {
        document
            .substitutions
            .get_or_insert_with(Default::default)
            .extend(substitutions.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Ok(document)
}

fn set_personalizations(mut document: EmailDocument, data: &EmailData) -> Result<EmailDocument> {
    document.personalizations =
        personalization::assemble(&data.personalizations, &data.to, &data.cc, &data.bcc)?;
    Ok(document)
}

fn analytics(document: &mut EmailDocument) -> &mut Analytics {
    document.analytics.get_or_insert_with(Analytics::default)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
