//! Email resource.

use amply_payload::{EmailData, EmailDocument, normalize};
use tracing::debug;

use crate::client::Client;
use crate::error::Result;
use crate::response::Response;

/// Path of the send endpoint, relative to the base URL.
pub const EMAIL_PATH: &str = "/email";

/// Handle for the email endpoints of a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Email<'a> {
    client: &'a Client,
}

impl<'a> Email<'a> {
    /// Creates an email resource bound to a client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Validates and normalizes `data` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) on invalid input.
    pub fn prepare(&self, data: &EmailData) -> Result<EmailDocument> {
        Ok(normalize(data)?)
    }

    /// Sends an email.
    ///
    /// The request is validated first; invalid input fails with
    /// [`Error::Validation`](crate::Error::Validation) and nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, the request, or the API call fails.
    pub async fn create(&self, data: &EmailData) -> Result<Response> {
        let document = self.prepare(data)?;
        self.send(&document).await
    }

    /// Sends an already-normalized document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the API call fails.
    pub async fn send(&self, document: &EmailDocument) -> Result<Response> {
        debug!(
            personalizations = document.personalizations.len(),
            "Submitting email"
        );
        self.client.post(EMAIL_PATH, document).await
    }
}
