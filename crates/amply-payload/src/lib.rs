//! # amply-payload
//!
//! Builds the canonical request document for a transactional email send.
//!
//! Callers describe an email loosely: addresses as `"Name <email>"` strings,
//! [`Address`] values, or string maps; recipients as one value or a list;
//! bodies as plain-text/HTML shorthands or explicit parts. [`normalize`]
//! turns that description into an [`EmailDocument`] with every field
//! validated, or returns the first [`Error`] it finds.
//!
//! The crate does no I/O. Encoding the document and sending it is left to
//! the caller (see the `amply` crate).
//!
//! ## Quick Start
//!
//! ```
//! use amply_payload::{Attachment, EmailData, normalize};
//!
//! let data = EmailData::new()
//!     .from("Acme <noreply@acme.test>")
//!     .to("customer@example.com")
//!     .subject("Your receipt")
//!     .text("Thanks for your order.")
//!     .html("<p>Thanks for your order.</p>")
//!     .attachment(Attachment::new("JVBERi0xLjQ=", "receipt.pdf"))
//!     .category("receipts")
//!     .clicktracking(false);
//!
//! let document = normalize(&data)?;
//! let json = serde_json::to_string(&document).unwrap();
//! assert!(json.contains(r#""type":"text/plain""#));
//! # Ok::<(), amply_payload::Error>(())
//! ```
//!
//! ## Personalizations
//!
//! When [`EmailData::personalizations`] is non-empty it is used verbatim and
//! `to`/`cc`/`bcc` are ignored. Otherwise a single [`Personalization`] is
//! built from `to`/`cc`/`bcc`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod content;
mod document;
mod error;
mod normalize;
mod personalization;
mod recipients;
mod request;

pub use address::{Address, AddressInput};
pub use content::{Attachment, ContentPart, TEXT_HTML, TEXT_PLAIN};
pub use document::{Analytics, EmailDocument};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use personalization::{Personalization, assemble as assemble_personalizations};
pub use recipients::Recipients;
pub use request::EmailData;
