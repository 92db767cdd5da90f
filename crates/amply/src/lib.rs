//! # amply
//!
//! Client library for the Amply transactional email API.
//!
//! ## Features
//!
//! - **Loose input, strict output**: addresses as `"Name <email>"` strings,
//!   [`Address`] values, or string maps; recipients as one value or a list
//! - **Validation before I/O**: invalid requests fail with
//!   [`Error::Validation`] and never reach the network
//! - **Status classification**: 401/403/404/422 map to named errors that
//!   carry the API response
//!
//! ## Quick Start
//!
//! ```ignore
//! use amply::{Client, EmailData};
//!
//! #[tokio::main]
//! async fn main() -> amply::Result<()> {
//!     let client = Client::with_access_token("your_access_token")?;
//!
//!     let data = EmailData::new()
//!         .from("Acme <noreply@acme.test>")
//!         .to(vec!["a@example.com", "B <b@example.com>"])
//!         .subject("Welcome")
//!         .text("Hello!")
//!         .html("<h1>Hello!</h1>");
//!
//!     let response = client.email().create(&data).await?;
//!     println!("Accepted with status {}", response.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```ignore
//! use std::time::Duration;
//! use amply::{Client, Config};
//!
//! let config = Config::builder()
//!     .base_url("https://sendamply.com/api/v1")
//!     .access_token("your_access_token")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! let client = Client::new(config)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod email;
mod error;
mod response;

pub use client::Client;
pub use config::{Config, ConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use email::{EMAIL_PATH, Email};
pub use error::{Error, Result};
pub use response::{Response, check_response};

pub use amply_payload::{
    Address, AddressInput, Analytics, Attachment, ContentPart, EmailData, EmailDocument,
    Personalization, Recipients, normalize,
};
