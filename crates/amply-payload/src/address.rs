//! Email address resolution.
//!
//! An address field accepts three shapes:
//!
//! | Shape                          | Conversion                               |
//! |--------------------------------|------------------------------------------|
//! | `"Name <email>"` or `"email"`  | split on the first `<`                   |
//! | [`Address`]                    | passed through unchanged                 |
//! | string map with `name`/`email` | copied field-wise, other keys ignored    |
//!
//! Anything else is rejected with [`Error::InvalidAddressShape`]. After the
//! shape is converted, an empty email is rejected with [`Error::MissingEmail`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Canonical email address with an optional display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Display name (empty when absent).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Address {
    /// Creates an address without a display name.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: email.into(),
        }
    }

    /// Creates an address with a display name.
    #[must_use]
    pub fn with_name(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Splits `"Name <email>"` or a bare `"email"` into its parts.
    ///
    /// Does not check that an email was found.
    fn from_text(text: &str) -> Self {
        match text.split_once('<') {
            None => Self::new(text),
            Some((name, rest)) => Self {
                name: name.trim().to_string(),
                email: rest
                    .trim_matches(|c| matches!(c, '<' | '>' | ' '))
                    .to_string(),
            },
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

/// One address-shaped input value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum AddressInput {
    /// `"Name <email>"` or a bare `"email"`.
    Text(String),
    /// Already-canonical address.
    Address(Address),
    /// Map with optional `name` and `email` keys.
    Fields(BTreeMap<String, String>),
}

impl AddressInput {
    /// Converts a loosely-typed JSON value into an address input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddressShape`] for numbers, booleans, nulls,
    /// arrays, and objects holding non-string values.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key.clone(), s.clone())),
                    other => Err(Error::InvalidAddressShape(format!(
                        "map with {} value for `{key}`",
                        shape_name(other)
                    ))),
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Self::Fields),
            other => Err(Error::InvalidAddressShape(shape_name(other).to_string())),
        }
    }

    /// Resolves this input into a canonical [`Address`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEmail`] if no email could be found.
    pub fn resolve(&self) -> Result<Address> {
        let address = match self {
            Self::Text(text) => Address::from_text(text),
            Self::Address(address) => address.clone(),
            Self::Fields(fields) => Address {
                name: fields.get("name").cloned().unwrap_or_default(),
                email: fields.get("email").cloned().unwrap_or_default(),
            },
        };

        if address.email.is_empty() {
            return Err(Error::MissingEmail);
        }

        Ok(address)
    }
}

impl TryFrom<Value> for AddressInput {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl From<&str> for AddressInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<BTreeMap<String, String>> for AddressInput {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self::Fields(fields)
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, String, S>> for AddressInput {
    fn from(fields: HashMap<String, String, S>) -> Self {
        Self::Fields(fields.into_iter().collect())
    }
}

/// Name of a JSON value's shape, for error messages.
pub(crate) const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}
