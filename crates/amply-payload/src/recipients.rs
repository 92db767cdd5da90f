//! Address list resolution.

use serde::Deserialize;
use serde_json::Value;

use crate::address::{Address, AddressInput};
use crate::error::Result;

/// Address-list input for `to`, `cc`, and `bcc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Recipients {
    /// No recipients given.
    #[default]
    Unset,
    /// A single address-shaped value.
    Single(AddressInput),
    /// An ordered sequence of address-shaped values.
    List(Vec<AddressInput>),
}

impl Recipients {
    /// Converts a loosely-typed JSON value into a recipient list.
    ///
    /// Nulls inside an array are skipped. Numbers and booleans are treated as
    /// no recipients rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an array element or map is not address-shaped.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(AddressInput::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Value::String(_) | Value::Object(_) => AddressInput::from_value(value).map(Self::Single),
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(Self::Unset),
        }
    }

    /// Returns true if no recipients were given.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Resolves every entry, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error; no partial list is returned.
    pub fn resolve(&self) -> Result<Vec<Address>> {
        match self {
            Self::Unset => Ok(Vec::new()),
            Self::Single(input) => Ok(vec![input.resolve()?]),
            Self::List(inputs) => inputs.iter().map(AddressInput::resolve).collect(),
        }
    }
}

impl TryFrom<Value> for Recipients {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl From<&str> for Recipients {
    fn from(text: &str) -> Self {
        Self::Single(text.into())
    }
}

impl From<String> for Recipients {
    fn from(text: String) -> Self {
        Self::Single(text.into())
    }
}

impl From<Address> for Recipients {
    fn from(address: Address) -> Self {
        Self::Single(address.into())
    }
}

impl From<AddressInput> for Recipients {
    fn from(input: AddressInput) -> Self {
        Self::Single(input)
    }
}

impl<T: Into<AddressInput>> From<Vec<T>> for Recipients {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_unset_is_empty() {
        assert!(Recipients::Unset.resolve().unwrap().is_empty());
    }

    #[test]
    fn test_single_text() {
        let list = Recipients::from("Bob <bob@example.com>").resolve().unwrap();
        assert_eq!(list, vec![Address::with_name("Bob", "bob@example.com")]);
    }

    #[test]
    fn test_list_preserves_order() {
        let list = Recipients::from(vec!["a@x.com", "b@x.com", "c@x.com"])
            .resolve()
            .unwrap();
        let emails: Vec<_> = list.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, ["a@x.com", "b@x.com", "c@x.com"]);
    }

    #[test]
    fn test_list_stops_at_first_error() {
        let recipients = Recipients::from(vec!["a@x.com", "", "Nobody <>"]);
        assert_eq!(recipients.resolve(), Err(Error::MissingEmail));
    }

    #[test]
    fn test_from_value_mixed_array() {
        let value = json!([
            "a@x.com",
            null,
            { "name": "B", "email": "b@x.com" },
            "C <c@x.com>"
        ]);
        let list = Recipients::from_value(&value).unwrap().resolve().unwrap();
        assert_eq!(
            list,
            vec![
                Address::new("a@x.com"),
                Address::with_name("B", "b@x.com"),
                Address::with_name("C", "c@x.com"),
            ]
        );
    }

    #[test]
    fn test_from_value_array_with_bad_element() {
        let err = Recipients::from_value(&json!(["a@x.com", 5])).unwrap_err();
        assert!(matches!(err, Error::InvalidAddressShape(_)));
    }

    #[test]
    fn test_from_value_scalar_fallback() {
        assert_eq!(Recipients::from_value(&json!(null)).unwrap(), Recipients::Unset);
        assert_eq!(Recipients::from_value(&json!(3)).unwrap(), Recipients::Unset);
        assert_eq!(Recipients::from_value(&json!(false)).unwrap(), Recipients::Unset);
    }

    #[test]
    fn test_from_value_map() {
        let recipients = Recipients::from_value(&json!({ "email": "m@x.com" })).unwrap();
        assert_eq!(recipients.resolve().unwrap(), vec![Address::new("m@x.com")]);
    }
}
