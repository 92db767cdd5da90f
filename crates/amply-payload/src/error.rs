//! Error types for request normalization.

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised while normalizing caller input.
///
/// Every variant describes bad caller input. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Address input is not a string, an [`Address`](crate::Address), or a
    /// string-valued map.
    #[error("Expected a string, an Address, or a string map for email address, got {0}")]
    InvalidAddressShape(String),

    /// Resolved address has no email.
    #[error("Must provide `email`")]
    MissingEmail,

    /// An element of a sequence field is missing a required member.
    #[error("String expected for {field}[{index}].{member}")]
    InvalidFieldShape {
        /// Request field (e.g., `content`, `attachments`).
        field: &'static str,
        /// Position of the offending element.
        index: usize,
        /// Missing member (e.g., `value`, `filename`).
        member: &'static str,
    },

    /// A field holds a value of the wrong type.
    #[error("{expected} expected for `{field}`")]
    InvalidType {
        /// Request field.
        field: &'static str,
        /// Name of the expected type.
        expected: &'static str,
    },
}

impl Error {
    /// Creates an index-qualified field shape error.
    #[must_use]
    pub const fn invalid_field_shape(
        field: &'static str,
        index: usize,
        member: &'static str,
    ) -> Self {
        Self::InvalidFieldShape {
            field,
            index,
            member,
        }
    }

    /// Returns the request field this error is attributed to, if known.
    ///
    /// Address errors are raised by a shared resolver and carry no field.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidFieldShape { field, .. } | Self::InvalidType { field, .. } => {
                Some(field)
            }
            Self::InvalidAddressShape(_) | Self::MissingEmail => None,
        }
    }
}
