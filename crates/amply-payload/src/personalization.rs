//! Personalization blocks and their assembly.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::Result;
use crate::recipients::Recipients;

/// One addressing of the message: who receives it and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personalization {
    /// Primary recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Address>,
    /// Carbon-copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Address>,
    /// Blind carbon-copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Address>,
}

impl Personalization {
    /// Creates an empty personalization.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary recipient.
    #[must_use]
    pub fn to(mut self, address: Address) -> Self {
        self.to.push(address);
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, address: Address) -> Self {
        self.cc.push(address);
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, address: Address) -> Self {
        self.bcc.push(address);
        self
    }

    /// Builds a personalization from flat recipient inputs.
    ///
    /// An empty `to` is not rejected here; the API reports it.
    ///
    /// # Errors
    ///
    /// Returns the first error from resolving `to`, `cc`, then `bcc`.
    pub fn from_recipients(to: &Recipients, cc: &Recipients, bcc: &Recipients) -> Result<Self> {
        Ok(Self {
            to: to.resolve()?,
            cc: cc.resolve()?,
            bcc: bcc.resolve()?,
        })
    }
}

/// Chooses the personalizations for a request.
///
/// Explicit blocks win and are used verbatim. Without them, exactly one block
/// is synthesized from the flat recipient inputs.
///
/// # Errors
///
/// Returns a resolution error from the flat inputs. Explicit blocks never fail.
pub fn assemble(
    explicit: &[Personalization],
    to: &Recipients,
    cc: &Recipients,
    bcc: &Recipients,
) -> Result<Vec<Personalization>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    Ok(vec![Personalization::from_recipients(to, cc, bcc)?])
}
