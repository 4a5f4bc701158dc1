//! Opaque wallet identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeError;

/// Identifier of the wallet that owns an address.
///
/// An opaque value object with value equality. Serializes as its own
/// mapping (`{"id": "..."}`), so embedding structures delegate to this
/// form rather than flattening the id into their own keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletId {
    id: String,
}

impl WalletId {
    /// Create a wallet id from a raw string. The id must be non-empty.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidWalletId("empty id".to_string()));
        }
        Ok(Self { id })
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Validate that this id is well-formed.
    ///
    /// Values built through serde bypass `new`, so structure is re-checked
    /// wherever an id crosses into an entity.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
