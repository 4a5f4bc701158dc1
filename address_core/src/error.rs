use thiserror::Error;

/// Errors surfaced by the address entity.
///
/// This layer has no recovery policy of its own: nothing here is retried
/// or logged, every error is returned to the caller.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid wallet id: {0}")]
    InvalidWalletId(String),

    /// A required key was absent from a record mapping.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The record mapping could not be decoded (wrong type, extra keys).
    #[error("malformed address record: {0}")]
    MalformedRecord(String),

    /// Propagated unchanged from the `Encryptor` capability.
    #[error(transparent)]
    Encryption(#[from] EncryptionError),
}

/// Failure reported by an [`Encryptor`](crate::Encryptor) implementation.
#[derive(Debug, Clone, Error)]
#[error("encryption failed: {0}")]
pub struct EncryptionError(pub String);
