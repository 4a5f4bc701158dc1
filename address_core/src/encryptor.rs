//! Encryption capability consumed by the entity transform.

use crate::error::EncryptionError;

/// Turns plaintext secret material into ciphertext for at-rest storage.
///
/// The entity never constructs or looks up an encryptor; the transform
/// receives one as a parameter, which keeps it pure and testable with a
/// fake. Key management, algorithm choice, and decryption all belong to
/// the implementor.
pub trait Encryptor {
    fn encrypt(&self, plaintext: &str) -> Result<String, EncryptionError>;
}
