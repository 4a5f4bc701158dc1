//! Address entity core for AppWallet.
//!
//! Models a blockchain address generated for a wallet, together with its
//! key material, across three concerns:
//! - in-memory construction of the immutable [`Address`] entity
//! - record serialization for transport and storage ([`AddressRecord`])
//! - the one-way transform into the encrypted-at-rest
//!   [`EncryptedAddress`] via an injected [`Encryptor`] capability
//!
//! The entity is a frozen value: every operation is a pure function of
//! its inputs. Wallet orchestration, persistence, and the concrete
//! encryption algorithm live outside this crate.

pub mod address;
pub mod encrypted;
pub mod encryptor;
pub mod error;
pub mod record;

pub use address::Address;
pub use encrypted::{EncryptedAddress, EncryptedAddressRecord};
pub use encryptor::Encryptor;
pub use error::{AddressError, EncryptionError};
pub use record::AddressRecord;
