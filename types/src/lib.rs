//! Fundamental value types for the AppWallet domain.
//!
//! This crate defines the types shared across the workspace: wallet
//! identifiers, timestamps, and the secret-string wrapper used for
//! plaintext key material.

pub mod error;
pub mod secret;
pub mod time;
pub mod wallet_id;

pub use error::TypeError;
pub use secret::Secret;
pub use time::Timestamp;
pub use wallet_id::WalletId;
