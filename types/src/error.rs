//! Error type for fundamental value construction.

use thiserror::Error;

/// Errors raised when constructing fundamental value types.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid wallet id: {0}")]
    InvalidWalletId(String),
}
