//! Error types for signing operations.

use evmvec_core::AbiError;
use thiserror::Error;

/// Errors that can occur while constructing keys or signing.
#[derive(Debug, Error)]
pub enum SignError {
    #[error("invalid secp256k1 secret key")]
    InvalidKey,

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("encoding error: {0}")]
    Abi(#[from] AbiError),
}
