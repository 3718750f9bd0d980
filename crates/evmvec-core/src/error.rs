//! Error types for evmvec core.

use thiserror::Error;

/// Errors that can occur while parsing schemas or encoding values.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("invalid ABI type tag `{tag}`: {reason}")]
    InvalidTypeTag { tag: String, reason: String },

    #[error("unsupported ABI type `{0}`")]
    UnsupportedType(String),

    #[error("encoding mismatch: schema has {expected} types, got {got} values")]
    EncodingMismatch { expected: usize, got: usize },

    #[error("type mismatch at field {index}: expected `{expected}`, got {got}")]
    TypeMismatch {
        index: usize,
        expected: String,
        got: String,
    },

    #[error("cannot interpret {value} as `{expected}`")]
    ValueConversion { expected: String, value: String },
}
