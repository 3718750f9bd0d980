//! Error types for merkle tree operations.

use evmvec_core::AbiError;
use thiserror::Error;

/// Errors that can occur while building, proving, or (de)serializing a
/// merkle tree.
#[derive(Debug, Error)]
pub enum MerkleError {
    #[error("cannot build a merkle tree from an empty leaf list")]
    EmptyTree,

    #[error("leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("duplicate leaf index {0} in selection")]
    DuplicateIndex(usize),

    #[error("multi-proof selection is empty")]
    EmptySelection,

    #[error("malformed tree dump: {0}")]
    Format(String),

    #[error("leaf encoding error: {0}")]
    Abi(#[from] AbiError),
}
