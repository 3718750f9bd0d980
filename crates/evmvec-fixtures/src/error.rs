//! Error types for fixture generation.

use evmvec_merkle::MerkleError;
use evmvec_sign::SignError;
use thiserror::Error;

/// Errors that can occur while generating or writing fixtures.
///
/// All of these are fatal to the invoking binary: fixtures are batch
/// jobs, so there is no retry or recovery path.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("merkle error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("signing error: {0}")]
    Sign(#[from] SignError),

    #[error("malformed leaf record: {0}")]
    Record(String),

    #[error("no selector collision within {attempts} candidate pairs")]
    CollisionNotFound { attempts: u64 },
}
