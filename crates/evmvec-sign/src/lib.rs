//! # evmvec Sign
//!
//! Ethereum signing primitives for fixture generation: a secp256k1 wallet
//! with recoverable signatures, EIP-191 personal message hashing, and
//! EIP-712 typed-data hashing.
//!
//! ## Key Types
//!
//! - [`Wallet`] - secp256k1 signing key with an Ethereum address
//! - [`EthSignature`] - 65-byte `r || s || v` signature with an EIP-2098
//!   compact rendering
//! - [`Eip712Domain`] / [`StructType`] - typed-data hashing inputs
//!
//! Signing is deterministic (RFC 6979), so fixtures generated from a fixed
//! key are stable across runs.

pub mod eip191;
pub mod eip712;
pub mod error;
pub mod wallet;

pub use eip191::hash_message;
pub use eip712::{typed_data_hash, Eip712Domain, StructType};
pub use error::SignError;
pub use wallet::{recover_address, EthSignature, Wallet};
