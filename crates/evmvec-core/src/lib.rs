//! # evmvec Core
//!
//! Encoding primitives for the evmvec fixture toolkit.
//!
//! This crate contains no I/O. It is pure computation over EVM data:
//! runtime-typed ABI values, schema-driven encoding, and 4-byte function
//! selectors.
//!
//! ## Key Types
//!
//! - [`AbiValue`] - A runtime-typed value (address, uint, string, ...)
//! - [`Selector`] - The first 4 bytes of `keccak256(function_signature)`
//!
//! ## Encoding
//!
//! Values are encoded against a parsed schema of Solidity type tags. The
//! encoding must match the chain's standard ABI packing bit-for-bit, since
//! the consuming contract test suite recomputes the same hashes on-chain.
//! See the [`abi`] module.

pub mod abi;
pub mod error;
pub mod selector;

pub use abi::{encode, parse_schema, AbiValue};
pub use error::AbiError;
pub use selector::Selector;
