//! # evmvec Merkle
//!
//! Standard Merkle trees over ABI-encoded leaves, compatible with the
//! `@openzeppelin/merkle-tree` conventions and the on-chain `MerkleProof`
//! verifier.
//!
//! ## Conventions
//!
//! - Leaf hash: `keccak256(keccak256(abi.encode(values)))`. The double
//!   keccak keeps leaf hashes out of the internal-node hash domain.
//! - Internal hash: keccak256 of the two child digests sorted ascending
//!   and concatenated, which makes proof verification order-independent.
//! - Leaves stay in input order; only sibling pairs are sorted at hashing
//!   time.
//!
//! ## Key Types
//!
//! - [`StandardMerkleTree`] - immutable tree built once from a leaf list
//! - [`MultiProof`] - compressed proof for several leaves at once
//! - [`TreeDump`] - portable record for serializing a tree
//!
//! Proof verifiers live in [`proof`] and mirror the on-chain fold exactly,
//! so the tests here prove both directions of the contract.

pub mod dump;
pub mod error;
pub mod proof;
pub mod tree;

pub use dump::{TreeDump, DUMP_FORMAT};
pub use error::MerkleError;
pub use proof::{sorted_pair_hash, verify, verify_multi, MultiProof};
pub use tree::StandardMerkleTree;
