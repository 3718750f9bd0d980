//! Fixture record types.
//!
//! Field names here are parsed by the downstream contract test suite and
//! are part of the external contract. Digests serialize as lowercase
//! `0x`-prefixed hex.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use evmvec_merkle::TreeDump;

/// `data/merkle_tree.json`: the root plus the portable tree record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerkleTreeFile {
    pub merkle_root: B256,
    pub merkle_tree: TreeDump,
}

/// One entry of `data/merkle_proof.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    pub account: Address,
    pub amount: u64,
    pub proof: Vec<B256>,
}

/// `data/merkle_multi_proof.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiProofFile {
    pub proof: Vec<B256>,
    pub proof_flags: Vec<bool>,
    pub leaves: Vec<LeafRecord>,
}

/// A requested leaf inside a multi-proof file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    pub account: Address,
    pub amount: u64,
}

/// `data/ecdsa.json`: message hashes, typed-data hashes, and signatures
/// for the ECDSA library tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaFile {
    pub eth_signed_msg_hash_from_hash: B256,
    pub eth_signed_msg_hash_from_bytes: B256,
    pub struct_hash: B256,
    pub typed_data_hash: B256,
    pub valid_signature: String,
    pub compact_signature_r: B256,
    pub compact_signature_vs: B256,
}

/// `data/eip712.json`: domain separators and a typed-data signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712File {
    pub domain_separator: B256,
    pub domain_separator_with_chain_id_changed: B256,
    pub value: NameCardValue,
    pub signature: String,
    pub signer_address: Address,
}

/// The signed `NameCard` struct, echoed into the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCardValue {
    pub name: String,
    pub salary: u64,
    #[serde(rename = "personalAddress")]
    pub personal_address: Address,
}
