//! Merkle fixture generation.
//!
//! Builds the six-leaf (address, amount) distribution tree, dumps it,
//! loads the dump back from disk, and derives per-leaf proofs and one
//! multi-proof from the loaded tree - so the fixtures exercise the same
//! dump/load path the downstream suite relies on.

use alloy_primitives::{Address, U256};
use std::path::Path;

use evmvec_core::AbiValue;
use evmvec_merkle::StandardMerkleTree;

use crate::error::FixtureError;
use crate::io::{read_json, write_json};
use crate::records::{LeafRecord, MerkleTreeFile, MultiProofFile, ProofEntry};

/// Leaf encoding schema of the distribution tree.
pub const LEAF_SCHEMA: [&str; 2] = ["address", "uint256"];

/// Leaf indices covered by the multi-proof fixture.
pub const MULTI_PROOF_INDICES: [usize; 3] = [0, 2, 4];

pub const TREE_FILE: &str = "merkle_tree.json";
pub const PROOF_FILE: &str = "merkle_proof.json";
pub const MULTI_PROOF_FILE: &str = "merkle_multi_proof.json";

/// The fixed distribution the fixtures commit to: addresses 0x..01 through
/// 0x..06 with amounts 10000 through 60000.
pub fn distribution() -> Vec<(Address, u64)> {
    (1..=6u8)
        .map(|i| (Address::with_last_byte(i), 10_000 * i as u64))
        .collect()
}

/// Build the distribution tree.
pub fn build_tree() -> Result<StandardMerkleTree, FixtureError> {
    let leaves = distribution()
        .into_iter()
        .map(|(account, amount)| {
            vec![AbiValue::Address(account), AbiValue::from(amount)]
        })
        .collect();
    Ok(StandardMerkleTree::of(leaves, &LEAF_SCHEMA)?)
}

/// The `merkle_tree.json` record for a tree.
pub fn tree_file(tree: &StandardMerkleTree) -> MerkleTreeFile {
    MerkleTreeFile {
        merkle_root: tree.root(),
        merkle_tree: tree.dump(),
    }
}

/// One proof entry per leaf, in input order.
pub fn proof_entries(tree: &StandardMerkleTree) -> Result<Vec<ProofEntry>, FixtureError> {
    let mut entries = Vec::with_capacity(tree.leaf_count());
    for (index, leaf) in tree.entries() {
        let (account, amount) = leaf_account_amount(leaf)?;
        entries.push(ProofEntry {
            account,
            amount,
            proof: tree.proof(index)?,
        });
    }
    Ok(entries)
}

/// The multi-proof record over [`MULTI_PROOF_INDICES`].
pub fn multi_proof_file(tree: &StandardMerkleTree) -> Result<MultiProofFile, FixtureError> {
    let multi_proof = tree.multi_proof(&MULTI_PROOF_INDICES)?;

    let mut leaves = Vec::with_capacity(multi_proof.indices.len());
    for &index in &multi_proof.indices {
        let (account, amount) = leaf_account_amount(tree.leaf(index)?)?;
        leaves.push(LeafRecord { account, amount });
    }

    Ok(MultiProofFile {
        proof: multi_proof.proof,
        proof_flags: multi_proof.proof_flags,
        leaves,
    })
}

/// Load a tree back from a written `merkle_tree.json`.
pub fn read_tree_file(path: impl AsRef<Path>) -> Result<StandardMerkleTree, FixtureError> {
    let record: MerkleTreeFile = read_json(path)?;
    let tree = StandardMerkleTree::load(&record.merkle_tree)?;
    if tree.root() != record.merkle_root {
        return Err(FixtureError::Record(format!(
            "merkle_root {} does not match tree root {}",
            record.merkle_root,
            tree.root()
        )));
    }
    Ok(tree)
}

/// Generate all three merkle fixture files under `dir`.
pub fn generate(dir: impl AsRef<Path>) -> Result<(), FixtureError> {
    let dir = dir.as_ref();

    let tree = build_tree()?;
    write_json(dir.join(TREE_FILE), &tree_file(&tree))?;

    // Proofs and the multi-proof come from the reloaded dump, like the
    // downstream suite's own consumption path.
    let loaded = read_tree_file(dir.join(TREE_FILE))?;
    write_json(dir.join(PROOF_FILE), &proof_entries(&loaded)?)?;
    write_json(dir.join(MULTI_PROOF_FILE), &multi_proof_file(&loaded)?)?;

    Ok(())
}

fn leaf_account_amount(leaf: &[AbiValue]) -> Result<(Address, u64), FixtureError> {
    match leaf {
        [AbiValue::Address(account), AbiValue::Uint(amount)]
            if *amount <= U256::from(u64::MAX) =>
        {
            Ok((*account, amount.to::<u64>()))
        }
        _ => Err(FixtureError::Record(format!(
            "expected an (address, amount) leaf, got {leaf:?}"
        ))),
    }
}
