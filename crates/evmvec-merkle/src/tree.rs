//! Standard merkle tree construction and proof generation.
//!
//! The tree is an immutable flat arena of digests in heap layout: root at
//! index 0, children of node `i` at `2i + 1` and `2i + 2`. Leaf `i`
//! (input order) lives at arena index `2n - 2 - i`, so the arena always
//! holds exactly `2n - 1` digests and every internal node has two
//! children, for any leaf count `n >= 1`. Ancestor walks are index
//! arithmetic, no pointers.

use alloy_dyn_abi::DynSolType;
use alloy_primitives::{keccak256, B256};
use std::collections::VecDeque;

use evmvec_core::{abi, AbiError, AbiValue};

use crate::error::MerkleError;
use crate::proof::{sorted_pair_hash, MultiProof};

/// An immutable merkle tree over ABI-encoded leaves.
///
/// Built once from an ordered leaf list and its encoding schema; all
/// queries are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMerkleTree {
    /// Flat digest arena, root first.
    nodes: Vec<B256>,
    /// Original leaf tuples, in input order.
    values: Vec<Vec<AbiValue>>,
    /// Parsed encoding schema, one type per tuple field.
    schema: Vec<DynSolType>,
    /// Raw schema tags, preserved for dumps.
    tags: Vec<String>,
}

const fn parent_index(i: usize) -> usize {
    (i - 1) / 2
}

const fn sibling_index(i: usize) -> usize {
    if i % 2 == 0 {
        i - 1
    } else {
        i + 1
    }
}

impl StandardMerkleTree {
    /// Build a tree from leaf tuples and their encoding schema.
    ///
    /// Every tuple is hashed with the standard leaf hash under `tags`;
    /// a tuple whose arity or types disagree with the schema fails the
    /// whole build.
    pub fn of<S: AsRef<str>>(
        values: Vec<Vec<AbiValue>>,
        tags: &[S],
    ) -> Result<Self, MerkleError> {
        let tags: Vec<String> = tags.iter().map(|t| t.as_ref().to_string()).collect();
        let schema = abi::parse_schema(&tags)?;

        if values.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut leaf_hashes = Vec::with_capacity(values.len());
        for leaf in &values {
            leaf_hashes.push(Self::standard_leaf_hash(leaf, &schema)?);
        }

        Ok(Self {
            nodes: build_arena(&leaf_hashes),
            values,
            schema,
            tags,
        })
    }

    /// The standard leaf hash: `keccak256(keccak256(abi.encode(values)))`.
    pub fn standard_leaf_hash(
        values: &[AbiValue],
        schema: &[DynSolType],
    ) -> Result<B256, AbiError> {
        let encoded = abi::encode(values, schema)?;
        Ok(keccak256(keccak256(encoded)))
    }

    /// The tree root.
    pub fn root(&self) -> B256 {
        self.nodes[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.values.len()
    }

    /// Number of digests in the arena (always `2 * leaf_count - 1`).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The flat digest arena, root first.
    pub fn nodes(&self) -> &[B256] {
        &self.nodes
    }

    /// The raw schema tags.
    pub fn leaf_encoding(&self) -> &[String] {
        &self.tags
    }

    /// The parsed schema.
    pub fn schema(&self) -> &[DynSolType] {
        &self.schema
    }

    /// Iterate leaves as `(original_index, values)` in input order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &[AbiValue])> {
        self.values.iter().enumerate().map(|(i, v)| (i, v.as_slice()))
    }

    /// The values of leaf `index`.
    pub fn leaf(&self, index: usize) -> Result<&[AbiValue], MerkleError> {
        self.check_index(index)?;
        Ok(&self.values[index])
    }

    /// The digest of leaf `index`.
    pub fn leaf_hash(&self, index: usize) -> Result<B256, MerkleError> {
        Ok(self.nodes[self.arena_index(index)?])
    }

    /// Sibling digests from leaf `index` up to the root.
    pub fn proof(&self, index: usize) -> Result<Vec<B256>, MerkleError> {
        let mut position = self.arena_index(index)?;
        let mut proof = Vec::new();
        while position > 0 {
            proof.push(self.nodes[sibling_index(position)]);
            position = parent_index(position);
        }
        Ok(proof)
    }

    /// Compressed proof for a set of distinct leaf indices.
    ///
    /// Processes known nodes deepest-first: a node whose sibling is also
    /// known emits `flag = true` and consumes it, otherwise the sibling
    /// digest joins the external proof with `flag = false`. The emitted
    /// leaves are in ascending original index order.
    pub fn multi_proof(&self, indices: &[usize]) -> Result<MultiProof, MerkleError> {
        if indices.is_empty() {
            return Err(MerkleError::EmptySelection);
        }

        let mut indices = indices.to_vec();
        indices.sort_unstable();
        for pair in indices.windows(2) {
            if pair[0] == pair[1] {
                return Err(MerkleError::DuplicateIndex(pair[0]));
            }
        }

        // Ascending leaf order is descending arena order, so the queue
        // starts deepest-first and stays that way as parents are pushed.
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(indices.len());
        for &index in &indices {
            queue.push_back(self.arena_index(index)?);
        }

        let mut proof = Vec::new();
        let mut proof_flags = Vec::new();

        while let Some(&position) = queue.front() {
            if position == 0 {
                break;
            }
            queue.pop_front();

            let sibling = sibling_index(position);
            match queue.front() {
                Some(&next) if next == sibling => {
                    proof_flags.push(true);
                    queue.pop_front();
                }
                _ => {
                    proof_flags.push(false);
                    proof.push(self.nodes[sibling]);
                }
            }
            queue.push_back(parent_index(position));
        }

        let leaves = indices
            .iter()
            .map(|&i| self.nodes[self.nodes.len() - 1 - i])
            .collect();

        Ok(MultiProof {
            proof,
            proof_flags,
            indices,
            leaves,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), MerkleError> {
        if index >= self.leaf_count() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            });
        }
        Ok(())
    }

    fn arena_index(&self, leaf_index: usize) -> Result<usize, MerkleError> {
        self.check_index(leaf_index)?;
        Ok(self.nodes.len() - 1 - leaf_index)
    }
}

/// Build the flat arena bottom-up from leaf digests.
fn build_arena(leaves: &[B256]) -> Vec<B256> {
    let n = leaves.len();
    let mut nodes = vec![B256::ZERO; 2 * n - 1];

    for (i, leaf) in leaves.iter().enumerate() {
        nodes[2 * n - 2 - i] = *leaf;
    }
    for i in (0..n - 1).rev() {
        nodes[i] = sorted_pair_hash(nodes[2 * i + 1], nodes[2 * i + 2]);
    }

    nodes
}
