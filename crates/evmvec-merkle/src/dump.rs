//! Portable tree serialization.
//!
//! The dump record matches the `standard-v1` layout of
//! `@openzeppelin/merkle-tree`, so either implementation can load the
//! other's output: the flat digest arena, the leaf tuples as plain JSON
//! values, and the encoding schema that gives those values meaning.
//!
//! Loading re-derives every digest from the values and schema; any
//! disagreement with the dumped arena is a format error, never a silently
//! different tree.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use evmvec_core::{abi, AbiValue};

use crate::error::MerkleError;
use crate::tree::StandardMerkleTree;

/// Format tag carried by every dump.
pub const DUMP_FORMAT: &str = "standard-v1";

/// A portable, JSON-serializable record of a [`StandardMerkleTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDump {
    pub format: String,
    pub tree: Vec<B256>,
    pub values: Vec<DumpEntry>,
    pub leaf_encoding: Vec<String>,
}

/// One leaf of a dump: its tuple as plain JSON plus its arena position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpEntry {
    pub value: Vec<serde_json::Value>,
    pub tree_index: usize,
}

impl TreeDump {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, MerkleError> {
        serde_json::from_str(s).map_err(|e| MerkleError::Format(e.to_string()))
    }
}

impl StandardMerkleTree {
    /// Produce the portable record for this tree.
    pub fn dump(&self) -> TreeDump {
        let node_count = self.node_count();
        TreeDump {
            format: DUMP_FORMAT.to_string(),
            tree: self.nodes().to_vec(),
            values: self
                .entries()
                .map(|(i, leaf)| DumpEntry {
                    value: leaf.iter().map(AbiValue::to_json).collect(),
                    tree_index: node_count - 1 - i,
                })
                .collect(),
            leaf_encoding: self.leaf_encoding().to_vec(),
        }
    }

    /// Reconstruct a tree from a portable record.
    ///
    /// Rebuilds the arena from the recorded values and schema and checks
    /// it digest-for-digest against the recorded arena.
    pub fn load(dump: &TreeDump) -> Result<Self, MerkleError> {
        if dump.format != DUMP_FORMAT {
            return Err(MerkleError::Format(format!(
                "unknown dump format `{}`",
                dump.format
            )));
        }
        if dump.values.is_empty() {
            return Err(MerkleError::Format("dump has no leaf values".to_string()));
        }

        let schema =
            abi::parse_schema(&dump.leaf_encoding).map_err(|e| MerkleError::Format(e.to_string()))?;

        let mut values = Vec::with_capacity(dump.values.len());
        for (i, entry) in dump.values.iter().enumerate() {
            if entry.value.len() != schema.len() {
                return Err(MerkleError::Format(format!(
                    "leaf {i} has {} values, schema has {} types",
                    entry.value.len(),
                    schema.len()
                )));
            }
            let leaf = entry
                .value
                .iter()
                .zip(&schema)
                .map(|(raw, ty)| AbiValue::from_json(raw, ty))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| MerkleError::Format(format!("leaf {i}: {e}")))?;
            values.push(leaf);
        }

        let tree = Self::of(values, &dump.leaf_encoding)
            .map_err(|e| MerkleError::Format(format!("rebuild failed: {e}")))?;

        if tree.nodes() != dump.tree.as_slice() {
            return Err(MerkleError::Format(
                "tree digests do not match leaf values".to_string(),
            ));
        }
        for (i, entry) in dump.values.iter().enumerate() {
            if entry.tree_index != tree.node_count() - 1 - i {
                return Err(MerkleError::Format(format!(
                    "leaf {i} has inconsistent treeIndex {}",
                    entry.tree_index
                )));
            }
        }

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    const SCHEMA: [&str; 2] = ["address", "uint256"];

    fn sample_tree() -> StandardMerkleTree {
        let leaves = (1..=6u64)
            .map(|i| {
                vec![
                    AbiValue::Address(Address::with_last_byte(i as u8)),
                    AbiValue::from(10_000 * i),
                ]
            })
            .collect();
        StandardMerkleTree::of(leaves, &SCHEMA).unwrap()
    }

    #[test]
    fn roundtrip_preserves_root_and_proofs() {
        let tree = sample_tree();
        let loaded = StandardMerkleTree::load(&tree.dump()).unwrap();

        assert_eq!(loaded.root(), tree.root());
        for i in 0..tree.leaf_count() {
            assert_eq!(loaded.proof(i).unwrap(), tree.proof(i).unwrap());
        }
    }

    #[test]
    fn roundtrip_through_json_text() {
        let tree = sample_tree();
        let json = tree.dump().to_json().unwrap();

        let dump = TreeDump::from_json(&json).unwrap();
        let loaded = StandardMerkleTree::load(&dump).unwrap();
        assert_eq!(loaded.root(), tree.root());
    }

    #[test]
    fn dump_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_tree().dump()).unwrap();

        assert!(value.get("leafEncoding").is_some());
        assert!(value["values"][0].get("treeIndex").is_some());
        assert_eq!(value["format"], "standard-v1");
    }

    #[test]
    fn load_rejects_unknown_format() {
        let mut dump = sample_tree().dump();
        dump.format = "standard-v2".to_string();

        let result = StandardMerkleTree::load(&dump);
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }

    #[test]
    fn load_rejects_corrupted_digest() {
        let mut dump = sample_tree().dump();
        dump.tree[1].0[0] ^= 0xff;

        let result = StandardMerkleTree::load(&dump);
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }

    #[test]
    fn load_rejects_inconsistent_tree_index() {
        let mut dump = sample_tree().dump();
        dump.values[0].tree_index = 0;

        let result = StandardMerkleTree::load(&dump);
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }

    #[test]
    fn load_rejects_uncoercible_value() {
        let mut dump = sample_tree().dump();
        dump.values[0].value[1] = serde_json::json!(true);

        let result = StandardMerkleTree::load(&dump);
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }

    #[test]
    fn load_rejects_missing_values() {
        let mut dump = sample_tree().dump();
        dump.values.clear();

        let result = StandardMerkleTree::load(&dump);
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let result = TreeDump::from_json("{\"format\": 3}");
        assert!(matches!(result, Err(MerkleError::Format(_))));
    }
}
