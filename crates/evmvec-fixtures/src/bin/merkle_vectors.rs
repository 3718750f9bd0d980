//! Generates the merkle fixture files: tree dump, per-leaf proofs, and
//! the multi-proof, under `data/`.

use anyhow::Result;
use tracing::info;

use evmvec_fixtures::merkle;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    merkle::generate("data")?;

    let tree = merkle::build_tree()?;
    info!(root = %tree.root(), leaves = tree.leaf_count(), "merkle fixtures ready");
    Ok(())
}
