//! Generates `data/ecdsa.json`: EIP-191 hashes, typed-data hashes, and
//! the fixture wallet's personal-sign signature.

use anyhow::Result;
use tracing::info;

use evmvec_fixtures::ecdsa;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let record = ecdsa::write("data")?;
    info!(signature = %record.valid_signature, "ecdsa fixtures ready");
    Ok(())
}
