//! Generates `data/eip712.json`: domain separators and a signed
//! `NameCard` typed-data fixture.

use anyhow::Result;
use tracing::info;

use evmvec_fixtures::eip712;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let record = eip712::write("data")?;
    info!(signer = %record.signer_address, "eip712 fixtures ready");
    Ok(())
}
