//! Searches for two function signatures with different declarations but
//! the same 4-byte selector, for the proxy clash tests.

use anyhow::Result;
use tracing::info;

use evmvec_fixtures::selectors::{find_collision, DEFAULT_CAP};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let collision = find_collision(DEFAULT_CAP)?;
    info!(
        selector = %collision.selector,
        "same selector: {} && {}",
        collision.signature_a,
        collision.signature_b
    );
    Ok(())
}
