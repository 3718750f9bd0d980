//! ECDSA fixture generation: EIP-191 hashes, a typed-data hash pair, and
//! a deterministic personal-sign signature in both 65-byte and EIP-2098
//! compact form.

use alloy_primitives::{address, keccak256, Address, U256};
use std::path::Path;

use evmvec_core::AbiValue;
use evmvec_sign::{hash_message, typed_data_hash, Eip712Domain, StructType, Wallet};

use crate::error::FixtureError;
use crate::io::write_json;
use crate::records::EcdsaFile;

pub const ECDSA_FILE: &str = "ecdsa.json";

/// The message every signature fixture signs.
pub const FIXTURE_MESSAGE: &str = "Michael.W";

/// The fixture wallet's secret scalar.
pub const FIXTURE_KEY: u64 = 1024;

/// Build the ECDSA fixture record.
pub fn generate() -> Result<EcdsaFile, FixtureError> {
    let wallet = Wallet::from_scalar(U256::from(FIXTURE_KEY))?;

    // Both EIP-191 variants: over the 32 raw digest bytes, and over the
    // message bytes themselves.
    let digest = keccak256(FIXTURE_MESSAGE);
    let eth_signed_msg_hash_from_hash = hash_message(digest);
    let eth_signed_msg_hash_from_bytes = hash_message(FIXTURE_MESSAGE);

    let student = StructType::new("Student", &[("address", "address"), ("age", "uint256")])?;
    let values = [AbiValue::Address(Address::ZERO), AbiValue::from(18u64)];
    let struct_hash = student.struct_hash(&values)?;

    let domain = Eip712Domain::new(
        "test name",
        "1",
        1024,
        address!("7a41fc8b73d6f307830b88878caf48d077128f63"),
    );

    let signature = wallet.sign_message(FIXTURE_MESSAGE)?;

    Ok(EcdsaFile {
        eth_signed_msg_hash_from_hash,
        eth_signed_msg_hash_from_bytes,
        struct_hash,
        typed_data_hash: typed_data_hash(&domain, struct_hash),
        valid_signature: signature.to_hex(),
        compact_signature_r: signature.r(),
        compact_signature_vs: signature.compact_vs(),
    })
}

/// Generate and write `ecdsa.json` under `dir`.
pub fn write(dir: impl AsRef<Path>) -> Result<EcdsaFile, FixtureError> {
    let record = generate()?;
    write_json(dir.as_ref().join(ECDSA_FILE), &record)?;
    Ok(record)
}
