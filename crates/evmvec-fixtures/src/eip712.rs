//! EIP-712 fixture generation: domain separators and a signed `NameCard`.

use alloy_primitives::{address, U256};
use std::path::Path;

use evmvec_core::AbiValue;
use evmvec_sign::{Eip712Domain, StructType, Wallet};

use crate::ecdsa::FIXTURE_KEY;
use crate::error::FixtureError;
use crate::io::write_json;
use crate::records::{Eip712File, NameCardValue};

pub const EIP712_FILE: &str = "eip712.json";

/// The fixture signing domain.
pub fn fixture_domain() -> Eip712Domain {
    Eip712Domain::new(
        "mock name",
        "1",
        1024,
        address!("fc1a36b3ef056c2ec89fdeb4251e90f7935f1b51"),
    )
}

/// Build the EIP-712 fixture record.
pub fn generate() -> Result<Eip712File, FixtureError> {
    let domain = fixture_domain();
    let mut changed = domain.clone();
    changed.chain_id = 2048;

    let card = StructType::new(
        "NameCard",
        &[
            ("name", "string"),
            ("salary", "uint256"),
            ("personalAddress", "address"),
        ],
    )?;
    let value = NameCardValue {
        name: "Michael.W".to_string(),
        salary: 1024,
        personal_address: address!("0000000000000000000000000000000000000400"),
    };
    let values = [
        AbiValue::from(value.name.as_str()),
        AbiValue::from(value.salary),
        AbiValue::Address(value.personal_address),
    ];

    let wallet = Wallet::from_scalar(U256::from(FIXTURE_KEY))?;
    let signature = wallet.sign_typed_data(&domain, &card, &values)?;

    Ok(Eip712File {
        domain_separator: domain.separator(),
        domain_separator_with_chain_id_changed: changed.separator(),
        value,
        signature: signature.to_hex(),
        signer_address: wallet.address(),
    })
}

/// Generate and write `eip712.json` under `dir`.
pub fn write(dir: impl AsRef<Path>) -> Result<Eip712File, FixtureError> {
    let record = generate()?;
    write_json(dir.as_ref().join(EIP712_FILE), &record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_deterministic() {
        assert_eq!(generate().unwrap(), generate().unwrap());
    }

    #[test]
    fn chain_id_change_moves_the_separator() {
        let record = generate().unwrap();
        assert_ne!(
            record.domain_separator,
            record.domain_separator_with_chain_id_changed
        );
    }

    #[test]
    fn signer_address_matches_the_fixture_wallet() {
        let record = generate().unwrap();
        let wallet = Wallet::from_scalar(U256::from(FIXTURE_KEY)).unwrap();
        assert_eq!(record.signer_address, wallet.address());
    }

    #[test]
    fn value_echoes_the_signed_struct() {
        let record = generate().unwrap();
        assert_eq!(record.value.name, "Michael.W");
        assert_eq!(record.value.salary, 1024);
        assert_eq!(
            record.value.personal_address,
            address!("0000000000000000000000000000000000000400")
        );
    }
}
