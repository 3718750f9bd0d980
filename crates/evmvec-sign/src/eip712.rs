//! EIP-712 typed-data hashing.
//!
//! Supports the shape the fixtures need: a four-field domain and
//! single-level struct types whose fields are value types (dynamic
//! `string`/`bytes` fields hash to their keccak digest, per the
//! standard). Nested structs and arrays are out of scope.

use alloy_dyn_abi::DynSolType;
use alloy_primitives::{keccak256, Address, B256, U256};

use evmvec_core::{abi, AbiError, AbiValue};

use crate::error::SignError;
use crate::wallet::{EthSignature, Wallet};

/// The canonical `EIP712Domain` type string for the four-field domain.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// An EIP-712 signing domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl Eip712Domain {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }

    /// The domain separator: `hashStruct` of the domain itself.
    pub fn separator(&self) -> B256 {
        let mut buf = Vec::with_capacity(5 * 32);
        buf.extend_from_slice(keccak256(DOMAIN_TYPE).as_slice());
        buf.extend_from_slice(keccak256(self.name.as_bytes()).as_slice());
        buf.extend_from_slice(keccak256(self.version.as_bytes()).as_slice());
        buf.extend_from_slice(&U256::from(self.chain_id).to_be_bytes::<32>());
        buf.extend_from_slice(
            B256::left_padding_from(self.verifying_contract.as_slice()).as_slice(),
        );
        keccak256(buf)
    }
}

/// A named field of a struct type.
#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    tag: String,
    ty: DynSolType,
}

/// A single-level EIP-712 struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    name: String,
    fields: Vec<Field>,
}

impl StructType {
    /// Define a struct type from `(field_name, type_tag)` pairs.
    pub fn new<S: AsRef<str>>(name: &str, fields: &[(S, S)]) -> Result<Self, SignError> {
        let mut parsed = Vec::with_capacity(fields.len());
        for (field_name, tag) in fields {
            let ty = abi::parse_schema(std::slice::from_ref(tag))?.remove(0);
            parsed.push(Field {
                name: field_name.as_ref().to_string(),
                tag: tag.as_ref().to_string(),
                ty,
            });
        }
        Ok(Self {
            name: name.to_string(),
            fields: parsed,
        })
    }

    /// The canonical type string, e.g. `Student(address address,uint256 age)`.
    pub fn encode_type(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|f| format!("{} {}", f.tag, f.name))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.name, fields)
    }

    /// keccak256 of the canonical type string.
    pub fn type_hash(&self) -> B256 {
        keccak256(self.encode_type())
    }

    /// `hashStruct`: keccak256 of the type hash followed by one encoded
    /// word per field.
    pub fn struct_hash(&self, values: &[AbiValue]) -> Result<B256, SignError> {
        if values.len() != self.fields.len() {
            return Err(SignError::Abi(AbiError::EncodingMismatch {
                expected: self.fields.len(),
                got: values.len(),
            }));
        }

        let mut buf = Vec::with_capacity((1 + values.len()) * 32);
        buf.extend_from_slice(self.type_hash().as_slice());
        for (index, (field, value)) in self.fields.iter().zip(values).enumerate() {
            let word = encode_field(value, &field.ty).ok_or_else(|| {
                SignError::Abi(AbiError::TypeMismatch {
                    index,
                    expected: field.tag.clone(),
                    got: value.type_name().to_string(),
                })
            })?;
            buf.extend_from_slice(word.as_slice());
        }
        Ok(keccak256(buf))
    }
}

/// Encode one field value to its 32-byte EIP-712 representation.
fn encode_field(value: &AbiValue, ty: &DynSolType) -> Option<B256> {
    match (value, ty) {
        (AbiValue::Address(a), DynSolType::Address) => Some(B256::left_padding_from(a.as_slice())),
        (AbiValue::Uint(v), DynSolType::Uint(bits)) => {
            if *bits < 256 && v.bit_len() > *bits {
                return None;
            }
            Some(B256::from(v.to_be_bytes::<32>()))
        }
        (AbiValue::Bool(b), DynSolType::Bool) => Some(B256::with_last_byte(*b as u8)),
        (AbiValue::String(s), DynSolType::String) => Some(keccak256(s.as_bytes())),
        (AbiValue::Bytes(b), DynSolType::Bytes) => Some(keccak256(b)),
        (AbiValue::FixedBytes(w), DynSolType::FixedBytes(size)) if *size == 32 => Some(*w),
        _ => None,
    }
}

/// The EIP-712 digest: `keccak256(0x19 0x01 || separator || struct_hash)`.
pub fn typed_data_hash(domain: &Eip712Domain, struct_hash: B256) -> B256 {
    let mut buf = Vec::with_capacity(2 + 2 * 32);
    buf.extend_from_slice(&[0x19, 0x01]);
    buf.extend_from_slice(domain.separator().as_slice());
    buf.extend_from_slice(struct_hash.as_slice());
    keccak256(buf)
}

impl Wallet {
    /// Sign typed data: hash the struct under the domain, then sign.
    pub fn sign_typed_data(
        &self,
        domain: &Eip712Domain,
        struct_type: &StructType,
        values: &[AbiValue],
    ) -> Result<EthSignature, SignError> {
        let digest = typed_data_hash(domain, struct_type.struct_hash(values)?);
        self.sign_hash(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::recover_address;
    use alloy_primitives::address;

    fn fixture_domain() -> Eip712Domain {
        Eip712Domain::new(
            "test name",
            "1",
            1024,
            address!("7a41fc8b73d6f307830b88878caf48d077128f63"),
        )
    }

    fn name_card() -> StructType {
        StructType::new(
            "NameCard",
            &[
                ("name", "string"),
                ("salary", "uint256"),
                ("personalAddress", "address"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn domain_type_hash_matches_standard_constant() {
        assert_eq!(
            format!("{:#x}", keccak256(DOMAIN_TYPE)),
            "0x8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f"
        );
    }

    #[test]
    fn encode_type_is_canonical() {
        assert_eq!(
            name_card().encode_type(),
            "NameCard(string name,uint256 salary,address personalAddress)"
        );

        let student =
            StructType::new("Student", &[("address", "address"), ("age", "uint256")]).unwrap();
        assert_eq!(student.encode_type(), "Student(address address,uint256 age)");
    }

    #[test]
    fn separator_changes_with_chain_id() {
        let domain = fixture_domain();
        let mut other = domain.clone();
        other.chain_id = 2048;

        assert_ne!(domain.separator(), other.separator());
    }

    #[test]
    fn struct_hash_is_deterministic_and_value_sensitive() {
        let card = name_card();
        let values = [
            AbiValue::from("Michael.W"),
            AbiValue::from(1024u64),
            AbiValue::Address(address!("0000000000000000000000000000000000000400")),
        ];

        assert_eq!(
            card.struct_hash(&values).unwrap(),
            card.struct_hash(&values).unwrap()
        );

        let mut other = values.clone();
        other[0] = AbiValue::from("Michael.X");
        assert_ne!(
            card.struct_hash(&values).unwrap(),
            card.struct_hash(&other).unwrap()
        );
    }

    #[test]
    fn struct_hash_rejects_arity_mismatch() {
        let result = name_card().struct_hash(&[AbiValue::from("Michael.W")]);
        assert!(matches!(
            result,
            Err(SignError::Abi(AbiError::EncodingMismatch { .. }))
        ));
    }

    #[test]
    fn struct_hash_rejects_type_mismatch() {
        let result = name_card().struct_hash(&[
            AbiValue::from(true),
            AbiValue::from(1024u64),
            AbiValue::Address(Address::ZERO),
        ]);
        assert!(matches!(
            result,
            Err(SignError::Abi(AbiError::TypeMismatch { index: 0, .. }))
        ));
    }

    #[test]
    fn typed_data_hash_binds_domain_and_struct() {
        let card = name_card();
        let values = [
            AbiValue::from("Michael.W"),
            AbiValue::from(1024u64),
            AbiValue::Address(address!("0000000000000000000000000000000000000400")),
        ];
        let struct_hash = card.struct_hash(&values).unwrap();

        let digest = typed_data_hash(&fixture_domain(), struct_hash);
        assert_ne!(digest, struct_hash);

        let mut other_domain = fixture_domain();
        other_domain.chain_id = 2048;
        assert_ne!(digest, typed_data_hash(&other_domain, struct_hash));
    }

    #[test]
    fn typed_data_signature_recovers_signer() {
        let wallet = Wallet::from_scalar(U256::from(1024u64)).unwrap();
        let card = name_card();
        let values = [
            AbiValue::from("Michael.W"),
            AbiValue::from(1024u64),
            AbiValue::Address(address!("0000000000000000000000000000000000000400")),
        ];

        let signature = wallet
            .sign_typed_data(&fixture_domain(), &card, &values)
            .unwrap();
        let digest = typed_data_hash(&fixture_domain(), card.struct_hash(&values).unwrap());

        assert_eq!(recover_address(digest, &signature).unwrap(), wallet.address());
    }
}
