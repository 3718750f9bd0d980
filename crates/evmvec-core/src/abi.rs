//! Runtime-typed ABI values and strict schema-driven encoding.
//!
//! Fixture inputs are ordered tuples of typed values plus a parallel list
//! of Solidity type tags (e.g. `["address", "uint256"]`). This module
//! parses the tags, checks values against them, and produces the standard
//! ABI encoding of the tuple.
//!
//! The encoding is critical: the downstream contract test suite recomputes
//! every digest on-chain from the same bytes, so the output of [`encode`]
//! must match `abi.encode(...)` exactly.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, B256, U256};

use crate::error::AbiError;

/// A runtime-typed value that can be ABI-encoded against a schema.
///
/// Covers the types the fixture formats use. Tuples, arrays, and signed
/// integers are rejected at schema-parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// A 20-byte account address.
    Address(Address),
    /// An unsigned integer up to 256 bits.
    Uint(U256),
    /// A boolean.
    Bool(bool),
    /// A UTF-8 string (dynamic).
    String(String),
    /// A dynamic byte string.
    Bytes(Vec<u8>),
    /// A 32-byte word (`bytes32`).
    FixedBytes(B256),
}

impl AbiValue {
    /// Short name of the value's own type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Uint(_) => "uint",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::FixedBytes(_) => "bytes32",
        }
    }

    /// Convert to an [`DynSolValue`] under the declared type.
    ///
    /// Returns `None` when the value does not fit the type, including
    /// uints wider than the declared bit size.
    pub fn to_sol(&self, ty: &DynSolType) -> Option<DynSolValue> {
        match (self, ty) {
            (Self::Address(a), DynSolType::Address) => Some(DynSolValue::Address(*a)),
            (Self::Uint(v), DynSolType::Uint(bits)) => {
                if *bits < 256 && v.bit_len() > *bits {
                    return None;
                }
                Some(DynSolValue::Uint(*v, *bits))
            }
            (Self::Bool(b), DynSolType::Bool) => Some(DynSolValue::Bool(*b)),
            (Self::String(s), DynSolType::String) => Some(DynSolValue::String(s.clone())),
            (Self::Bytes(b), DynSolType::Bytes) => Some(DynSolValue::Bytes(b.clone())),
            (Self::FixedBytes(w), DynSolType::FixedBytes(size)) if *size == 32 => {
                Some(DynSolValue::FixedBytes(*w, 32))
            }
            _ => None,
        }
    }

    /// Render as a portable JSON value.
    ///
    /// Addresses and byte strings render as lowercase `0x` hex. Uints
    /// render as JSON numbers when they fit in a u64 (matching the
    /// fixture files' literals) and as `0x` hex strings otherwise.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Address(a) => serde_json::Value::String(format!("{a:#x}")),
            Self::Uint(v) => {
                if *v <= U256::from(u64::MAX) {
                    serde_json::Value::Number(v.to::<u64>().into())
                } else {
                    serde_json::Value::String(format!("{v:#x}"))
                }
            }
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Bytes(b) => serde_json::Value::String(format!("0x{}", hex::encode(b))),
            Self::FixedBytes(w) => serde_json::Value::String(format!("{w:#x}")),
        }
    }

    /// Interpret a portable JSON value under the declared type.
    ///
    /// This is the load-side inverse of [`AbiValue::to_json`]: the JSON
    /// carries no type information of its own, so the schema decides how
    /// each value is read.
    pub fn from_json(value: &serde_json::Value, ty: &DynSolType) -> Result<Self, AbiError> {
        let conversion = |expected: &DynSolType| AbiError::ValueConversion {
            expected: expected.sol_type_name().into_owned(),
            value: value.to_string(),
        };

        match ty {
            DynSolType::Address => {
                let s = value.as_str().ok_or_else(|| conversion(ty))?;
                let address = s.parse::<Address>().map_err(|_| conversion(ty))?;
                Ok(Self::Address(address))
            }
            DynSolType::Uint(_) => match value {
                serde_json::Value::Number(n) => {
                    let n = n.as_u64().ok_or_else(|| conversion(ty))?;
                    Ok(Self::Uint(U256::from(n)))
                }
                serde_json::Value::String(s) => {
                    let parsed = match s.strip_prefix("0x") {
                        Some(hex_digits) => U256::from_str_radix(hex_digits, 16),
                        None => U256::from_str_radix(s, 10),
                    };
                    parsed.map(Self::Uint).map_err(|_| conversion(ty))
                }
                _ => Err(conversion(ty)),
            },
            DynSolType::Bool => value.as_bool().map(Self::Bool).ok_or_else(|| conversion(ty)),
            DynSolType::String => value
                .as_str()
                .map(|s| Self::String(s.to_string()))
                .ok_or_else(|| conversion(ty)),
            DynSolType::Bytes => {
                let s = value.as_str().ok_or_else(|| conversion(ty))?;
                let hex_digits = s.strip_prefix("0x").ok_or_else(|| conversion(ty))?;
                let bytes = hex::decode(hex_digits).map_err(|_| conversion(ty))?;
                Ok(Self::Bytes(bytes))
            }
            DynSolType::FixedBytes(32) => {
                let s = value.as_str().ok_or_else(|| conversion(ty))?;
                let word = s.parse::<B256>().map_err(|_| conversion(ty))?;
                Ok(Self::FixedBytes(word))
            }
            other => Err(AbiError::UnsupportedType(
                other.sol_type_name().into_owned(),
            )),
        }
    }
}

impl From<Address> for AbiValue {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

impl From<U256> for AbiValue {
    fn from(v: U256) -> Self {
        Self::Uint(v)
    }
}

impl From<u64> for AbiValue {
    fn from(v: u64) -> Self {
        Self::Uint(U256::from(v))
    }
}

impl From<&str> for AbiValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for AbiValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Parse a list of Solidity type tags into a schema.
///
/// Only the value types the fixture formats use are accepted; composite
/// and signed types fail with [`AbiError::UnsupportedType`].
pub fn parse_schema<S: AsRef<str>>(tags: &[S]) -> Result<Vec<DynSolType>, AbiError> {
    tags.iter()
        .map(|tag| {
            let tag = tag.as_ref();
            let ty = DynSolType::parse(tag).map_err(|e| AbiError::InvalidTypeTag {
                tag: tag.to_string(),
                reason: e.to_string(),
            })?;
            match ty {
                DynSolType::Address
                | DynSolType::Bool
                | DynSolType::String
                | DynSolType::Bytes
                | DynSolType::Uint(_)
                | DynSolType::FixedBytes(_) => Ok(ty),
                other => Err(AbiError::UnsupportedType(
                    other.sol_type_name().into_owned(),
                )),
            }
        })
        .collect()
}

/// ABI-encode a tuple of values against its schema.
///
/// Schema arity must match value arity exactly; every value must fit its
/// declared type. Produces the same bytes as `abi.encode(...)` on-chain.
pub fn encode(values: &[AbiValue], schema: &[DynSolType]) -> Result<Vec<u8>, AbiError> {
    if values.len() != schema.len() {
        return Err(AbiError::EncodingMismatch {
            expected: schema.len(),
            got: values.len(),
        });
    }

    let mut fields = Vec::with_capacity(values.len());
    for (index, (value, ty)) in values.iter().zip(schema).enumerate() {
        let field = value.to_sol(ty).ok_or_else(|| AbiError::TypeMismatch {
            index,
            expected: ty.sol_type_name().into_owned(),
            got: value.type_name().to_string(),
        })?;
        fields.push(field);
    }

    Ok(DynSolValue::Tuple(fields).abi_encode_params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn encode_address_uint_pair() {
        let schema = parse_schema(&["address", "uint256"]).unwrap();
        let values = [
            AbiValue::Address(address!("0000000000000000000000000000000000000001")),
            AbiValue::from(10_000u64),
        ];

        let encoded = encode(&values, &schema).unwrap();
        assert_eq!(
            hex::encode(&encoded),
            "0000000000000000000000000000000000000000000000000000000000000001\
             0000000000000000000000000000000000000000000000000000000000002710"
        );
    }

    #[test]
    fn encode_dynamic_string() {
        let schema = parse_schema(&["string"]).unwrap();
        let values = [AbiValue::from("abc")];

        let encoded = encode(&values, &schema).unwrap();
        assert_eq!(
            hex::encode(&encoded),
            "0000000000000000000000000000000000000000000000000000000000000020\
             0000000000000000000000000000000000000000000000000000000000000003\
             6162630000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn encode_rejects_arity_mismatch() {
        let schema = parse_schema(&["address", "uint256"]).unwrap();
        let values = [AbiValue::from(1u64)];

        let result = encode(&values, &schema);
        assert!(matches!(
            result,
            Err(AbiError::EncodingMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn encode_rejects_type_mismatch() {
        let schema = parse_schema(&["address"]).unwrap();
        let values = [AbiValue::from(true)];

        let result = encode(&values, &schema);
        assert!(matches!(result, Err(AbiError::TypeMismatch { index: 0, .. })));
    }

    #[test]
    fn encode_rejects_uint_out_of_declared_width() {
        let schema = parse_schema(&["uint8"]).unwrap();
        let values = [AbiValue::from(256u64)];

        let result = encode(&values, &schema);
        assert!(matches!(result, Err(AbiError::TypeMismatch { .. })));
    }

    #[test]
    fn parse_schema_rejects_bad_tags() {
        assert!(matches!(
            parse_schema(&["uint257"]),
            Err(AbiError::InvalidTypeTag { .. })
        ));
        assert!(matches!(
            parse_schema(&["int256"]),
            Err(AbiError::UnsupportedType(_))
        ));
        assert!(matches!(
            parse_schema(&["(address,uint256)"]),
            Err(AbiError::UnsupportedType(_))
        ));
    }

    #[test]
    fn json_roundtrip_per_type() {
        let cases = [
            ("address", AbiValue::Address(address!("0000000000000000000000000000000000000402"))),
            ("uint256", AbiValue::from(60_000u64)),
            ("bool", AbiValue::from(true)),
            ("string", AbiValue::from("Michael.W")),
            ("bytes", AbiValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef])),
            ("bytes32", AbiValue::FixedBytes(B256::repeat_byte(0xab))),
        ];

        for (tag, value) in cases {
            let ty = &parse_schema(&[tag]).unwrap()[0];
            let json = value.to_json();
            let back = AbiValue::from_json(&json, ty).unwrap();
            assert_eq!(back, value, "roundtrip failed for {tag}");
        }
    }

    #[test]
    fn json_uint_accepts_number_decimal_and_hex() {
        let ty = &parse_schema(&["uint256"]).unwrap()[0];

        for raw in [
            serde_json::json!(10_000),
            serde_json::json!("10000"),
            serde_json::json!("0x2710"),
        ] {
            let value = AbiValue::from_json(&raw, ty).unwrap();
            assert_eq!(value, AbiValue::from(10_000u64));
        }
    }

    #[test]
    fn json_large_uint_renders_as_hex_string() {
        let big = U256::from(u64::MAX) + U256::from(1);
        let json = AbiValue::Uint(big).to_json();
        assert_eq!(json, serde_json::json!("0x10000000000000000"));
    }

    #[test]
    fn json_rejects_wrong_shape() {
        let ty = &parse_schema(&["address"]).unwrap()[0];
        let result = AbiValue::from_json(&serde_json::json!(42), ty);
        assert!(matches!(result, Err(AbiError::ValueConversion { .. })));
    }
}
