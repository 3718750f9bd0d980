//! 4-byte function selectors.
//!
//! A selector is the first 4 bytes of `keccak256(function_signature)`,
//! where the signature is the canonical form `name(type1,type2,...)`.

use alloy_primitives::keccak256;
use std::fmt;

/// A 4-byte function selector.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    /// Compute the selector of a canonical function signature.
    pub fn from_signature(signature: &str) -> Self {
        let digest = keccak256(signature.as_bytes());
        Self([digest[0], digest[1], digest[2], digest[3]])
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert to a `0x`-prefixed lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from a hex string, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;
        if bytes.len() != 4 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selectors() {
        assert_eq!(
            Selector::from_signature("transfer(address,uint256)").to_hex(),
            "0xa9059cbb"
        );
        assert_eq!(
            Selector::from_signature("implementation()").to_hex(),
            "0x5c60da1b"
        );
        assert_eq!(
            Selector::from_signature("upgradeTo(address)").to_hex(),
            "0x3659cfe6"
        );
    }

    #[test]
    fn hex_roundtrip() {
        let selector = Selector::from_signature("proxy0(uint256)");
        let recovered = Selector::from_hex(&selector.to_hex()).unwrap();
        assert_eq!(selector, recovered);
    }

    #[test]
    fn rejects_wrong_length_hex() {
        assert!(Selector::from_hex("0xa9059c").is_err());
        assert!(Selector::from_hex("0xa9059cbb00").is_err());
    }

    #[test]
    fn signature_spacing_matters() {
        // Canonical signatures have no spaces; a non-canonical form hashes
        // to a different selector.
        assert_ne!(
            Selector::from_signature("transfer(address,uint256)"),
            Selector::from_signature("transfer(address, uint256)")
        );
    }
}
