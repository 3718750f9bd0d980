//! secp256k1 wallet with recoverable Ethereum signatures.

use alloy_primitives::{keccak256, Address, B256, U256};
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;

use crate::eip191::hash_message;
use crate::error::SignError;

/// An Ethereum signature: `r || s || v` with `v` in {27, 28}.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EthSignature {
    r: B256,
    s: B256,
    v: u8,
}

impl EthSignature {
    /// The `r` component.
    pub fn r(&self) -> B256 {
        self.r
    }

    /// The `s` component.
    pub fn s(&self) -> B256 {
        self.s
    }

    /// The recovery byte, 27 or 28.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The recovery parity bit.
    pub fn y_parity(&self) -> bool {
        self.v == 28
    }

    /// The 65-byte `r || s || v` form.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes[..32].copy_from_slice(self.r.as_slice());
        bytes[32..64].copy_from_slice(self.s.as_slice());
        bytes[64] = self.v;
        bytes
    }

    /// Parse the 65-byte form.
    pub fn from_bytes(bytes: [u8; 65]) -> Result<Self, SignError> {
        let v = bytes[64];
        if v != 27 && v != 28 {
            return Err(SignError::InvalidSignature(format!(
                "recovery byte {v} not in {{27, 28}}"
            )));
        }
        Ok(Self {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..64]),
            v,
        })
    }

    /// Convert to a `0x`-prefixed lowercase hex string (65 bytes).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// The EIP-2098 `yParityAndS` word: `s` with the parity in the top bit.
    ///
    /// Valid because `s` is always in the lower half of the curve order,
    /// leaving its top bit free.
    pub fn compact_vs(&self) -> B256 {
        let mut vs = self.s;
        if self.y_parity() {
            vs.0[0] |= 0x80;
        }
        vs
    }
}

impl fmt::Debug for EthSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthSignature({}...)", &self.to_hex()[..18])
    }
}

/// A secp256k1 signing key with its Ethereum address.
#[derive(Clone)]
pub struct Wallet {
    signing_key: SigningKey,
}

impl Wallet {
    /// Generate a new random wallet.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::random(&mut rng),
        }
    }

    /// Create from a secret scalar (e.g. the fixture key `1024`).
    pub fn from_scalar(scalar: U256) -> Result<Self, SignError> {
        Self::from_slice(&scalar.to_be_bytes::<32>())
    }

    /// Create from 32 secret bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignError> {
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| SignError::InvalidKey)?;
        Ok(Self { signing_key })
    }

    /// The wallet's Ethereum address.
    pub fn address(&self) -> Address {
        address_of(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte prehash, producing a recoverable signature.
    ///
    /// RFC 6979 makes this deterministic for a fixed key and hash.
    pub fn sign_hash(&self, hash: B256) -> Result<EthSignature, SignError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(hash.as_slice())
            .map_err(|e| SignError::Signing(e.to_string()))?;

        let bytes = signature.to_bytes();
        Ok(EthSignature {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..]),
            v: 27 + recovery_id.to_byte(),
        })
    }

    /// Sign a message under the EIP-191 personal prefix.
    pub fn sign_message(&self, message: impl AsRef<[u8]>) -> Result<EthSignature, SignError> {
        self.sign_hash(hash_message(message))
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet({})", self.address())
    }
}

/// Recover the signer address of a prehash signature.
pub fn recover_address(hash: B256, signature: &EthSignature) -> Result<Address, SignError> {
    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(signature.r().as_slice());
    bytes[32..].copy_from_slice(signature.s().as_slice());

    let ecdsa = EcdsaSignature::from_slice(&bytes)
        .map_err(|e| SignError::InvalidSignature(e.to_string()))?;
    let recovery_id = RecoveryId::from_byte(signature.v() - 27)
        .ok_or_else(|| SignError::InvalidSignature("bad recovery byte".to_string()))?;

    let verifying_key = VerifyingKey::recover_from_prehash(hash.as_slice(), &ecdsa, recovery_id)
        .map_err(|e| SignError::InvalidSignature(e.to_string()))?;
    Ok(address_of(&verifying_key))
}

/// `keccak256(uncompressed_pubkey[1..])[12..]`.
fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
