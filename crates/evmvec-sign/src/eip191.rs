//! EIP-191 personal message hashing.

use alloy_primitives::{keccak256, B256};

/// The EIP-191 version 0x45 prefix.
pub const MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Hash a message the way `personal_sign` does:
/// `keccak256(prefix || message_length || message)`.
///
/// The length is the decimal byte count of the message, so hashing a
/// 32-byte digest and hashing its hex rendering give different results.
pub fn hash_message(message: impl AsRef<[u8]>) -> B256 {
    let message = message.as_ref();
    let length = message.len().to_string();

    let mut buf = Vec::with_capacity(MESSAGE_PREFIX.len() + length.len() + message.len());
    buf.extend_from_slice(MESSAGE_PREFIX.as_bytes());
    buf.extend_from_slice(length.as_bytes());
    buf.extend_from_slice(message);
    keccak256(buf)
}
