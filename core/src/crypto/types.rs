use thiserror::Error;

pub use crate::constants::{BLOCK_LEN, KEY_LEN_16};

/// A raw AES-128 key.
pub type Key16 = [u8; KEY_LEN_16];

/// A single cipher block.
pub type Block = [u8; BLOCK_LEN];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Key material is not exactly 16 bytes.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

/// Copy key material into a fixed-size key, rejecting anything but 16 bytes.
#[inline]
pub fn key_from_slice(key: &[u8]) -> Result<Key16, CryptoError> {
    key.try_into().map_err(|_| CryptoError::InvalidKeyLength {
        expected: KEY_LEN_16,
        actual: key.len(),
    })
}
