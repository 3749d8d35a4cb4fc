//! crypto/block.rs
//! Single-block cipher capability used by the address anonymiser.
//!
//! Design notes:
//! - The anonymiser only ever needs one block permutation, never a mode of operation.
//! - The key schedule is expanded once at construction; encryption takes `&self`,
//!   so a context can be shared across threads without locking.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;

use crate::crypto::types::{key_from_slice, Block, CryptoError, Key16, BLOCK_LEN};

/// A keyed 128-bit block permutation.
pub trait BlockCipherContext: Send + Sync {
    /// Encrypt exactly one 16-byte block.
    fn encrypt_block(&self, block: &Block) -> Block;
}

/// AES-128 backed block context.
#[derive(Clone)]
pub struct Aes128Context {
    cipher: Aes128,
}

impl Aes128Context {
    pub fn new(key: &Key16) -> Self {
        Self {
            cipher: Aes128::new(GenericArray::from_slice(key)),
        }
    }

    /// Construct from untrusted key material.
    pub fn from_slice(key: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self::new(&key_from_slice(key)?))
    }
}

impl BlockCipherContext for Aes128Context {
    #[inline]
    fn encrypt_block(&self, block: &Block) -> Block {
        let mut buf = GenericArray::clone_from_slice(block);
        self.cipher.encrypt_block(&mut buf);

        let mut out = [0u8; BLOCK_LEN];
        out.copy_from_slice(&buf);
        out
    }
}

impl std::fmt::Debug for Aes128Context {
    // Never print key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Aes128Context { .. }")
    }
}
