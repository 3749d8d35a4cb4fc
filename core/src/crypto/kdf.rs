//! crypto/kdf.rs
//! Passphrase-based key derivation for address pseudo-anonymisation.
//!
//! Design:
//! - ipcipher key derivation: PBKDF2-HMAC-SHA1(passphrase, salt, 50 000) -> 16 bytes.
//! - The default salt differs from ipcipher (`cdnscdnscdnscdns`), everything else matches,
//!   so keys are reproducible by any other ipcipher implementation given the same salt.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

use crate::constants::{DEFAULT_SALT, KDF_ROUNDS, KEY_LEN_16};
use crate::crypto::types::Key16;

/// Derive a 16-byte key from a passphrase and salt.
#[inline]
pub fn generate_key(passphrase: &str, salt: &[u8]) -> Key16 {
    derive_key(passphrase.as_bytes(), salt, KDF_ROUNDS)
}

/// Derive a 16-byte key from a passphrase with the toolkit default salt.
#[inline]
pub fn generate_key_default_salt(passphrase: &str) -> Key16 {
    generate_key(passphrase, DEFAULT_SALT)
}

pub(crate) fn derive_key(password: &[u8], salt: &[u8], rounds: u32) -> Key16 {
    let mut key = [0u8; KEY_LEN_16];
    pbkdf2_hmac::<Sha1>(password, salt, rounds, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 6070 vector 3 (c = 4096), truncated to our 16-byte output.
    #[test]
    fn rfc6070_vector_truncated() {
        let key = derive_key(b"password", b"salt", 4096);
        assert_eq!(
            key,
            [
                0x4b, 0x00, 0x79, 0x01, 0xb7, 0x65, 0x48, 0x9a,
                0xbe, 0xad, 0x49, 0xd9, 0x26, 0xf7, 0x21, 0xd0,
            ]
        );
    }

    // RFC 6070 vector 1 (c = 1).
    #[test]
    fn rfc6070_single_round() {
        let key = derive_key(b"password", b"salt", 1);
        assert_eq!(&key[..4], &[0x0c, 0x60, 0xc8, 0x0f]);
    }
}
