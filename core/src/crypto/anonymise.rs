//! crypto/anonymise.rs
//! Keyed pseudo-anonymisation of IP addresses and EDNS Client Subnet options.
//!
//! Design:
//! - IPv6: the 16 address bytes are one AES block; the ciphertext is the new address
//!   (ipcipher). AES is a permutation, so the mapping is a bijection per key.
//! - IPv4: four bytes are too little input for a 16-byte block on their own. The block
//!   is the address repeated four times and the new address is the first 4 bytes of
//!   the ciphertext. This is not ipcrypt.
//! - OPT RDATA: only the address bytes of ECS options are rewritten. Output length
//!   always equals input length; malformed options end parsing and the remaining
//!   bytes pass through untouched.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder};
use tracing::trace;

use crate::constants::{ecs_family, edns_option, DEFAULT_SALT};
use crate::crypto::block::{Aes128Context, BlockCipherContext};
use crate::crypto::kdf::generate_key;
use crate::crypto::types::{key_from_slice, CryptoError, Key16, BLOCK_LEN};

/// EDNS option header: code (2) + length (2).
pub const OPTION_HEADER_LEN: usize = 4;

/// ECS payload header: family (2) + source prefix (1) + scope prefix (1).
pub const ECS_HEADER_LEN: usize = 4;

/// Number of address bytes carried for a given source prefix length.
#[inline]
pub fn prefix_bytes(source_prefix: u8) -> usize {
    (source_prefix as usize + 7) / 8
}

/// Full address width for an ECS family, if known.
#[inline]
pub fn family_width(family: u16) -> Option<usize> {
    match family {
        ecs_family::IPV4 => Some(4),
        ecs_family::IPV6 => Some(16),
        _ => None,
    }
}

/// Pseudo-anonymises addresses under one fixed key.
#[derive(Clone, Debug)]
pub struct AddressCipher<C: BlockCipherContext = Aes128Context> {
    ctx: C,
}

impl AddressCipher<Aes128Context> {
    /// Use a raw 16-byte key.
    pub fn from_key(key: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self::from(key_from_slice(key)?))
    }

    /// Derive the key from a passphrase and the default salt.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::from_passphrase_with_salt(passphrase, DEFAULT_SALT)
    }

    /// Derive the key from a passphrase and an explicit salt.
    pub fn from_passphrase_with_salt(passphrase: &str, salt: &[u8]) -> Self {
        Self::from(generate_key(passphrase, salt))
    }
}

impl From<Key16> for AddressCipher<Aes128Context> {
    fn from(key: Key16) -> Self {
        Self::with_context(Aes128Context::new(&key))
    }
}

impl TryFrom<&[u8]> for AddressCipher<Aes128Context> {
    type Error = CryptoError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        Self::from_key(key)
    }
}

impl<C: BlockCipherContext> AddressCipher<C> {
    pub fn with_context(ctx: C) -> Self {
        Self { ctx }
    }

    /// Anonymise one address. Deterministic for a fixed key.
    pub fn address(&self, addr: IpAddr) -> IpAddr {
        match addr {
            IpAddr::V4(v4) => IpAddr::V4(self.ipv4(v4)),
            IpAddr::V6(v6) => IpAddr::V6(self.ipv6(v6)),
        }
    }

    pub fn ipv4(&self, addr: Ipv4Addr) -> Ipv4Addr {
        let octets = addr.octets();
        let mut block = [0u8; BLOCK_LEN];
        for chunk in block.chunks_exact_mut(4) {
            chunk.copy_from_slice(&octets);
        }

        let out = self.ctx.encrypt_block(&block);
        Ipv4Addr::new(out[0], out[1], out[2], out[3])
    }

    pub fn ipv6(&self, addr: Ipv6Addr) -> Ipv6Addr {
        Ipv6Addr::from(self.ctx.encrypt_block(&addr.octets()))
    }

    /// Rewrite the prefix bytes of one ECS address field in place.
    ///
    /// `addr` holds the `ceil(source_prefix / 8)` bytes carried on the wire. They are
    /// zero-padded to the family width, anonymised, and truncated back.
    /// Returns `false` (leaving `addr` untouched) when family and prefix do not fit.
    pub fn anonymise_ecs(&self, family: u16, source_prefix: u8, addr: &mut [u8]) -> bool {
        let Some(width) = family_width(family) else {
            return false;
        };
        let n = prefix_bytes(source_prefix);
        if n > width || addr.len() != n {
            return false;
        }

        let mut padded = [0u8; 16];
        padded[..n].copy_from_slice(addr);

        let anon = match family {
            ecs_family::IPV4 => {
                let v4 = Ipv4Addr::new(padded[0], padded[1], padded[2], padded[3]);
                self.ipv4(v4).octets().to_vec()
            }
            _ => self.ipv6(Ipv6Addr::from(padded)).octets().to_vec(),
        };

        addr.copy_from_slice(&anon[..n]);
        true
    }

    /// Anonymise every ECS option found in OPT RDATA.
    ///
    /// Never fails: parsing stops at the first malformed option and the rest of the
    /// buffer is returned as-is.
    pub fn opt_rdata(&self, rdata: &[u8]) -> Vec<u8> {
        let mut out = rdata.to_vec();
        let mut off = 0;

        while off < out.len() {
            if out.len() - off < OPTION_HEADER_LEN {
                trace!(offset = off, "truncated EDNS option header");
                break;
            }

            let code = BigEndian::read_u16(&out[off..off + 2]);
            let len = BigEndian::read_u16(&out[off + 2..off + 4]) as usize;
            let start = off + OPTION_HEADER_LEN;

            if len > out.len() - start {
                trace!(offset = off, code, len, "EDNS option overruns RDATA");
                break;
            }

            if code == edns_option::CLIENT_SUBNET && !self.rewrite_ecs(&mut out[start..start + len]) {
                trace!(offset = off, len, "malformed client subnet option");
                break;
            }

            off = start + len;
        }

        out
    }

    fn rewrite_ecs(&self, data: &mut [u8]) -> bool {
        if data.len() < ECS_HEADER_LEN {
            return false;
        }

        let family = BigEndian::read_u16(&data[0..2]);
        let source_prefix = data[2];
        let n = prefix_bytes(source_prefix);

        match family_width(family) {
            Some(width) if source_prefix as usize <= width * 8 => {}
            _ => return false,
        }
        if ECS_HEADER_LEN + n > data.len() {
            return false;
        }

        self.anonymise_ecs(family, source_prefix, &mut data[ECS_HEADER_LEN..ECS_HEADER_LEN + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_bytes_rounds_up() {
        assert_eq!(prefix_bytes(0), 0);
        assert_eq!(prefix_bytes(1), 1);
        assert_eq!(prefix_bytes(8), 1);
        assert_eq!(prefix_bytes(24), 3);
        assert_eq!(prefix_bytes(25), 4);
        assert_eq!(prefix_bytes(128), 16);
    }

    #[test]
    fn ecs_with_prefix_wider_than_family_is_rejected() {
        let cipher: AddressCipher = AddressCipher::from([7u8; 16]);
        let mut addr = [10, 0, 0, 1, 2];
        assert!(!cipher.anonymise_ecs(ecs_family::IPV4, 40, &mut addr));
        assert_eq!(addr, [10, 0, 0, 1, 2]);
    }

    #[test]
    fn ecs_zero_prefix_is_a_no_op() {
        let cipher: AddressCipher = AddressCipher::from([7u8; 16]);
        let mut addr: [u8; 0] = [];
        assert!(cipher.anonymise_ecs(ecs_family::IPV6, 0, &mut addr));
    }
}
