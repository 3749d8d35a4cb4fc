#[cfg(test)]
mod tests {
    use dnscap_core::constants::DEFAULT_SALT;
    use dnscap_core::crypto::{generate_key, generate_key_default_salt, AddressCipher};
    use std::net::{IpAddr, Ipv6Addr};

    #[test]
    fn test_generate_key_is_deterministic() {
        let k1 = generate_key("some passphrase", DEFAULT_SALT);
        let k2 = generate_key("some passphrase", DEFAULT_SALT);
        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 16);
    }

    // Reference values from hashlib.pbkdf2_hmac('sha1', pw, salt, 50000, 16).
    #[test]
    fn test_generate_key_known_vectors() {
        assert_eq!(
            hex::encode(generate_key("some passphrase", b"cdnscdnscdnscdns")),
            "1beaa033bf1759999a6ba25b4f86472b"
        );
        assert_eq!(
            hex::encode(generate_key("some passphrase", b"ipcipheripcipher")),
            "9866f0ad328a5a77ed58656f8de71818"
        );
    }

    #[test]
    fn test_passphrase_changes_key() {
        let k1 = generate_key("passphrase one", DEFAULT_SALT);
        let k2 = generate_key("passphrase two", DEFAULT_SALT);
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_salt_changes_key() {
        let k1 = generate_key("some passphrase", b"cdnscdnscdnscdns");
        let k2 = generate_key("some passphrase", b"ipcipheripcipher");
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_default_salt_helper_matches_explicit_salt() {
        assert_eq!(
            generate_key_default_salt("some passphrase"),
            generate_key("some passphrase", b"cdnscdnscdnscdns")
        );
    }

    // The passphrase constructor must behave exactly like a raw key produced by
    // generate_key with the default salt.
    #[test]
    fn test_passphrase_cipher_matches_raw_key_cipher() {
        let from_pass = AddressCipher::from_passphrase("some passphrase");
        let from_key: AddressCipher = AddressCipher::from(generate_key("some passphrase", DEFAULT_SALT));

        let addr = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(from_pass.address(addr), from_key.address(addr));
    }
}
