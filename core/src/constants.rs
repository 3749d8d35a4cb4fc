/// Pseudo-anonymisation key length (AES-128).
pub const KEY_LEN_16: usize = 16;

/// AES block length.
pub const BLOCK_LEN: usize = 16;

/// Default salt for passphrase key derivation.
/// ipcipher uses `ipcipheripcipher`; captures written by this toolkit use this one.
pub const DEFAULT_SALT: &[u8; 16] = b"cdnscdnscdnscdns";

/// PBKDF2-HMAC-SHA1 iteration count fixed by ipcipher.
pub const KDF_ROUNDS: u32 = 50_000;

/// EDNS0 option codes (mirrored in the anonymiser).
pub mod edns_option {
    pub const CLIENT_SUBNET: u16 = 8;
}

/// ECS address family numbers (IANA address family registry).
pub mod ecs_family {
    pub const IPV4: u16 = 1;
    pub const IPV6: u16 = 2;
}

/// Frame Streams protocol constants.
pub mod fstrm {
    /// Data frame length value that escapes a control frame.
    pub const ESCAPE: u32 = 0;

    /// Control frame length upper bound (type + fields).
    pub const MAX_CONTROL_FRAME_LEN: u32 = 512;

    /// Content type string upper bound.
    pub const MAX_CONTENT_TYPE_LEN: u32 = 256;

    /// Control field type carrying a content type string.
    pub const FIELD_CONTENT_TYPE: u32 = 0x01;

    /// Content type spoken by dnstap senders.
    pub const DNSTAP_CONTENT_TYPE: &str = "protobuf:dnstap.Dnstap";
}

/// Defaults when the engine config is not customised.
pub const DEFAULT_MAX_DATA_FRAME_LEN: u32 = 1024 * 1024; // 1 MiB
