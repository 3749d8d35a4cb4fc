//! dnscap-core
//!
//! Frame Streams (dnstap) ingestion and keyed IP address pseudo-anonymisation
//! for DNS traffic capture.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod utils;

pub mod crypto;
pub mod telemetry;

// Stream layers
pub mod dnstap;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{generate_key, AddressCipher, Aes128Context, BlockCipherContext, CryptoError};
    pub use crate::dnstap::{
        EngineConfig, FrameProtocolEngine, MessageDecoder, Mode, TapError, WireDecoder,
    };
    pub use crate::telemetry::TelemetrySnapshot;
}
