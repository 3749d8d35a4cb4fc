//! dnstap: Frame Streams ingestion of serialized DNS transaction records.
//!
//! Layers: `framing` (pure codec) → `io` (blocking frame reads) → `engine`
//! (state machine). Payload schema is left to a `MessageDecoder`.

pub mod types;
pub mod framing;
pub mod io;
pub mod decoder;
pub mod engine;

pub use types::{
    EngineConfig,
    Mode,
    ProtocolState,
    TapError,
};

pub use decoder::{
    FnDecoder,
    MessageDecoder,
    WireDecoder,
};

pub use engine::FrameProtocolEngine;
