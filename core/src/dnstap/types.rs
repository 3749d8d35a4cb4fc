use std::io;

use thiserror::Error;

use crate::constants::fstrm::DNSTAP_CONTENT_TYPE;
use crate::constants::DEFAULT_MAX_DATA_FRAME_LEN;
use crate::dnstap::framing::FrameError;

/// Frame stream error. Every variant aborts the stream.
#[derive(Debug, Error)]
pub enum TapError {
    /// Control frame unknown, malformed, out of bounds, or unexpected in the current state.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// End of stream inside a frame.
    #[error("truncated frame: expected {expected} bytes, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },

    /// The decoder rejected a data frame payload.
    #[error("malformed message: {0}")]
    MalformedMessage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("stream I/O error: {0}")]
    StreamIo(#[from] io::Error),
}

impl From<FrameError> for TapError {
    fn from(e: FrameError) -> Self {
        TapError::ProtocolViolation(e.to_string())
    }
}

/// Transport direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Files and pipes: no handshake, no replies.
    #[default]
    Unidirectional,
    /// Sockets: READY/ACCEPT/START handshake and STOP/FINISH shutdown.
    Bidirectional,
}

/// Per-stream protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolState {
    /// Waiting for READY or START from the sender.
    AwaitingHandshake,
    /// ACCEPT sent in reply to READY; waiting for START.
    AwaitingStart,
    Streaming,
    Finished,
}

impl ProtocolState {
    pub fn initial(mode: Mode) -> Self {
        match mode {
            Mode::Unidirectional => ProtocolState::Streaming,
            Mode::Bidirectional => ProtocolState::AwaitingHandshake,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub mode: Mode,

    /// Content type offered in READY/START and echoed in ACCEPT.
    pub content_type: String,

    /// Data frames longer than this are rejected before any payload is read.
    pub max_data_frame_len: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            content_type: DNSTAP_CONTENT_TYPE.to_string(),
            max_data_frame_len: DEFAULT_MAX_DATA_FRAME_LEN,
        }
    }
}

impl EngineConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn unidirectional() -> Self {
        Self::new(Mode::Unidirectional)
    }

    pub fn bidirectional() -> Self {
        Self::new(Mode::Bidirectional)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_max_data_frame_len(mut self, len: u32) -> Self {
        self.max_data_frame_len = len;
        self
    }
}
