use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::utils::enum_name_or_hex;

/// Control frame type identifiers (Frame Streams).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum ControlType {
    Accept = 0x01,
    Start  = 0x02,
    Stop   = 0x03,
    Ready  = 0x04,
    Finish = 0x05,
}

impl ControlType {
    #[inline(always)]
    pub fn from_u32(v: u32) -> Result<Self, FrameError> {
        Self::try_from_primitive(v).map_err(|_| FrameError::UnknownControlType(v))
    }

    #[inline(always)]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        (self as u32).to_be_bytes()
    }
}

/// A decoded control frame.
///
/// Content types are kept as raw bytes; Frame Streams does not require them to be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFrame {
    pub control_type: ControlType,
    pub content_types: Vec<Vec<u8>>,
}

impl ControlFrame {
    pub fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            content_types: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl AsRef<[u8]>) -> Self {
        self.content_types.push(content_type.as_ref().to_vec());
        self
    }

    /// True if the frame lists `content_type` among its content type fields.
    pub fn offers(&self, content_type: &str) -> bool {
        self.content_types
            .iter()
            .any(|ct| ct.as_slice() == content_type.as_bytes())
    }

    /// Encoded length of type + fields (the value of the control length field).
    pub fn body_len(&self) -> usize {
        4 + self
            .content_types
            .iter()
            .map(|ct| 8 + ct.len())
            .sum::<usize>()
    }
}

fn control_type_name(raw: &u32) -> String {
    enum_name_or_hex::<ControlType>(*raw)
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("unknown control frame type: {}", control_type_name(.0))]
    UnknownControlType(u32),

    #[error("control frame length out of range: {0}")]
    ControlLength(u32),

    #[error("content type length out of range: {0}")]
    ContentTypeLength(u32),

    #[error("control field at offset {offset} declares {declared} bytes, {available} left in frame")]
    FieldOverrun {
        offset: usize,
        declared: usize,
        available: usize,
    },
}
