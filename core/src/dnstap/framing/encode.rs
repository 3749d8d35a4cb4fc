use crate::constants::fstrm::{ESCAPE, FIELD_CONTENT_TYPE};
use crate::dnstap::framing::types::{ControlFrame, ControlType};

/// Encode a control frame into Frame Streams wire format.
///
/// Layout:
///
/// ```text
/// [ escape = 0 (4) ]
/// [ control length (4) ]
/// [ control type (4) ]
/// [ field type = CONTENT_TYPE (4) ][ field length (4) ][ content type (N) ]   (repeated)
/// ```
///
/// All integers are big-endian.
pub fn encode_control_frame(frame: &ControlFrame) -> Vec<u8> {
    let body_len = frame.body_len();
    let mut out = Vec::with_capacity(8 + body_len);

    out.extend_from_slice(&ESCAPE.to_be_bytes());
    out.extend_from_slice(&(body_len as u32).to_be_bytes());
    out.extend_from_slice(&frame.control_type.to_be_bytes());

    for ct in &frame.content_types {
        out.extend_from_slice(&FIELD_CONTENT_TYPE.to_be_bytes());
        out.extend_from_slice(&(ct.len() as u32).to_be_bytes());
        out.extend_from_slice(ct);
    }

    out
}

/// Encode a data frame: big-endian length followed by the payload.
pub fn encode_data_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// ACCEPT reply carrying the negotiated content type.
pub fn make_accept(content_type: &str) -> Vec<u8> {
    encode_control_frame(&ControlFrame::new(ControlType::Accept).with_content_type(content_type))
}

/// FINISH reply; carries no fields.
pub fn make_finish() -> Vec<u8> {
    encode_control_frame(&ControlFrame::new(ControlType::Finish))
}

pub fn make_ready(content_types: &[&str]) -> Vec<u8> {
    let frame = content_types
        .iter()
        .fold(ControlFrame::new(ControlType::Ready), |f, ct| f.with_content_type(ct));
    encode_control_frame(&frame)
}

pub fn make_start(content_type: &str) -> Vec<u8> {
    encode_control_frame(&ControlFrame::new(ControlType::Start).with_content_type(content_type))
}

pub fn make_stop() -> Vec<u8> {
    encode_control_frame(&ControlFrame::new(ControlType::Stop))
}
