use byteorder::{BigEndian, ByteOrder};

use crate::constants::fstrm::{FIELD_CONTENT_TYPE, MAX_CONTENT_TYPE_LEN, MAX_CONTROL_FRAME_LEN};
use crate::dnstap::framing::types::{ControlFrame, ControlType, FrameError};

/// Check the control length field before reading the body.
#[inline]
pub fn validate_control_len(len: u32) -> Result<usize, FrameError> {
    if !(4..=MAX_CONTROL_FRAME_LEN).contains(&len) {
        return Err(FrameError::ControlLength(len));
    }
    Ok(len as usize)
}

/// Parse a control frame body (everything after the control length field).
///
/// Caller guarantees the full body is provided, so a field running past its
/// end is a malformed frame. Fields other than CONTENT_TYPE are skipped.
pub fn parse_control_frame(body: &[u8]) -> Result<ControlFrame, FrameError> {
    if body.len() < 4 {
        return Err(FrameError::FieldOverrun {
            offset: 0,
            declared: 4,
            available: body.len(),
        });
    }

    let control_type = ControlType::from_u32(BigEndian::read_u32(&body[0..4]))?;
    let mut frame = ControlFrame::new(control_type);

    let mut off = 4;
    while off < body.len() {
        if body.len() - off < 8 {
            return Err(FrameError::FieldOverrun {
                offset: off,
                declared: 8,
                available: body.len() - off,
            });
        }

        let field_type = BigEndian::read_u32(&body[off..off + 4]);
        let field_len = BigEndian::read_u32(&body[off + 4..off + 8]);
        off += 8;

        let available = body.len() - off;
        let end = match off.checked_add(field_len as usize) {
            Some(end) if end <= body.len() => end,
            _ => {
                return Err(FrameError::FieldOverrun {
                    offset: off,
                    declared: field_len as usize,
                    available,
                })
            }
        };

        if field_type == FIELD_CONTENT_TYPE {
            if field_len > MAX_CONTENT_TYPE_LEN {
                return Err(FrameError::ContentTypeLength(field_len));
            }
            frame.content_types.push(body[off..end].to_vec());
        }

        off = end;
    }

    Ok(frame)
}
