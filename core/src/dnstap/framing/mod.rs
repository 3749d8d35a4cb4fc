//! Frame Streams wire framing.
//!
//! Responsibilities:
//! - Define control frame types
//! - Encode control and data frames into the canonical byte layout
//! - Decode control frame bodies with strict validation
//!
//! Non-responsibilities:
//! - IO
//! - Protocol state

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    ControlFrame,
    ControlType,
    FrameError,
};

pub use encode::{
    encode_control_frame,
    encode_data_frame,
    make_accept,
    make_finish,
    make_ready,
    make_start,
    make_stop,
};

pub use decode::{
    parse_control_frame,
    validate_control_len,
};
