//! Data frame payload decoding.
//!
//! The engine does not know the payload schema; it hands each payload to a
//! `MessageDecoder` and moves the result into the sink.

use std::error::Error;
use std::marker::PhantomData;

use hickory_proto::error::ProtoError;
use hickory_proto::op::Message;

pub trait MessageDecoder {
    type Message;
    type Error: Error + Send + Sync + 'static;

    fn decode(&self, payload: &[u8]) -> Result<Self::Message, Self::Error>;
}

/// Decodes payloads that are raw DNS wire-format messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireDecoder;

impl MessageDecoder for WireDecoder {
    type Message = Message;
    type Error = ProtoError;

    fn decode(&self, payload: &[u8]) -> Result<Message, ProtoError> {
        Message::from_vec(payload)
    }
}

/// Wraps a closure as a decoder.
pub struct FnDecoder<F, M, E> {
    f: F,
    _marker: PhantomData<fn() -> (M, E)>,
}

impl<F, M, E> FnDecoder<F, M, E>
where
    F: Fn(&[u8]) -> Result<M, E>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, M, E> MessageDecoder for FnDecoder<F, M, E>
where
    F: Fn(&[u8]) -> Result<M, E>,
    E: Error + Send + Sync + 'static,
{
    type Message = M;
    type Error = E;

    fn decode(&self, payload: &[u8]) -> Result<M, E> {
        (self.f)(payload)
    }
}
