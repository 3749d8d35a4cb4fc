//! Blocking frame-level reads over a byte stream.
//!
//! Reads distinguish a clean end of stream (nothing read at a frame boundary) from
//! a frame cut short, which is reported as `TapError::TruncatedFrame`.

use std::io::{self, Read, Write};

use crate::dnstap::types::TapError;

/// Read until `buf` is full or the stream ends. Returns the number of bytes read.
pub fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read a frame length at a frame boundary. `None` means the stream ended cleanly.
pub fn read_frame_len<R: Read + ?Sized>(r: &mut R) -> Result<Option<u32>, TapError> {
    let mut b = [0u8; 4];
    match read_full(r, &mut b)? {
        0 => Ok(None),
        4 => Ok(Some(u32::from_be_bytes(b))),
        n => Err(TapError::TruncatedFrame { expected: 4, actual: n }),
    }
}

/// Read a 4-byte big-endian value inside a frame.
pub fn read_u32<R: Read + ?Sized>(r: &mut R) -> Result<u32, TapError> {
    let mut b = [0u8; 4];
    let n = read_full(r, &mut b)?;
    if n < 4 {
        return Err(TapError::TruncatedFrame { expected: 4, actual: n });
    }
    Ok(u32::from_be_bytes(b))
}

/// Read exactly `len` bytes into `buf`, replacing its contents.
pub fn read_payload<R: Read + ?Sized>(r: &mut R, len: usize, buf: &mut Vec<u8>) -> Result<(), TapError> {
    buf.clear();
    buf.resize(len, 0);

    let n = read_full(r, buf)?;
    if n < len {
        buf.truncate(n);
        return Err(TapError::TruncatedFrame { expected: len, actual: n });
    }
    Ok(())
}

/// Adapts a read-only source to the engine's duplex stream.
/// Any write fails; unidirectional streams never write.
#[derive(Debug)]
pub struct ReadOnly<R: Read> {
    inner: R,
}

impl<R: Read> ReadOnly<R> {
    pub fn new(inner: R) -> Self {
        ReadOnly { inner }
    }
}

impl<R: Read> Read for ReadOnly<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> Write for ReadOnly<R> {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "stream is read-only"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
