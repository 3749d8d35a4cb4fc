//! Frame Streams receiver.
//!
//! Drives one byte stream through the handshake/streaming state machine, decodes
//! each data frame and moves the decoded message into the sink, in arrival order.
//!
//! Transitions:
//!
//! ```text
//! Bidirectional:
//!   AwaitingHandshake --READY/ACCEPT--> AwaitingStart --START--> Streaming
//!   AwaitingHandshake --START/ACCEPT--> Streaming
//! Unidirectional:
//!   Streaming (initial; one leading START tolerated)
//! Both:
//!   Streaming --STOP (FINISH if bidirectional)--> Finished
//!   any state --end of stream at frame boundary--> Finished
//! ```

use std::io::{Read, Write};
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::constants::fstrm::ESCAPE;
use crate::dnstap::decoder::MessageDecoder;
use crate::dnstap::framing::{
    make_accept, make_finish, parse_control_frame, validate_control_len, ControlFrame, ControlType,
};
use crate::dnstap::io::{read_frame_len, read_payload, read_u32, ReadOnly};
use crate::dnstap::types::{EngineConfig, Mode, ProtocolState, TapError};
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot};

/// State owned by a single `process_stream` call.
#[derive(Debug)]
struct Session {
    state: ProtocolState,
    started: bool,
    counters: TelemetryCounters,
}

impl Session {
    fn new(mode: Mode) -> Self {
        Self {
            state: ProtocolState::initial(mode),
            started: false,
            counters: TelemetryCounters::default(),
        }
    }

    fn transition(&mut self, next: ProtocolState) {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "frame stream state change");
            self.state = next;
        }
    }
}

pub struct FrameProtocolEngine<D, F>
where
    D: MessageDecoder,
    F: FnMut(D::Message),
{
    decoder: D,
    sink: F,
    config: EngineConfig,
    buf: Vec<u8>,
}

impl<D, F> FrameProtocolEngine<D, F>
where
    D: MessageDecoder,
    F: FnMut(D::Message),
{
    pub fn new(decoder: D, sink: F, config: EngineConfig) -> Self {
        Self {
            decoder,
            sink,
            config,
            buf: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Receive and process frames until FINISHED or a fatal error.
    pub fn process_stream<S: Read + Write>(&mut self, stream: &mut S) -> Result<TelemetrySnapshot, TapError> {
        let timer = Instant::now();
        let mut session = Session::new(self.config.mode);
        debug!(mode = ?self.config.mode, state = ?session.state, "frame stream opened");

        while session.state != ProtocolState::Finished {
            let Some(len) = read_frame_len(stream)? else {
                self.on_end_of_stream(&mut session);
                break;
            };

            if len == ESCAPE {
                let frame = self.read_control_frame(stream, &mut session.counters)?;
                self.process_control_frame(stream, &mut session, frame)?;
            } else {
                self.process_data_frame(stream, &mut session, len)?;
            }
        }

        let snapshot = TelemetrySnapshot::from(&session.counters, timer.elapsed());
        debug!(
            frames_data = snapshot.frames_data,
            frames_control = snapshot.frames_control,
            "frame stream finished"
        );
        Ok(snapshot)
    }

    /// Process a read-only source. Only meaningful in unidirectional mode.
    pub fn process_reader<R: Read>(&mut self, reader: R) -> Result<TelemetrySnapshot, TapError> {
        let mut stream = ReadOnly::new(reader);
        self.process_stream(&mut stream)
    }

    fn read_control_frame<S: Read>(
        &mut self,
        stream: &mut S,
        counters: &mut TelemetryCounters,
    ) -> Result<ControlFrame, TapError> {
        let len = validate_control_len(read_u32(stream)?)?;
        read_payload(stream, len, &mut self.buf)?;

        let frame = parse_control_frame(&self.buf)?;
        counters.add_control(8 + len);
        trace!(control_type = ?frame.control_type, len, "control frame");
        Ok(frame)
    }

    fn process_control_frame<S: Write>(
        &mut self,
        stream: &mut S,
        session: &mut Session,
        frame: ControlFrame,
    ) -> Result<(), TapError> {
        use ControlType::*;
        use ProtocolState::*;

        let next = match (session.state, frame.control_type) {
            (AwaitingHandshake, Ready) => {
                self.check_content_type(&frame)?;
                self.send_control(stream, session, &make_accept(&self.config.content_type), false)?;
                AwaitingStart
            }
            (AwaitingHandshake, Start) => {
                self.check_content_type(&frame)?;
                self.send_control(stream, session, &make_accept(&self.config.content_type), false)?;
                session.started = true;
                Streaming
            }
            (AwaitingStart, Start) => {
                self.check_content_type(&frame)?;
                session.started = true;
                Streaming
            }
            (Streaming, Start)
                if self.config.mode == Mode::Unidirectional
                    && !session.started
                    && session.counters.frames_data == 0 =>
            {
                self.check_content_type(&frame)?;
                session.started = true;
                Streaming
            }
            (Streaming, Stop) => {
                if self.config.mode == Mode::Bidirectional {
                    self.send_control(stream, session, &make_finish(), true)?;
                }
                Finished
            }
            (Finished, t) => unreachable!("{:?} control frame processed after FINISHED", t),
            (state, t) => {
                return Err(TapError::ProtocolViolation(format!(
                    "unexpected {:?} control frame in state {:?}",
                    t, state
                )))
            }
        };

        session.transition(next);
        Ok(())
    }

    fn process_data_frame<S: Read>(
        &mut self,
        stream: &mut S,
        session: &mut Session,
        len: u32,
    ) -> Result<(), TapError> {
        match session.state {
            ProtocolState::Streaming => {}
            ProtocolState::Finished => unreachable!("data frame processed after FINISHED"),
            state => {
                return Err(TapError::ProtocolViolation(format!(
                    "data frame received in state {:?}",
                    state
                )))
            }
        }

        if len > self.config.max_data_frame_len {
            return Err(TapError::ProtocolViolation(format!(
                "data frame length {} exceeds maximum {}",
                len, self.config.max_data_frame_len
            )));
        }

        read_payload(stream, len as usize, &mut self.buf)?;
        session.counters.add_data(len as usize, 4);
        trace!(len, "data frame");

        let msg = self
            .decoder
            .decode(&self.buf)
            .map_err(|e| TapError::MalformedMessage(Box::new(e)))?;

        (self.sink)(msg);
        session.counters.add_delivered();
        Ok(())
    }

    fn on_end_of_stream(&self, session: &mut Session) {
        if self.config.mode == Mode::Bidirectional {
            warn!(state = ?session.state, "peer closed frame stream without STOP");
        } else {
            debug!("end of frame stream");
        }
        session.transition(ProtocolState::Finished);
    }

    fn check_content_type(&self, frame: &ControlFrame) -> Result<(), TapError> {
        if frame.content_types.is_empty() || frame.offers(&self.config.content_type) {
            return Ok(());
        }
        Err(TapError::ProtocolViolation(format!(
            "{:?} does not offer content type {}",
            frame.control_type, self.config.content_type
        )))
    }

    /// Write a control frame. With `ignore_err` a failed write is logged and dropped.
    fn send_control<S: Write>(
        &self,
        stream: &mut S,
        session: &mut Session,
        frame: &[u8],
        ignore_err: bool,
    ) -> Result<(), TapError> {
        match stream.write_all(frame).and_then(|_| stream.flush()) {
            Ok(()) => {
                session.counters.add_control_sent();
                Ok(())
            }
            Err(e) if ignore_err => {
                warn!(error = %e, "ignoring control frame write failure");
                Ok(())
            }
            Err(e) => Err(TapError::StreamIo(e)),
        }
    }
}
