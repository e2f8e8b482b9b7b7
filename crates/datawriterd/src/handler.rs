//! Per-message processing for the writer socket.
//!
//! Each call handles exactly one inbound message:
//!
//! 1. receive the frames and decode frame 0 as an [`Envelope`];
//! 2. send the [`Acknowledgment`] as a single frame;
//! 3. dispatch on the [`MessageKind`].
//!
//! A failure at any step returns immediately, so an envelope that fails to
//! decode is never acknowledged and a failed send is never followed by
//! dispatch. Nothing is retained between calls.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::dispatch::{DispatchTable, EventSink, MessageKind};
use crate::protocol::{Acknowledgment, Envelope, HandlerError};
use crate::transport::FrameTransport;

/// Tracing target for message handling.
pub(crate) const HANDLER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::handler");

/// Result of one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// A message was acknowledged and dispatched.
    Acknowledged {
        /// Acknowledgment that was sent.
        ack: Acknowledgment,
        /// Kind the message was dispatched as.
        kind: MessageKind,
    },
    /// The peer closed the channel before sending another message.
    PeerClosed,
}

/// Receive-side handler for the writer socket.
#[derive(Debug, Clone)]
pub struct WriterSocketHandler {
    dispatch: DispatchTable,
}

impl WriterSocketHandler {
    /// Builds a handler whose dispatch events go to `events`.
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self {
            dispatch: DispatchTable::new(events),
        }
    }

    /// Reads one message from `transport` and processes it.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Receive`] if the read fails, and otherwise the
    /// errors of [`WriterSocketHandler::process`].
    pub fn handle<T>(&self, transport: &mut T) -> Result<HandleOutcome, HandlerError>
    where
        T: FrameTransport + ?Sized,
    {
        match transport.recv_frames().map_err(HandlerError::receive)? {
            Some(frames) => self.process(&frames, transport),
            None => Ok(HandleOutcome::PeerClosed),
        }
    }

    /// Acknowledges and dispatches a message that has already been received.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingEnvelope`] or [`HandlerError::Decode`]
    /// without sending anything when frame 0 is absent or malformed, and
    /// [`HandlerError::Encode`] or [`HandlerError::Send`] without dispatching
    /// when the acknowledgment cannot be sent.
    pub fn process<T>(
        &self,
        frames: &[Vec<u8>],
        transport: &mut T,
    ) -> Result<HandleOutcome, HandlerError>
    where
        T: FrameTransport + ?Sized,
    {
        let (envelope_frame, body) = frames.split_first().ok_or(HandlerError::MissingEnvelope)?;
        let envelope = Envelope::decode(envelope_frame)?;
        trace!(
            target: HANDLER_TARGET,
            message_type = envelope.message_type(),
            message_id = envelope.message_id(),
            body_frames = body.len(),
            "envelope decoded"
        );
        let missing = envelope.missing_keys();
        if !missing.is_empty() {
            debug!(
                target: HANDLER_TARGET,
                ?missing,
                message_id = envelope.message_id(),
                "envelope lacks recognised keys; acknowledging with empty values"
            );
        }

        let ack = send_ack(&envelope, transport)?;

        let kind = MessageKind::of(&envelope);
        self.dispatch.dispatch(&kind, &envelope);
        Ok(HandleOutcome::Acknowledged { ack, kind })
    }
}

/// Builds the acknowledgment for `envelope` and sends it as one frame.
///
/// # Errors
///
/// Returns [`HandlerError::Encode`] or [`HandlerError::Send`].
pub fn send_ack<T>(envelope: &Envelope, transport: &mut T) -> Result<Acknowledgment, HandlerError>
where
    T: FrameTransport + ?Sized,
{
    let ack = Acknowledgment::for_envelope(envelope);
    let frame = ack.encode()?;
    transport
        .send_frames(vec![frame])
        .map_err(HandlerError::send)?;
    Ok(ack)
}
