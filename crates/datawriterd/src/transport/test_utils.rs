//! Connection handler used by the listener tests.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use super::{ConnectionHandler, ConnectionStream, FrameTransport, FramedStream, Frames};

/// First message read from one accepted connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReceivedMessage {
    pub(crate) peer: String,
    pub(crate) frames: Option<Frames>,
}

/// Reads one framed message per connection and keeps it for inspection.
///
/// A peer that closes without sending anything is recorded with `frames`
/// set to `None`.
#[derive(Debug, Default)]
pub(crate) struct FrameRecorder {
    received: Mutex<Vec<ReceivedMessage>>,
}

impl FrameRecorder {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn received(&self) -> Vec<ReceivedMessage> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Polls until `expected` connections have been recorded or two seconds
    /// pass.
    pub(crate) fn wait_for(&self, expected: usize) -> Vec<ReceivedMessage> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            let received = self.received();
            if received.len() >= expected || Instant::now() >= deadline {
                return received;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl ConnectionHandler for FrameRecorder {
    fn handle(&self, stream: ConnectionStream) {
        let peer = stream.peer_label();
        let mut transport = FramedStream::new(stream);
        let frames = transport.recv_frames().ok().flatten();
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReceivedMessage { peer, frames });
    }
}
