//! Connection loop that feeds each inbound message to the writer handler.

use std::sync::Arc;

use crate::handler::{HandleOutcome, WriterSocketHandler};
use crate::health::HealthReporter;

use super::{ConnectionHandler, ConnectionStream, FramedStream};

/// Serves one peer connection, one message at a time.
///
/// Messages are handled in arrival order until the peer disconnects. Any
/// [`HandlerError`](crate::protocol::HandlerError) ends the connection; the
/// listener keeps accepting new ones.
pub struct WriterConnectionHandler {
    handler: WriterSocketHandler,
    reporter: Arc<dyn HealthReporter>,
}

impl WriterConnectionHandler {
    /// Wraps a message handler and the reporter for connection lifecycle
    /// events.
    pub fn new(handler: WriterSocketHandler, reporter: Arc<dyn HealthReporter>) -> Self {
        Self { handler, reporter }
    }
}

impl ConnectionHandler for WriterConnectionHandler {
    fn handle(&self, stream: ConnectionStream) {
        let peer = stream.peer_label();
        let mut transport = FramedStream::new(stream);
        let mut acknowledged = 0_u64;
        loop {
            match self.handler.handle(&mut transport) {
                Ok(HandleOutcome::Acknowledged { .. }) => acknowledged += 1,
                Ok(HandleOutcome::PeerClosed) => {
                    self.reporter.connection_closed(&peer, acknowledged);
                    return;
                }
                Err(error) => {
                    self.reporter.connection_failed(&peer, &error);
                    return;
                }
            }
        }
    }
}
