//! Event sink injected into the dispatch table.

use std::sync::Arc;

use super::DISPATCH_TARGET;

/// Receives the events dispatch handlers emit.
///
/// Implementations must not fail or block for long: they run on the socket's
/// thread between two messages.
pub trait EventSink: Send + Sync {
    /// A peer announced itself with `resilient-server-handshake`.
    fn peer_handshake(&self, client_address: &str);

    /// A peer left with `resilient-server-signoff`.
    fn peer_signoff(&self, client_address: &str);

    /// A message with no dispatch handler was acknowledged and dropped.
    fn unrecognised_message(&self, message_type: &str, client_address: &str, message_id: &str);
}

impl<T> EventSink for Arc<T>
where
    T: EventSink + ?Sized,
{
    fn peer_handshake(&self, client_address: &str) {
        (**self).peer_handshake(client_address);
    }

    fn peer_signoff(&self, client_address: &str) {
        (**self).peer_signoff(client_address);
    }

    fn unrecognised_message(&self, message_type: &str, client_address: &str, message_id: &str) {
        (**self).unrecognised_message(message_type, client_address, message_id);
    }
}

/// Sink that records dispatch events with `tracing`.
///
/// Handshakes and signoffs are logged at `info`; unrecognised messages at
/// `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Builds a new sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn peer_handshake(&self, client_address: &str) {
        tracing::info!(
            target: DISPATCH_TARGET,
            event = "peer_handshake",
            client_address,
            "handshake from {client_address}"
        );
    }

    fn peer_signoff(&self, client_address: &str) {
        tracing::info!(
            target: DISPATCH_TARGET,
            event = "peer_signoff",
            client_address,
            "signoff from {client_address}"
        );
    }

    fn unrecognised_message(&self, message_type: &str, client_address: &str, message_id: &str) {
        tracing::debug!(
            target: DISPATCH_TARGET,
            event = "unrecognised_message",
            message_type,
            client_address,
            message_id,
            "received {message_type} from {client_address} {message_id}"
        );
    }
}
