//! Kind-specific handling that follows the acknowledgment.

use std::sync::Arc;

use crate::protocol::Envelope;

use super::events::EventSink;
use super::kind::MessageKind;

/// Maps each [`MessageKind`] to its side-effect-only handler.
///
/// The mapping is the exhaustive match in [`DispatchTable::dispatch`]; the
/// only state is the event sink, fixed at construction.
#[derive(Clone)]
pub struct DispatchTable {
    events: Arc<dyn EventSink>,
}

impl DispatchTable {
    /// Builds a table that reports through `events`.
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self { events }
    }

    /// Runs the handler for the envelope's kind. Never fails.
    pub fn dispatch(&self, kind: &MessageKind, envelope: &Envelope) {
        match kind {
            MessageKind::Ping => {}
            MessageKind::Handshake => self.events.peer_handshake(envelope.client_address()),
            MessageKind::Signoff => self.events.peer_signoff(envelope.client_address()),
            MessageKind::Unrecognised(message_type) => self.events.unrecognised_message(
                message_type,
                envelope.client_address(),
                envelope.message_id(),
            ),
        }
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("DispatchTable").finish_non_exhaustive()
    }
}
