//! Recording [`EventSink`] for dispatch assertions.

use std::sync::Mutex;

use crate::dispatch::EventSink;

/// Dispatch events observed by the recording sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// A handshake naming the given client address.
    Handshake(String),
    /// A signoff naming the given client address.
    Signoff(String),
    /// An acknowledged message without a dispatch handler.
    Unrecognised {
        message_type: String,
        client_address: String,
        message_id: String,
    },
}

/// Records dispatch events in arrival order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DispatchEvent>>,
}

impl RecordingEventSink {
    /// Captures a copy of the recorded events.
    pub fn events(&self) -> Vec<DispatchEvent> {
        self.events
            .lock()
            .expect("event sink mutex poisoned")
            .clone()
    }

    fn record(&self, event: DispatchEvent) {
        self.events
            .lock()
            .expect("event sink mutex poisoned")
            .push(event);
    }
}

impl EventSink for RecordingEventSink {
    fn peer_handshake(&self, client_address: &str) {
        self.record(DispatchEvent::Handshake(client_address.to_owned()));
    }

    fn peer_signoff(&self, client_address: &str) {
        self.record(DispatchEvent::Signoff(client_address.to_owned()));
    }

    fn unrecognised_message(&self, message_type: &str, client_address: &str, message_id: &str) {
        self.record(DispatchEvent::Unrecognised {
            message_type: message_type.to_owned(),
            client_address: client_address.to_owned(),
            message_id: message_id.to_owned(),
        });
    }
}
