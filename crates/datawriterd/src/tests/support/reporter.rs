//! Test double for [`HealthReporter`] that records structured events.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use datawriter_config::{Config, SocketEndpoint};

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;
use crate::protocol::HandlerError;

/// Health events tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEvent {
    /// Bootstrap started.
    BootstrapStarting,
    /// Bootstrap completed successfully.
    BootstrapSucceeded,
    /// Bootstrap failed with an error description.
    BootstrapFailed(String),
    /// The listener bound the given endpoint.
    ListenerReady(String),
    /// A peer disconnected after the given number of acknowledged messages.
    ConnectionClosed { acknowledged: u64 },
    /// A message ended its connection.
    ConnectionFailed { decode: bool, message: String },
}

impl HealthEvent {
    /// Whether the event marks the end of a connection.
    pub fn ends_connection(&self) -> bool {
        matches!(
            self,
            Self::ConnectionClosed { .. } | Self::ConnectionFailed { .. }
        )
    }
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    /// Blocks until `count` connections have ended, or two seconds pass.
    pub fn wait_for_connections_ended(&self, count: usize) -> bool {
        wait_until(|| {
            self.events()
                .iter()
                .filter(|event| event.ends_connection())
                .count()
                >= count
        })
    }

    fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn listener_ready(&self, endpoint: &SocketEndpoint) {
        self.record(HealthEvent::ListenerReady(endpoint.to_string()));
    }

    fn connection_closed(&self, _peer: &str, acknowledged: u64) {
        self.record(HealthEvent::ConnectionClosed { acknowledged });
    }

    fn connection_failed(&self, _peer: &str, error: &HandlerError) {
        self.record(HealthEvent::ConnectionFailed {
            decode: error.is_decode(),
            message: error.to_string(),
        });
    }
}

/// Polls `condition` every ten milliseconds for up to two seconds.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    condition()
}
