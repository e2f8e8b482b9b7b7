//! Structured health reporting for daemon lifecycle events.

use std::sync::Arc;

use datawriter_config::{Config, SocketEndpoint};

use crate::bootstrap::BootstrapError;
use crate::protocol::HandlerError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer for daemon and connection lifecycle events.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the writer socket is accepting connections.
    fn listener_ready(&self, endpoint: &SocketEndpoint);

    /// Invoked when a peer disconnects cleanly.
    fn connection_closed(&self, peer: &str, acknowledged: u64);

    /// Invoked when a message aborts its connection.
    fn connection_failed(&self, peer: &str, error: &HandlerError);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn listener_ready(&self, endpoint: &SocketEndpoint) {
        (**self).listener_ready(endpoint);
    }

    fn connection_closed(&self, peer: &str, acknowledged: u64) {
        (**self).connection_closed(peer, acknowledged);
    }

    fn connection_failed(&self, peer: &str, error: &HandlerError) {
        (**self).connection_failed(peer, error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting writer bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            socket = %config.writer_socket(),
            log_filter = %config.log_filter(),
            log_format = %config.log_format(),
            "writer bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "writer bootstrap failed"
        );
    }

    fn listener_ready(&self, endpoint: &SocketEndpoint) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "listener_ready",
            endpoint = %endpoint,
            "writer socket ready"
        );
    }

    fn connection_closed(&self, peer: &str, acknowledged: u64) {
        tracing::debug!(
            target: HEALTH_TARGET,
            event = "connection_closed",
            peer,
            acknowledged,
            "peer disconnected"
        );
    }

    fn connection_failed(&self, peer: &str, error: &HandlerError) {
        if error.is_decode() {
            tracing::warn!(
                target: HEALTH_TARGET,
                event = "connection_failed",
                peer,
                error = %error,
                "peer sent a malformed message; closing connection"
            );
        } else {
            tracing::warn!(
                target: HEALTH_TARGET,
                event = "connection_failed",
                peer,
                error = ?error,
                "transport failed; closing connection"
            );
        }
    }
}
