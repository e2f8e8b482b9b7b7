//! Receive side of the resilient writer link.
//!
//! Peers connect to the writer socket configured through
//! [`datawriter_config`] and send multi-frame messages whose first frame is a
//! flat JSON envelope. For every envelope that decodes, the daemon replies
//! with a single-frame acknowledgment and only then dispatches on the
//! envelope's `message-type`:
//!
//! | `message-type`               | effect                                   |
//! |------------------------------|------------------------------------------|
//! | `ping`                       | none                                     |
//! | `resilient-server-handshake` | `info` event naming the `client-address` |
//! | `resilient-server-signoff`   | `info` event naming the `client-address` |
//! | anything else                | `debug` event, message dropped           |
//!
//! Malformed envelopes are never acknowledged. Handler failures end the
//! offending connection while the listener keeps serving others. No state
//! survives between messages.
//!
//! # Ordering and concurrency
//!
//! Each accepted connection is served on its own thread, one message at a
//! time. Messages from one peer are therefore acknowledged and dispatched
//! strictly in arrival order, and the acknowledgment for a message is sent
//! before the next message on that connection is read. Nothing orders
//! messages across connections, so an [`EventSink`](dispatch::EventSink) may be
//! called concurrently from several connection threads. The number of
//! concurrent connections is not capped.

mod bootstrap;
pub mod dispatch;
mod handler;
mod health;
mod process;
pub mod protocol;
mod telemetry;
pub mod transport;

pub use bootstrap::{
    BootstrapError, ConfigLoader, Daemon, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use handler::{HandleOutcome, WriterSocketHandler, send_ack};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{LaunchError, ShutdownError, ShutdownSignal, SystemShutdownSignal, run_daemon};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
