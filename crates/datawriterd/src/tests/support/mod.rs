//! Test doubles shared by the daemon's unit and behavioural suites.

mod config_loader;
mod events;
mod peer;
mod reporter;

pub use config_loader::{FailingConfigLoader, TestConfigLoader};
pub use events::{DispatchEvent, RecordingEventSink};
pub use peer::Peer;
pub use reporter::{HealthEvent, RecordingHealthReporter, wait_until};
