//! Dispatch of acknowledged envelopes by message kind.
//!
//! | `message-type`               | effect                                  |
//! |------------------------------|-----------------------------------------|
//! | `ping`                       | none                                    |
//! | `resilient-server-handshake` | `info` event naming the client address  |
//! | `resilient-server-signoff`   | `info` event naming the client address  |
//! | anything else                | `debug` event with type, address and id |
//!
//! Handlers keep no state between messages. Handshake and signoff are logged
//! only; no session is opened or closed.

mod events;
mod kind;
mod table;

pub use self::events::{EventSink, TracingEventSink};
pub use self::kind::MessageKind;
pub use self::table::DispatchTable;

/// Tracing target for dispatch events.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
