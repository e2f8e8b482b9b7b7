//! Socket plumbing around the writer handler.
//!
//! The listener binds the configured endpoint and hands every accepted
//! stream to a [`ConnectionHandler`]. The writer's handler wraps the stream
//! in a [`FramedStream`] and processes one message per read.

mod connection;
mod errors;
mod frames;
mod listener;
mod stream;
#[cfg(test)]
mod test_utils;

pub use self::connection::WriterConnectionHandler;
pub use self::errors::ListenerError;
pub use self::frames::{
    FrameTransport, FramedStream, Frames, MAX_FRAME_BYTES, MAX_FRAMES, encode_message,
};
pub use self::listener::{ListenerHandle, SocketListener};
pub use self::stream::{ConnectionHandler, ConnectionStream};
#[cfg(test)]
pub(crate) use self::test_utils::{FrameRecorder, ReceivedMessage};

const LISTENER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");
