//! Failures that abort processing of a single writer message.
//!
//! None of these are retried. The handler returns them to the caller, which
//! decides whether to keep reading from the socket.

use std::io;

use thiserror::Error;

/// Errors surfaced while receiving, decoding or acknowledging a message.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The transport failed while reading the next message.
    #[error("failed to receive message: {source}")]
    Receive {
        #[source]
        source: io::Error,
    },

    /// The message arrived without any frames, so there is no envelope.
    #[error("message carried no envelope frame")]
    MissingEnvelope,

    /// Frame 0 was not a JSON object of string values.
    #[error("malformed envelope: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// A frame could not be serialised.
    #[error("failed to encode frame: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed while sending the acknowledgment.
    #[error("failed to send acknowledgment: {source}")]
    Send {
        #[source]
        source: io::Error,
    },
}

impl HandlerError {
    /// Wraps a transport read failure.
    pub fn receive(source: io::Error) -> Self {
        Self::Receive { source }
    }

    /// Wraps an envelope parse failure.
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    /// Wraps a serialisation failure.
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode { source }
    }

    /// Wraps a transport write failure.
    pub fn send(source: io::Error) -> Self {
        Self::Send { source }
    }

    /// Returns `true` when the peer sent something that is not an envelope,
    /// as opposed to the transport itself failing.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::MissingEnvelope | Self::Decode { .. })
    }
}
