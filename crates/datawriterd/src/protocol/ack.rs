//! The acknowledgment every decoded envelope receives.

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, encode_frame};
use super::errors::HandlerError;

/// `message-type` carried by every acknowledgment.
pub const ACK_MESSAGE_TYPE: &str = "resilient-server-ack";

/// `accepted` value carried by every acknowledgment.
pub const ACCEPTED: &str = "true";

/// Reply confirming receipt of an envelope, whatever its kind.
///
/// Serialises to exactly four keys, in this order:
///
/// ```json
/// {"message-type":"resilient-server-ack","message-id":"m-1","incoming-type":"ping","accepted":"true"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Acknowledgment {
    /// Always [`ACK_MESSAGE_TYPE`].
    pub message_type: String,
    /// Copied from the envelope's `message-id`.
    pub message_id: String,
    /// Copied from the envelope's `message-type`.
    pub incoming_type: String,
    /// Always [`ACCEPTED`].
    pub accepted: String,
}

impl Acknowledgment {
    /// Builds the acknowledgment for an envelope.
    ///
    /// Missing `message-id` or `message-type` values are copied as empty
    /// strings; the envelope is acknowledged regardless.
    #[must_use]
    pub fn for_envelope(envelope: &Envelope) -> Self {
        Self {
            message_type: ACK_MESSAGE_TYPE.to_owned(),
            message_id: envelope.message_id().to_owned(),
            incoming_type: envelope.message_type().to_owned(),
            accepted: ACCEPTED.to_owned(),
        }
    }

    /// Serialises the acknowledgment as its single outbound frame.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Encode`] if serialisation fails.
    pub fn encode(&self) -> Result<Vec<u8>, HandlerError> {
        encode_frame(self)
    }

    /// Parses an acknowledgment frame, as a peer would.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Decode`] if the frame is not an acknowledgment.
    pub fn decode(frame: &[u8]) -> Result<Self, HandlerError> {
        serde_json::from_slice(frame).map_err(HandlerError::decode)
    }
}
