//! Envelope decoding and frame encoding.
//!
//! Frame 0 of every inbound message is a flat JSON object whose values are
//! all strings. The writer recognises three keys and carries the rest as an
//! uninterpreted map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::HandlerError;

/// Key naming the message kind.
pub const MESSAGE_TYPE_KEY: &str = "message-type";
/// Key carrying the sender's message identifier.
pub const MESSAGE_ID_KEY: &str = "message-id";
/// Key carrying the sender's reply address.
pub const CLIENT_ADDRESS_KEY: &str = "client-address";

/// Decoded envelope from frame 0 of an inbound message.
///
/// The recognised keys are optional: a structurally valid object that lacks
/// them still decodes, and the accessors report absence as an empty string.
/// When a key repeats, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct Envelope {
    /// Value of `message-type`.
    #[serde(
        rename = "message-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_type: Option<String>,
    /// Value of `message-id`.
    #[serde(
        rename = "message-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
    /// Value of `client-address`.
    #[serde(
        rename = "client-address",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_address: Option<String>,
    /// Kind-specific keys the writer does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Envelope {
    /// Builds an envelope carrying the three recognised keys.
    pub fn new(
        message_type: impl Into<String>,
        message_id: impl Into<String>,
        client_address: impl Into<String>,
    ) -> Self {
        Self {
            message_type: Some(message_type.into()),
            message_id: Some(message_id.into()),
            client_address: Some(client_address.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Adds an uninterpreted key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Parses frame 0 of an inbound message.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Decode`] when the frame is not JSON, the top
    /// level is not an object, or any value is not a string.
    pub fn decode(frame: &[u8]) -> Result<Self, HandlerError> {
        serde_json::from_slice(frame).map_err(HandlerError::decode)
    }

    /// Serialises the envelope as a single JSON frame.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Encode`] if serialisation fails.
    pub fn encode(&self) -> Result<Vec<u8>, HandlerError> {
        encode_frame(self)
    }

    /// `message-type`, or `""` when absent.
    #[must_use]
    pub fn message_type(&self) -> &str {
        self.message_type.as_deref().unwrap_or_default()
    }

    /// `message-id`, or `""` when absent.
    #[must_use]
    pub fn message_id(&self) -> &str {
        self.message_id.as_deref().unwrap_or_default()
    }

    /// `client-address`, or `""` when absent.
    #[must_use]
    pub fn client_address(&self) -> &str {
        self.client_address.as_deref().unwrap_or_default()
    }

    /// Recognised keys this envelope does not carry.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<&'static str> {
        [
            (MESSAGE_TYPE_KEY, &self.message_type),
            (MESSAGE_ID_KEY, &self.message_id),
            (CLIENT_ADDRESS_KEY, &self.client_address),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }
}

impl From<BTreeMap<String, String>> for Envelope {
    fn from(mut keys: BTreeMap<String, String>) -> Self {
        Self {
            message_type: keys.remove(MESSAGE_TYPE_KEY),
            message_id: keys.remove(MESSAGE_ID_KEY),
            client_address: keys.remove(CLIENT_ADDRESS_KEY),
            extra: keys,
        }
    }
}

/// Serialises any writer frame as compact JSON.
///
/// # Errors
///
/// Returns [`HandlerError::Encode`] if serialisation fails.
pub fn encode_frame<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HandlerError> {
    serde_json::to_vec(value).map_err(HandlerError::encode)
}
