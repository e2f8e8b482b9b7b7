//! Writer socket wire protocol.
//!
//! Every inbound message is a sequence of frames. Frame 0 is a JSON envelope:
//!
//! ```json
//! {"message-type":"resilient-server-handshake","message-id":"7f3a","client-address":"tcp://10.0.0.5:8200"}
//! ```
//!
//! Any further frames are an opaque body that the writer does not read.
//!
//! Each envelope that decodes is answered with a single-frame acknowledgment
//! before anything else happens:
//!
//! ```json
//! {"message-type":"resilient-server-ack","message-id":"7f3a","incoming-type":"resilient-server-handshake","accepted":"true"}
//! ```
//!
//! The reply needs no record of connected peers. Anything the writer needs
//! to know about the sender travels in the envelope itself.

mod ack;
mod envelope;
mod errors;

pub use self::ack::{ACCEPTED, ACK_MESSAGE_TYPE, Acknowledgment};
pub use self::envelope::{
    CLIENT_ADDRESS_KEY, Envelope, MESSAGE_ID_KEY, MESSAGE_TYPE_KEY, encode_frame,
};
pub use self::errors::HandlerError;
