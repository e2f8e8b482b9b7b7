//! Multi-frame message transport.
//!
//! A message on the wire is a big-endian `u32` frame count followed by each
//! frame as a big-endian `u32` length and that many bytes:
//!
//! ```text
//! +-------+-------+---------+-------+---------+
//! | count | len 0 | frame 0 | len 1 | frame 1 | ...
//! +-------+-------+---------+-------+---------+
//! ```

use std::io::{self, Read, Write};

/// Ordered frames of one message.
pub type Frames = Vec<Vec<u8>>;

/// Largest frame accepted from a peer.
pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// Most frames accepted in a single message.
pub const MAX_FRAMES: usize = 16;

const HEADER_BYTES: usize = 4;

/// Synchronous message channel the writer handler reads from and replies on.
pub trait FrameTransport {
    /// Receives the next message.
    ///
    /// Returns `Ok(None)` when the peer closed the channel cleanly between
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fails or a message violates framing.
    fn recv_frames(&mut self) -> io::Result<Option<Frames>>;

    /// Sends one message made of `frames`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fails.
    fn send_frames(&mut self, frames: Frames) -> io::Result<()>;
}

/// [`FrameTransport`] over any byte stream.
#[derive(Debug)]
pub struct FramedStream<S> {
    stream: S,
}

impl<S> FramedStream<S> {
    /// Wraps a connected stream.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Returns the wrapped stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> FrameTransport for FramedStream<S> {
    fn recv_frames(&mut self) -> io::Result<Option<Frames>> {
        let Some(count) = read_message_header(&mut self.stream)? else {
            return Ok(None);
        };
        if count > MAX_FRAMES {
            return Err(invalid_data(format!(
                "message has {count} frames, limit is {MAX_FRAMES}"
            )));
        }

        let mut frames = Vec::with_capacity(count);
        for _ in 0..count {
            let len = read_length(&mut self.stream)?;
            if len > MAX_FRAME_BYTES {
                return Err(invalid_data(format!(
                    "frame of {len} bytes exceeds {MAX_FRAME_BYTES} byte limit"
                )));
            }
            let mut frame = vec![0_u8; len];
            self.stream.read_exact(&mut frame)?;
            frames.push(frame);
        }
        Ok(Some(frames))
    }

    fn send_frames(&mut self, frames: Frames) -> io::Result<()> {
        let encoded = encode_message(&frames)?;
        self.stream.write_all(&encoded)?;
        self.stream.flush()
    }
}

/// Encodes frames into a single wire message.
///
/// # Errors
///
/// Returns `InvalidInput` if the frame count or a frame length does not fit
/// in a `u32`.
pub fn encode_message(frames: &[Vec<u8>]) -> io::Result<Vec<u8>> {
    let total = frames.iter().map(|frame| HEADER_BYTES + frame.len()).sum::<usize>();
    let mut encoded = Vec::with_capacity(HEADER_BYTES + total);
    encoded.extend_from_slice(&to_u32(frames.len(), "frame count")?.to_be_bytes());
    for frame in frames {
        encoded.extend_from_slice(&to_u32(frame.len(), "frame length")?.to_be_bytes());
        encoded.extend_from_slice(frame);
    }
    Ok(encoded)
}

/// Reads the frame count, or `None` on EOF before the first byte.
fn read_message_header<R: Read>(reader: &mut R) -> io::Result<Option<usize>> {
    let mut header = [0_u8; HEADER_BYTES];
    let mut filled = 0;
    while filled < HEADER_BYTES {
        let Some(slot) = header.get_mut(filled..) else {
            break;
        };
        match reader.read(slot) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed inside message header",
                ));
            }
            Ok(read) => filled += read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(Some(from_u32(u32::from_be_bytes(header))))
}

fn read_length<R: Read>(reader: &mut R) -> io::Result<usize> {
    let mut header = [0_u8; HEADER_BYTES];
    reader.read_exact(&mut header)?;
    Ok(from_u32(u32::from_be_bytes(header)))
}

fn to_u32(value: usize, what: &str) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{what} {value} does not fit the wire format"),
        )
    })
}

fn from_u32(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn framed(bytes: Vec<u8>) -> FramedStream<Cursor<Vec<u8>>> {
        FramedStream::new(Cursor::new(bytes))
    }

    #[test]
    fn encodes_count_then_length_prefixed_frames() {
        let encoded = encode_message(&[b"ab".to_vec(), Vec::new()]).expect("encode");
        assert_eq!(encoded, vec![0, 0, 0, 2, 0, 0, 0, 2, b'a', b'b', 0, 0, 0, 0]);
    }

    #[test]
    fn reads_messages_in_arrival_order() {
        let mut bytes = encode_message(&[b"first".to_vec()]).expect("encode");
        bytes.extend(encode_message(&[b"second".to_vec(), b"body".to_vec()]).expect("encode"));
        let mut transport = framed(bytes);

        assert_eq!(
            transport.recv_frames().expect("first"),
            Some(vec![b"first".to_vec()])
        );
        assert_eq!(
            transport.recv_frames().expect("second"),
            Some(vec![b"second".to_vec(), b"body".to_vec()])
        );
        assert_eq!(transport.recv_frames().expect("eof"), None);
    }

    #[test]
    fn zero_frame_messages_are_delivered() {
        let mut transport = framed(vec![0, 0, 0, 0]);
        assert_eq!(transport.recv_frames().expect("empty message"), Some(Vec::new()));
    }

    #[test]
    fn eof_inside_header_is_unexpected() {
        let mut transport = framed(vec![0, 0]);
        let error = transport.recv_frames().expect_err("partial header");
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn eof_inside_frame_is_unexpected() {
        let mut transport = framed(vec![0, 0, 0, 1, 0, 0, 0, 8, b'x']);
        let error = transport.recv_frames().expect_err("truncated frame");
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn rejects_too_many_frames() {
        let count = u32::try_from(MAX_FRAMES + 1).expect("small count");
        let mut transport = framed(count.to_be_bytes().to_vec());
        let error = transport.recv_frames().expect_err("too many frames");
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_oversized_frames() {
        let len = u32::try_from(MAX_FRAME_BYTES + 1).expect("small length");
        let mut bytes = vec![0, 0, 0, 1];
        bytes.extend_from_slice(&len.to_be_bytes());
        let mut transport = framed(bytes);
        let error = transport.recv_frames().expect_err("oversized frame");
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn send_writes_a_single_encoded_message() {
        let mut transport = framed(Vec::new());
        transport
            .send_frames(vec![b"ack".to_vec()])
            .expect("send frames");
        assert_eq!(
            transport.into_inner().into_inner(),
            encode_message(&[b"ack".to_vec()]).expect("encode")
        );
    }
}
