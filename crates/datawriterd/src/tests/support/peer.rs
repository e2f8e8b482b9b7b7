//! Client side of the writer socket, as a remote peer would drive it.

use std::io;
use std::net::{SocketAddr, TcpStream};
#[cfg(unix)]
use std::path::Path;
use std::time::Duration;

#[cfg(unix)]
use std::os::unix::net::UnixStream;

use crate::protocol::Acknowledgment;
use crate::transport::{ConnectionStream, FrameTransport, FramedStream, Frames};

const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Connected peer speaking the multi-frame wire format.
pub struct Peer {
    transport: FramedStream<ConnectionStream>,
}

impl Peer {
    /// Connects to a TCP writer socket.
    pub fn connect_tcp(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).expect("connect to writer socket");
        stream
            .set_read_timeout(Some(READ_TIMEOUT))
            .expect("set read timeout");
        Self {
            transport: FramedStream::new(ConnectionStream::Tcp(stream)),
        }
    }

    /// Connects to a unix writer socket.
    #[cfg(unix)]
    pub fn connect_unix(path: &Path) -> Self {
        let stream = UnixStream::connect(path).expect("connect to writer socket");
        stream
            .set_read_timeout(Some(READ_TIMEOUT))
            .expect("set read timeout");
        Self {
            transport: FramedStream::new(ConnectionStream::Unix(stream)),
        }
    }

    /// Sends a message whose envelope names `kind`, `id` and `address`.
    pub fn send_envelope(&mut self, kind: &str, id: &str, address: &str) {
        let envelope = format!(
            r#"{{"message-type":"{kind}","message-id":"{id}","client-address":"{address}"}}"#
        );
        self.send(vec![envelope.into_bytes()]);
    }

    /// Sends raw frames.
    pub fn send(&mut self, frames: Frames) {
        self.transport.send_frames(frames).expect("send message");
    }

    /// Reads the next reply, `Ok(None)` meaning the writer closed the
    /// connection.
    pub fn recv(&mut self) -> io::Result<Option<Frames>> {
        self.transport.recv_frames()
    }

    /// Reads the next reply and decodes it as an acknowledgment.
    pub fn recv_ack(&mut self) -> Acknowledgment {
        let frames = self
            .recv()
            .expect("receive acknowledgment")
            .expect("writer closed the connection before acknowledging");
        assert_eq!(frames.len(), 1, "acknowledgment must be a single frame");
        let frame = frames.first().expect("acknowledgment frame");
        Acknowledgment::decode(frame).expect("decode acknowledgment")
    }
}
