//! Accepted connection streams and the handler seam the listener calls.

use std::io::{self, Read, Write};
use std::net::TcpStream;

#[cfg(unix)]
use std::os::unix::net::UnixStream;

/// Stream types accepted by the writer listener.
#[derive(Debug)]
pub enum ConnectionStream {
    /// Connection accepted on a TCP endpoint.
    Tcp(TcpStream),
    /// Connection accepted on a unix endpoint.
    #[cfg(unix)]
    Unix(UnixStream),
}

impl ConnectionStream {
    /// Human-readable peer address for logging.
    #[must_use]
    pub fn peer_label(&self) -> String {
        match self {
            Self::Tcp(stream) => stream
                .peer_addr()
                .map_or_else(|_| "tcp:unknown".to_owned(), |addr| format!("tcp:{addr}")),
            #[cfg(unix)]
            Self::Unix(_) => "unix".to_owned(),
        }
    }
}

impl Read for ConnectionStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.read(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.read(buf),
        }
    }
}

impl Write for ConnectionStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.write(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.flush(),
            #[cfg(unix)]
            Self::Unix(stream) => stream.flush(),
        }
    }
}

/// Serves accepted connections. Implementations should avoid panicking.
pub trait ConnectionHandler: Send + Sync + 'static {
    /// Serves one connection until it closes or fails.
    fn handle(&self, stream: ConnectionStream);
}
