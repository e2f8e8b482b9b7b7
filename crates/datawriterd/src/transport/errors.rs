//! Errors raised while binding or running the writer listener.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Errors surfaced while binding or running the socket listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The TCP host name could not be resolved.
    #[error("failed to resolve TCP address {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
    /// Resolution succeeded but yielded no addresses.
    #[error("no TCP addresses resolved for {host}:{port}")]
    ResolveEmpty { host: String, port: u16 },
    /// Binding the TCP listener failed.
    #[error("failed to bind TCP listener at {addr}: {source}")]
    BindTcp {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The listener could not be made non-blocking.
    #[error("failed to switch listener to non-blocking mode: {source}")]
    NonBlocking {
        #[source]
        source: io::Error,
    },
    /// Unix endpoints were configured on a platform without them.
    #[cfg(not(unix))]
    #[error("unix sockets are unsupported on this platform: {endpoint}")]
    UnsupportedUnix { endpoint: String },
    /// Binding the unix listener failed.
    #[cfg(unix)]
    #[error("failed to bind unix listener at {path}: {source}")]
    BindUnix {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Another process is serving the socket path.
    #[cfg(unix)]
    #[error("unix socket {path} is already served by another writer")]
    UnixInUse { path: String },
    /// The socket path is occupied by something other than a socket.
    #[cfg(unix)]
    #[error("{path} exists and is not a unix socket")]
    UnixNotSocket { path: String },
    /// Reading metadata for an existing socket path failed.
    #[cfg(unix)]
    #[error("failed to inspect unix socket {path}: {source}")]
    UnixMetadata {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Probing an existing socket for a live listener failed.
    #[cfg(unix)]
    #[error("failed to connect to existing unix socket {path}: {source}")]
    UnixConnect {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Removing a stale socket file failed.
    #[cfg(unix)]
    #[error("failed to remove stale unix socket {path}: {source}")]
    UnixCleanup {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The accept loop thread panicked.
    #[error("listener thread panicked")]
    ThreadPanic,
}
