use camino::Utf8PathBuf;

#[cfg(unix)]
use std::env;

#[cfg(unix)]
use dirs::runtime_dir;
#[cfg(unix)]
use libc::geteuid;

use crate::logging::LogFormat;
use crate::socket::SocketEndpoint;

/// TCP port used where Unix domain sockets are unavailable.
pub const DEFAULT_TCP_PORT: u16 = 8100;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// File name of the writer socket inside the runtime directory.
pub const SOCKET_FILE_NAME: &str = "writer.sock";

/// Default log filter expression.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter, for serde defaults.
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default log format.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default writer socket endpoint.
///
/// On Unix this is `$XDG_RUNTIME_DIR/datawriter/writer.sock`, falling back to
/// a per-user directory under the system temp dir. Elsewhere it is a loopback
/// TCP socket on [`DEFAULT_TCP_PORT`].
#[must_use]
pub fn default_socket_endpoint() -> SocketEndpoint {
    default_socket_endpoint_inner()
}

#[cfg(unix)]
fn default_socket_endpoint_inner() -> SocketEndpoint {
    let (mut base, apply_namespace) = match runtime_base_directory() {
        Some(dir) => (dir, false),
        None => (fallback_base_directory(), true),
    };

    base.push("datawriter");
    if apply_namespace {
        base.push(user_namespace());
    }

    SocketEndpoint::unix(base.join(SOCKET_FILE_NAME))
}

#[cfg(unix)]
fn runtime_base_directory() -> Option<Utf8PathBuf> {
    runtime_dir().and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
}

#[cfg(unix)]
fn fallback_base_directory() -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(env::temp_dir()).unwrap_or_else(|_| Utf8PathBuf::from("/tmp"))
}

#[cfg(unix)]
fn user_namespace() -> String {
    // SAFETY: geteuid has no preconditions and cannot fail.
    let uid = unsafe { geteuid() };
    format!("uid-{uid}")
}

#[cfg(not(unix))]
fn default_socket_endpoint_inner() -> SocketEndpoint {
    SocketEndpoint::tcp("127.0.0.1", DEFAULT_TCP_PORT)
}
