//! Shared configuration for the datawriter daemon.
//!
//! Values are layered by [`ortho_config`]: built-in defaults, then an optional
//! configuration file (`--config-path` or `DATAWRITER_CONFIG_PATH`), then
//! `DATAWRITER_*` environment variables, then command-line flags.
//!
//! The configuration only covers what the daemon needs to stand up its
//! socket and event log. The writer protocol itself has no tunables.

mod defaults;
mod logging;
mod socket;

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_TCP_PORT, SOCKET_FILE_NAME, default_log_filter,
    default_log_filter_string, default_log_format, default_socket_endpoint,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use socket::{SocketEndpoint, SocketParseError, SocketPreparationError};

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "DATAWRITER")]
pub struct Config {
    /// Endpoint the writer socket binds to.
    #[serde(default = "default_socket_endpoint")]
    #[ortho_config(default = default_socket_endpoint())]
    pub writer_socket: SocketEndpoint,
    /// `tracing` filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for the event log.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            writer_socket: default_socket_endpoint(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Loads the configuration from the process arguments, environment and
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns the merged loader error when any layer is invalid.
    pub fn load() -> Result<Self, Arc<OrthoError>> {
        <Self as OrthoConfig>::load()
    }

    /// Loads the configuration using `args` in place of the process
    /// arguments. The first item is the program name.
    ///
    /// # Errors
    ///
    /// Returns the merged loader error when any layer is invalid.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, Arc<OrthoError>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// Endpoint the writer socket binds to.
    #[must_use]
    pub fn writer_socket(&self) -> &SocketEndpoint {
        &self.writer_socket
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
