//! Configuration loaders for bootstrap and launch scenarios.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use ortho_config::OrthoError;
use tempfile::TempDir;

use datawriter_config::{Config, SocketEndpoint};

use crate::bootstrap::ConfigLoader;

/// Loader that places the writer socket in a fresh temporary directory.
pub struct TestConfigLoader {
    socket_dir: TempDir,
}

impl TestConfigLoader {
    pub fn new() -> Self {
        let socket_dir = TempDir::new().expect("failed to create temporary socket directory");
        Self { socket_dir }
    }

    /// Path the writer socket will be bound at.
    pub fn socket_path(&self) -> PathBuf {
        self.socket_dir.path().join("sockets").join("writer.sock")
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let path = self.socket_path();
        let path = path
            .to_str()
            .expect("temporary socket path was not valid UTF-8");
        Ok(Config {
            writer_socket: SocketEndpoint::unix(path),
            ..Config::default()
        })
    }
}

/// Loader that fails by passing an unsupported socket scheme.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load_from_iter([
            OsString::from("datawriterd"),
            OsString::from("--writer-socket"),
            OsString::from("invalid://socket"),
        ])
    }
}
