use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// Default cap on a single transient object, in bytes
pub const DEFAULT_MAX_OBJECT_BYTES: usize = 8 * 1024 * 1024;

/// Application configuration and constants
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: Arc<PathBuf>,
    pub shell_template: Arc<PathBuf>,
    pub max_object_bytes: usize,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5008,
            static_dir: Arc::new(PathBuf::from("static")),
            shell_template: Arc::new(PathBuf::from("static/html/base.html")),
            max_object_bytes: DEFAULT_MAX_OBJECT_BYTES,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        static_dir: PathBuf,
        shell_template: PathBuf,
        port: Option<u16>,
        host: Option<String>,
        max_object_bytes: Option<usize>,
    ) -> Self {
        Self {
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: port.unwrap_or(5008),
            static_dir: Arc::new(static_dir),
            shell_template: Arc::new(shell_template),
            max_object_bytes: max_object_bytes.unwrap_or(DEFAULT_MAX_OBJECT_BYTES),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
