//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

/// Default listen port, same as the service this replaces.
pub const DEFAULT_PORT: u16 = 4567;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 4567)
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Resolves the socket address to bind.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server_host
            .trim()
            .parse()
            .with_context(|| format!("invalid SERVER_HOST '{}'", self.server_host))?;
        Ok(SocketAddr::new(ip, self.server_port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
        }
    }
}
