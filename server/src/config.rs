//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

/// Error returned by [`ServerConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site_root` holding the compiled `pkg/` bundle.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: directory containing `pkg/`, default from Leptos options
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_empty(lookup("HOST")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let site_root = non_empty(lookup("SITE_ROOT")).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
