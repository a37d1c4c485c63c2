//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TICKETING_ADDR";

/// Environment variable holding the network file path.
pub const NETWORK_VAR: &str = "TICKETING_NETWORK";

/// Error reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
#[error("invalid {var} {value:?}: {source}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    #[source]
    pub source: AddrParseError,
}

/// Configuration for the ticketing server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Network definition to load. The built-in sample network is used
    /// when this is `None`.
    pub network_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration.
    pub fn new(addr: SocketAddr, network_path: Option<PathBuf>) -> Self {
        Self { addr, network_path }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from any variable lookup. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.addr = value.trim().parse().map_err(|source| ConfigError {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?;
        }

        config.network_path = lookup(NETWORK_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_path: None,
        }
    }
}
