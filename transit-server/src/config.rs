//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variable for the bind address.
pub const HOST_VAR: &str = "TRANSIT_HOST";

/// Environment variable for the listening port.
pub const PORT_VAR: &str = "TRANSIT_PORT";

/// Environment variable naming a JSON network file to seed from.
pub const NETWORK_FILE_VAR: &str = "TRANSIT_NETWORK_FILE";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for the transit server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Network file to seed from. The sample city is used when unset.
    pub network_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.parse().map_err(|_| ConfigError::Invalid {
                name: HOST_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.parse().map_err(|_| ConfigError::Invalid {
                name: PORT_VAR,
                value,
            })?;
        }

        config.network_file = lookup(NETWORK_FILE_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// The socket address to listen on.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            network_file: None,
        }
    }
}
