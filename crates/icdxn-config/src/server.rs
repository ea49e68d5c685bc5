//! HTTP server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Parse `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.host".to_string(),
            reason: format!("{e}"),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_is_loopback() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn hostname_is_rejected() {
        let config = ServerConfig {
            host: "localhost".into(),
            port: 80,
        };
        let err = config.bind_addr().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }
}
