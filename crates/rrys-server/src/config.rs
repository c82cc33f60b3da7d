//! Environment configuration for the API server.

use std::net::{Ipv4Addr, SocketAddr};

use rrys_core::ClientConfig;
use thiserror::Error;

const DEFAULT_DOMAIN: &str = "www.rrys2020.com";
const DEFAULT_PORT: u16 = 9000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Error raised when an environment variable holds an unusable value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Upstream site, `DOMAIN`
    pub domain: String,
    /// Listen port, `FC_SERVER_PORT`
    pub port: u16,
    /// Upstream request timeout, `UPSTREAM_TIMEOUT_SECS`
    pub upstream_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            port: DEFAULT_PORT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let domain = lookup("DOMAIN")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or(defaults.domain);

        let port = match lookup("FC_SERVER_PORT") {
            Some(value) => parse_number("FC_SERVER_PORT", value)?,
            None => defaults.port,
        };

        let upstream_timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => parse_number("UPSTREAM_TIMEOUT_SECS", value)?,
            None => defaults.upstream_timeout_secs,
        };

        Ok(Self {
            domain,
            port,
            upstream_timeout_secs,
        })
    }

    /// Address the server listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Upstream client configuration derived from this server configuration.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = if self.domain.starts_with("http://") || self.domain.starts_with("https://")
        {
            ClientConfig {
                base_url: self.domain.clone(),
                ..ClientConfig::default()
            }
        } else {
            ClientConfig::for_domain(&self.domain)
        };
        config.timeout_secs = self.upstream_timeout_secs;
        config
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}
