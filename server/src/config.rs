//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },

    /// `BIND_HOST` is set but is not an IP address.
    #[error("invalid BIND_HOST {value:?}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let host = parse_host(std::env::var("BIND_HOST").ok().as_deref())?;
        Ok(Self { bind_addr: SocketAddr::new(host, port) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_HOST),
        Some(value) => value
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost { value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
