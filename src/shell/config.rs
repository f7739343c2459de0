use std::net::SocketAddr;

use thiserror::Error;

pub const HOST_VAR: &str = "SPORT_EVENTS_HOST";
pub const PORT_VAR: &str = "SPORT_EVENTS_PORT";
pub const LOG_VAR: &str = "SPORT_EVENTS_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
            log_filter: lookup(LOG_VAR).unwrap_or(defaults.log_filter),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
