// Runtime settings for both binaries.
//
// `from_env` reads the process environment (after an optional `.env`);
// `from_lookup` takes any key lookup so parsing stays testable.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SHIFT_LOGGER_BIND_ADDR";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const API_URL_VAR: &str = "SHIFT_LOGGER_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "SHIFT_LOGGER_REQUEST_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not a valid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub request_timeout: Duration,
}

fn load_dotenv() {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = non_empty(&lookup, BIND_ADDR_VAR);
        let raw_addr = raw_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: BIND_ADDR_VAR,
            value: raw_addr.clone(),
        })?;
        Ok(Self {
            bind_addr,
            database_url: non_empty(&lookup, DATABASE_URL_VAR),
        })
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = non_empty(&lookup, API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match non_empty(&lookup, REQUEST_TIMEOUT_VAR) {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid {
                    name: REQUEST_TIMEOUT_VAR,
                    value: raw,
                })?,
        };

        Ok(Self {
            api_url,
            request_timeout,
        })
    }
}
