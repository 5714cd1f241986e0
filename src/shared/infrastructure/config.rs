// Runtime configuration read from the environment.
//
// Variables
// - FULFILLMENT_ADDR: socket address to listen on, default 0.0.0.0:5001.
// - FULFILLMENT_SEED_FILE: optional JSON file of orders to import at boot.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "FULFILLMENT_ADDR";
pub const SEED_FILE_VAR: &str = "FULFILLMENT_SEED_FILE";
const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5001);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = match lookup(ADDR_VAR).filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: ADDR_VAR,
                value,
            })?,
            None => SocketAddr::from(DEFAULT_ADDR),
        };
        let seed_file = lookup(SEED_FILE_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, seed_file })
    }
}
