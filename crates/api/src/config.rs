//! Runtime configuration, read from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SABERWING_BIND_ADDR";
pub const ESTIMATOR_SEED_VAR: &str = "SABERWING_ESTIMATOR_SEED";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} is not a valid u64 seed: {value}")]
    InvalidSeed { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// When set, every analysis request is seeded with this value and
    /// identical requests produce identical responses.
    pub estimator_seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let estimator_seed = match lookup(ESTIMATOR_SEED_VAR) {
            None => None,
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                var: ESTIMATOR_SEED_VAR,
                value: v.clone(),
            })?),
        };

        Ok(Self {
            bind_addr,
            estimator_seed,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            estimator_seed: None,
        }
    }
}
