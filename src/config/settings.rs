//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, ENV_SERVER_HOST, ENV_SERVER_PORT,
    ENV_USER_ID_ALLOCATION,
};
use crate::infra::IdAllocation;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub id_allocation: IdAllocation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            id_allocation: IdAllocation::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Unparsable values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup(ENV_SERVER_PORT) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}={:?}: {}", ENV_SERVER_PORT, raw, e);
                defaults.server_port
            }),
            None => defaults.server_port,
        };

        let id_allocation = match lookup(ENV_USER_ID_ALLOCATION) {
            Some(raw) => raw.parse::<IdAllocation>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", ENV_USER_ID_ALLOCATION, e);
                defaults.id_allocation
            }),
            None => defaults.id_allocation,
        };

        Self {
            server_host: lookup(ENV_SERVER_HOST).unwrap_or(defaults.server_host),
            server_port,
            id_allocation,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("USER_ID_ALLOCATION", "entry-count"),
        ]);

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.id_allocation, IdAllocation::EntryCount);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("SERVER_PORT", "http"), ("USER_ID_ALLOCATION", "random")]);

        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.id_allocation, IdAllocation::Monotonic);
    }
}
