//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

const BIND_ADDR_VAR: &str = "CARTS_BIND_ADDR";
const MONGODB_URI_VAR: &str = "CARTS_MONGODB_URI";
const DATABASE_VAR: &str = "CARTS_DATABASE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "carts";

/// Settings required to run the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Database holding the carts collection.
    pub database: String,
}

/// Failures while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured bind address did not parse as `host:port`.
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr {
        /// Environment variable that carried the value.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl AppConfig {
    /// Read configuration from the process environment, applying defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_VAR,
            value: bind.clone(),
        })?;

        Ok(Self {
            bind_addr,
            mongodb_uri: lookup(MONGODB_URI_VAR)
                .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_owned()),
            database: lookup(DATABASE_VAR).unwrap_or_else(|| DEFAULT_DATABASE.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults are valid");

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.mongodb_uri, DEFAULT_MONGODB_URI);
        assert_eq!(config.database, DEFAULT_DATABASE);
    }

    #[rstest]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(|var| match var {
            BIND_ADDR_VAR => Some("127.0.0.1:9999".to_owned()),
            MONGODB_URI_VAR => Some("mongodb://carts-db:27017".to_owned()),
            DATABASE_VAR => Some("carts_test".to_owned()),
            _ => None,
        })
        .expect("valid overrides");

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9999");
        assert_eq!(config.mongodb_uri, "mongodb://carts-db:27017");
        assert_eq!(config.database, "carts_test");
    }

    #[rstest]
    fn unparseable_bind_address_is_rejected() {
        let err = AppConfig::from_lookup(|var| {
            (var == BIND_ADDR_VAR).then(|| "not-an-address".to_owned())
        })
        .expect_err("invalid address rejected");

        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: "not-an-address".to_owned(),
            }
        );
    }
}
