use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, server::ServerConfig};
use std::time::Duration;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub events_collection: String,
    pub operation_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Config {
    /// Environment variables, beyond those read by `MongoConfig` and `ServerConfig`:
    /// - `EVENTS_COLLECTION` (default: `events`)
    /// - `EVENTS_OPERATION_TIMEOUT_SECS` (default: 30)
    /// - `SHUTDOWN_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let events_collection =
            env_or_default("EVENTS_COLLECTION", domain_events::DEFAULT_COLLECTION);
        let operation_timeout = Duration::from_secs(env_parse_or(
            "EVENTS_OPERATION_TIMEOUT_SECS",
            domain_events::DEFAULT_OPERATION_TIMEOUT.as_secs(),
        )?);
        let shutdown_timeout = Duration::from_secs(env_parse_or("SHUTDOWN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            mongodb,
            server,
            environment,
            events_collection,
            operation_timeout,
            shutdown_timeout,
        })
    }
}
