//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional `fleet.toml`
//! file in the working directory, then `FLEET_*` environment variables.
//!
//! # Environment Variables
//! - `FLEET_HOST`: bind address (default: "0.0.0.0")
//! - `FLEET_PORT`: listen port (default: 5000)
//! - `FLEET_SESSION_TTL_SECONDS`: session lifetime; unset means sessions never expire
//! - `FLEET_REQUIRE_AUTH_FOR_ADMIN`: put user/car/report routes behind the bearer gate (default: false)
//! - `FLEET_SEED_DEMO_DATA`: load the demo data set on startup (default: true)
//! - `FLEET_CORS_PERMISSIVE`: allow any origin (default: true)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::SessionPolicy;

const ENV_PREFIX: &str = "FLEET";
const CONFIG_FILE: &str = "fleet";

/// Runtime configuration for the API service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub session_ttl_seconds: Option<u64>,
    pub require_auth_for_admin: bool,
    pub seed_demo_data: bool,
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            session_ttl_seconds: None,
            require_auth_for_admin: false,
            seed_demo_data: true,
            cors_permissive: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("require_auth_for_admin", defaults.require_auth_for_admin)?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .set_default("cors_permissive", defaults.cors_permissive)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session expiry policy derived from `session_ttl_seconds`
    pub fn session_policy(&self) -> SessionPolicy {
        SessionPolicy::from_ttl_seconds(self.session_ttl_seconds)
    }
}
