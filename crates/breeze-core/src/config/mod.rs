//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate
//! with a `BREEZE`-prefixed environment overlay. Each sub-module
//! represents a logical configuration section.

pub mod logging;
pub mod remote;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::remote::RemoteConfig;

use crate::error::DriveError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote drive store settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/default.toml`, an optional
    /// per-environment overlay, and `BREEZE__`-prefixed environment
    /// variables, in increasing precedence.
    pub fn load(env: &str) -> Result<Self, DriveError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BREEZE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DriveError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| DriveError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
