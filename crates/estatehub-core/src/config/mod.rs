//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an absent file yields a
//! usable configuration.

pub mod inbox;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::inbox::{InboxConfig, SidebarConfig};
use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification classification settings.
    #[serde(default)]
    pub inbox: InboxConfig,
    /// Initial sidebar state.
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overlaid with environment variables
    /// prefixed with `ESTATEHUB__` (e.g. `ESTATEHUB__INBOX__LINK_MATCH=segment`).
    pub fn load(path: &str) -> AppResult<Self> {
        tracing::debug!(path, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ESTATEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
