//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that an absent
//! file still yields a complete configuration.

pub mod api;
pub mod cache;
pub mod link;
pub mod logging;
pub mod navigation;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::cache::CacheConfig;
use self::link::LinkConfig;
use self::logging::LoggingConfig;
use self::navigation::NavigationConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Test-management REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Expansion sequencer timing and attempt budgets.
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Share link construction settings.
    #[serde(default)]
    pub link: LinkConfig,
    /// Path index snapshot cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `FOLDERNAV__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", Some(&format!("config/{env}")))
    }

    /// Load configuration from an explicit base file and optional overlay.
    ///
    /// Missing files are not an error; every section falls back to its
    /// defaults.
    pub fn load_from(base: &str, overlay: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(base).required(false));
        if let Some(overlay) = overlay {
            builder = builder.add_source(config::File::with_name(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("FOLDERNAV")
                    .prefix_separator("__")
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
