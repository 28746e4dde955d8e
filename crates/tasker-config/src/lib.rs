//! # tasker-config
//!
//! Layered configuration loading for Tasker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKER_*` prefix, `__` as separator)
//! 2. Project-level `.tasker/config.toml`
//! 3. User-level `~/.config/tasker/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKER_GENERAL__DATE_FORMAT` -> `general.date_format`,
//! `TASKER_DISPLAY__FORMAT` -> `display.format`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tasker_config::TaskerConfig;
//!
//! let config = TaskerConfig::load_with_dotenv().expect("config");
//! println!("dates are read as {}", config.general.date_format);
//! ```

mod display;
mod error;
mod general;

pub use display::{DisplayConfig, OUTPUT_FORMATS};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
const LOCAL_CONFIG_PATH: &str = ".tasker/config.toml";

/// Export variables from the nearest `.env` file into the process environment.
///
/// Returns the file that was read, or `None` when there is no `.env`.
/// Call this before installing a log subscriber so `TASKER_LOG` from the
/// file takes effect.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(Some(path))
        }
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(error),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl TaskerConfig {
    /// Load and validate configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = load_dotenv() {
            tracing::warn!(%error, "ignoring unreadable .env file");
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKER_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.display.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tasker").join("config.toml"))
    }
}
