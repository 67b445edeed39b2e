//! Application configuration
//!
//! Loaded from a TOML file. Every section and field has a default, so a
//! partial file (or no file at all) yields a usable config.
//!
//! ```toml
//! [server]
//! api_host = "0.0.0.0"
//! api_port = 8080
//!
//! [database]
//! path = "/var/lib/palmaire/palmaire.db"
//!
//! [booking]
//! default_hold_minutes = 15
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::services::HoldSettings;
use crate::shared::errors::InfraError;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "PALMAIRE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Full connection URL; wins over `path` when set
    pub url: Option<String>,
    /// SQLite file path
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            path: "./palmaire.db".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `palmaire_booking=debug`
    pub level: String,
    /// `plain` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub default_hold_minutes: i64,
    pub min_hold_minutes: i64,
    pub max_hold_minutes: i64,
    /// Length of the availability calendar when no end date is given
    pub calendar_days: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let holds = HoldSettings::default();
        Self {
            default_hold_minutes: holds.default_minutes,
            min_hold_minutes: holds.min_minutes,
            max_hold_minutes: holds.max_minutes,
            calendar_days: 365,
        }
    }
}

impl BookingConfig {
    pub fn hold_settings(&self) -> HoldSettings {
        HoldSettings {
            default_minutes: self.default_hold_minutes,
            min_minutes: self.min_hold_minutes,
            max_minutes: self.max_hold_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Insert the unit catalog into an empty database on startup
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Read the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), InfraError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), InfraError> {
        let b = &self.booking;
        if b.min_hold_minutes <= 0
            || b.min_hold_minutes > b.max_hold_minutes
            || !(b.min_hold_minutes..=b.max_hold_minutes).contains(&b.default_hold_minutes)
        {
            return Err(InfraError::Config(format!(
                "booking hold minutes must satisfy 0 < min <= default <= max (got {} / {} / {})",
                b.min_hold_minutes, b.default_hold_minutes, b.max_hold_minutes
            )));
        }
        if b.calendar_days <= 0 {
            return Err(InfraError::Config(
                "booking.calendar_days must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// `$PALMAIRE_CONFIG`, else `<config dir>/palmaire-booking/config.toml`
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palmaire-booking")
        .join("config.toml")
}
