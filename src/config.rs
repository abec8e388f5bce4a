//! Configuration module
//!
//! Settings come from an optional TOML file and the environment. The
//! environment wins: `DATABASE_URL` replaces `[database].url`.
//!
//! ```toml
//! [database]
//! url = "postgres://localhost/lunchly"
//! max_connections = 1
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::ConfigError;

/// Database section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overlay environment variables, reading `.env` first.
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.apply_database_url(url);
        }
    }

    fn apply_database_url(&mut self, url: String) {
        if !url.trim().is_empty() {
            self.database.url = url;
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }
}

/// `<config dir>/lunchly/config.toml`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("lunchly"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}
