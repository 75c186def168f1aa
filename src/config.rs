//! Application configuration.
//!
//! Settings are layered, later sources overriding earlier ones: built-in
//! defaults, an optional `helpdesk.toml` in the working directory, then
//! `HELPDESK_*` environment variables (for example
//! `HELPDESK_DATABASE__PATH=/tmp/tickets.db`).

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration for the help-desk core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Where the SQLite store lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the database file; created on first use.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Database file in the per-user data directory, falling back to the
/// working directory on platforms without one.
fn default_database_path() -> PathBuf {
    ProjectDirs::from("", "", "helpdesk")
        .map(|dirs| dirs.data_dir().join("helpdesk.db"))
        .unwrap_or_else(|| PathBuf::from("helpdesk.db"))
}

impl Config {
    /// Loads configuration from `helpdesk.toml` and the environment.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("helpdesk").required(false))
            .add_source(config::Environment::with_prefix("HELPDESK").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Loads configuration, falling back to defaults when nothing is
    /// configured or the sources fail to parse.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path_names_the_file() {
        let config = Config::default();
        assert_eq!(
            config.database.path.file_name().and_then(|n| n.to_str()),
            Some("helpdesk.db")
        );
    }

    #[test]
    fn test_load_or_default_without_sources() {
        let config = Config::load_or_default();
        assert!(!config.database.path.as_os_str().is_empty());
    }
}
