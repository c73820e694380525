use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON store; `~/` is expanded.
    #[serde(default = "default_store")]
    pub store: PathBuf,
    /// First day of the week for `summary_week`.
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

fn default_store() -> PathBuf {
    Config::store_file()
}

fn default_week_start() -> String {
    "monday".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            week_start: default_week_start(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.punchclock`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    /// Return the default path of the JSON store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("clock_log.json")
    }

    /// Load the default configuration file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(config = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.week_start_day()?;
        Ok(cfg)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn week_start_day(&self) -> AppResult<Weekday> {
        self.week_start.trim().parse::<Weekday>().map_err(|_| {
            AppError::Config(format!("invalid week_start '{}'", self.week_start))
        })
    }
}
