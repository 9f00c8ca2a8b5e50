//! Configuration management for the bible-journey application.
//!
//! Settings are loaded from environment variables with sensible defaults and
//! then validated. Paths are expanded with `shellexpand`, so `~` and `$VAR`
//! references work.
//!
//! # Environment Variables
//!
//! - `BJ_DATA`: Dataset source, either an `http(s)://` base URL or a directory
//!   (defaults to ~/.bible-journey/data)
//! - `BJ_DIR`: Directory holding the journal storage (defaults to ~/.bible-journey)
//! - `BJ_ASSET_VERSION`: Cache-busting version for remote fetches (defaults to "build-9")
//! - `BJ_TRANSLATION`: Default translation code (defaults to "kjv")
//! - `HOME`: Used for the default directories

use crate::constants::{
    DEFAULT_ASSET_VERSION, DEFAULT_DATA_SUBDIR, DEFAULT_STATE_SUBDIR, DEFAULT_TRANSLATION,
    ENV_VAR_BJ_ASSET_VERSION, ENV_VAR_BJ_DATA, ENV_VAR_BJ_DIR, ENV_VAR_BJ_TRANSLATION,
    ENV_VAR_HOME,
};
use crate::dataset::{DirectoryFetcher, HttpFetcher, ResourceFetcher};
use crate::errors::{AppError, AppResult};
use crate::journal::storage::FileStore;
use reqwest::Url;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Where translation datasets are read from.
#[derive(Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Base URL of a dataset host
    Remote(String),
    /// Local directory holding the CSV files
    Directory(PathBuf),
}

impl DataSource {
    /// Interprets a raw setting: `http://` and `https://` values are remote,
    /// anything else is a directory path (expanded).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(DataSource::Remote(trimmed.to_string()));
        }
        Ok(DataSource::Directory(expand_path(trimmed)?))
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(_) => f.debug_tuple("Remote").field(&"[REDACTED_URL]").finish(),
            DataSource::Directory(_) => f
                .debug_tuple("Directory")
                .field(&"[REDACTED_PATH]")
                .finish(),
        }
    }
}

/// Configuration for the bible-journey application.
///
/// # Examples
///
/// ```
/// use bible_journey::config::{Config, DataSource};
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_source: DataSource::Directory(PathBuf::from("/srv/bible-journey/data")),
///     storage_dir: PathBuf::from("/home/me/.bible-journey"),
///     asset_version: "build-9".to_string(),
///     default_translation: "kjv".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Dataset source, from `BJ_DATA`.
    pub data_source: DataSource,

    /// Directory backing the journal key-value storage, from `BJ_DIR`.
    pub storage_dir: PathBuf,

    /// Version appended as `?v=` to remote dataset requests.
    pub asset_version: String,

    /// Translation used when none is given on the command line.
    pub default_translation: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_source", &self.data_source)
            .field("storage_dir", &"[REDACTED_PATH]")
            .field("asset_version", &self.asset_version)
            .field("default_translation", &self.default_translation)
            .finish()
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn env_or(name: &str, default: impl FnOnce() -> String) -> String {
    env::var(name).unwrap_or_else(|_| default())
}

impl Config {
    /// Loads configuration from environment variables with defaults.
    ///
    /// Call [`validate`](Self::validate) before use.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a path cannot be expanded.
    pub fn load() -> AppResult<Self> {
        let home = env::var(ENV_VAR_HOME).unwrap_or_default();
        let state_dir = format!("{}/{}", home, DEFAULT_STATE_SUBDIR);

        let storage_raw = env_or(ENV_VAR_BJ_DIR, || state_dir.clone());
        let data_raw = env_or(ENV_VAR_BJ_DATA, || {
            format!("{}/{}", state_dir, DEFAULT_DATA_SUBDIR)
        });

        Ok(Config {
            data_source: DataSource::parse(&data_raw)?,
            storage_dir: expand_path(storage_raw.trim())?,
            asset_version: env_or(ENV_VAR_BJ_ASSET_VERSION, || DEFAULT_ASSET_VERSION.to_string())
                .trim()
                .to_string(),
            default_translation: env_or(ENV_VAR_BJ_TRANSLATION, || DEFAULT_TRANSLATION.to_string())
                .trim()
                .to_lowercase(),
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when:
    /// - the storage or data directory is empty or relative
    /// - a remote data source is not a valid http(s) URL
    /// - the asset version or default translation is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.storage_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Storage directory path is empty".to_string()));
        }
        if !self.storage_dir.is_absolute() {
            return Err(AppError::Config(
                "Storage directory must be an absolute path".to_string(),
            ));
        }

        match &self.data_source {
            DataSource::Directory(dir) if dir.as_os_str().is_empty() => {
                return Err(AppError::Config("Data directory path is empty".to_string()));
            }
            DataSource::Directory(dir) if !dir.is_absolute() => {
                return Err(AppError::Config(
                    "Data directory must be an absolute path".to_string(),
                ));
            }
            DataSource::Remote(url) => {
                let parsed = Url::parse(url)
                    .map_err(|e| AppError::Config(format!("Invalid dataset URL: {}", e)))?;
                if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
                    return Err(AppError::Config(
                        "Dataset URL must be an http(s) URL with a host".to_string(),
                    ));
                }
            }
            DataSource::Directory(_) => {}
        }

        if self.asset_version.is_empty() {
            return Err(AppError::Config("Asset version is empty".to_string()));
        }
        if self.default_translation.is_empty() {
            return Err(AppError::Config("Default translation is empty".to_string()));
        }

        Ok(())
    }

    /// Builds the dataset fetcher for the configured source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the remote URL is invalid.
    pub fn fetcher(&self) -> AppResult<Box<dyn ResourceFetcher>> {
        let fetcher: Box<dyn ResourceFetcher> = match &self.data_source {
            DataSource::Remote(url) => Box::new(HttpFetcher::new(url, self.asset_version.clone())?),
            DataSource::Directory(dir) => Box::new(DirectoryFetcher::new(dir.clone())),
        };
        Ok(fetcher)
    }

    /// The file-backed storage medium for the journal.
    pub fn storage(&self) -> FileStore {
        FileStore::new(self.storage_dir.clone())
    }
}
